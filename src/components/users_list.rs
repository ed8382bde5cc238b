//! `UsersList`: one heading row per user, in input order.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::config::RenderConfig;
use crate::models::User;
use crate::ui::{Component, Element, Node};

/// Renders a container with one heading per user showing the username.
///
/// An absent list renders exactly like an empty one: a container with no
/// rows.
#[derive(Debug, Clone)]
pub struct UsersList<'a> {
    users: Option<&'a [User]>,
    config: Cow<'a, RenderConfig>,
}

impl<'a> UsersList<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self::from_props(Some(users))
    }

    /// Build from a possibly absent `users` prop.
    pub fn from_props(users: Option<&'a [User]>) -> Self {
        Self {
            users,
            config: Cow::Owned(RenderConfig::default()),
        }
    }

    pub fn with_config(mut self, config: &'a RenderConfig) -> Self {
        self.config = Cow::Borrowed(config);
        self
    }

    pub fn users(&self) -> &'a [User] {
        self.users.unwrap_or_default()
    }

    fn row(&self, user: &User) -> Node {
        Element::new(self.config.heading.tag())
            .key(user.id.to_string())
            .class(&self.config.row_class)
            .text(user.username.as_str())
            .into()
    }
}

impl Component for UsersList<'_> {
    fn render(&self) -> Node {
        let users = self.users();
        warn_on_duplicate_ids(users);
        tracing::debug!(
            rows = users.len(),
            heading = %self.config.heading,
            absent = self.users.is_none(),
            "rendering users list"
        );

        Element::new("div")
            .class(self.config.container_class.as_deref().unwrap_or_default())
            .children(users.iter().map(|u| self.row(u)))
            .into()
    }
}

fn warn_on_duplicate_ids(users: &[User]) {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id) {
            tracing::warn!(id = user.id, username = %user.username, "duplicate user id in list");
        }
    }
}
