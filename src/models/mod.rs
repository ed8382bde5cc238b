//! Shared types used across all modules.
//!
//! User records and the small enums that configure rendering live here so
//! that `components`, `output`, and `config` import from one place.

pub mod user;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use user::{PayloadError, User, parse_users};

/// Heading element used for each user row.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    #[default]
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Tag name of the heading element.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}
