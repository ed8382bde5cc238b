//! Presentational components.

pub mod users_list;

pub use users_list::UsersList;
