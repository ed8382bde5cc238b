//! users-list: renders ordered user lists into a UI tree (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod components;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod snapshot;
pub mod ui;
