//! Configuration loading and layering.
//!
//! Handles `.users-list.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{
    Config, ConfigError, ConfigLayer, OutputConfig, OutputLayer, RenderConfig, RenderLayer,
    SnapshotConfig, SnapshotLayer,
};
