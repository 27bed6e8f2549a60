//! Platform-agnostic building blocks: data model, formatting, configuration and the snapshot source.

pub mod config;
pub mod error;
pub mod format;
pub mod platform;
pub mod snapshot;
pub mod source;
