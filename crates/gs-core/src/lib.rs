//! Core types shared across the gymstat workspace.

pub mod error;

pub use error::{Error, Result};

/// Tool version, surfaced in artifact metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
