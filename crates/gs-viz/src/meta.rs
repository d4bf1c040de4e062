//! Shared artifact metadata header.

use gs_core::Result;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Provenance block attached to every artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactMeta {
    /// Emitting tool name.
    pub tool: String,
    /// Emitting tool version.
    pub tool_version: String,
    /// Creation timestamp, unix milliseconds.
    pub created_unix_ms: u128,
}

impl ArtifactMeta {
    /// Metadata stamped with the current time.
    pub fn now() -> Result<Self> {
        let d = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| gs_core::Error::Computation(format!("system time error: {}", e)))?;
        Ok(Self {
            tool: "gymstat".to_string(),
            tool_version: gs_core::VERSION.to_string(),
            created_unix_ms: d.as_millis(),
        })
    }
}
