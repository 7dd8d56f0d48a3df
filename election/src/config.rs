//! Election configuration with TOML file support.

use serde::{Deserialize, Serialize};

/// Startup configuration for an election.
///
/// Loaded from a TOML file by the CLI (file settings as the base, flags
/// override) or built programmatically for tests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// Display name for the election.
    #[serde(default = "default_name")]
    pub name: String,

    /// Candidates to register at startup, in ballot order.
    #[serde(default)]
    pub candidates: Vec<String>,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            candidates: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Election".to_string()
}
