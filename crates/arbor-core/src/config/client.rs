//! API client configuration for the tree browser.

use serde::{Deserialize, Serialize};

/// Settings for the CLI tree browser's HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Arbor API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

fn default_timeout() -> u64 {
    30
}
