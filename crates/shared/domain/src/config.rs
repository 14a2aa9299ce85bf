use serde::Deserialize;

/// Connection settings for the PMT HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8080/api`. Trailing slashes are
    /// stripped by the client.
    pub base_url: String,
    pub timeout_seconds: u64,
}

// --- Default ---

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:8080/api".to_owned(), timeout_seconds: 30 }
    }
}
