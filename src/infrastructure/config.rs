/// Course Explorer schedule endpoint. Resource paths are appended directly,
/// so the trailing slash stays.
pub const DEFAULT_BASE_URL: &str = "http://courses.illinois.edu/cisapp/explorer/schedule/";

/// Runtime configuration for the fetch workflow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint the resource path is appended to.
    pub base_url: String,
}

impl Config {
    /// Configuration pointing at an alternate endpoint, e.g. a local test
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
