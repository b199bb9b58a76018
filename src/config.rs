//! Viewer configuration.
//!
//! Settings live in a TOML file and may be overridden per invocation by CLI
//! flags. Every field has a default, so a config file only needs to state
//! what differs from the stock asset layout.
//!
//! ```toml
//! assets_base_url = "http://127.0.0.1:8080/"
//! base_uri = "http://127.0.0.1:8080/2013/card"
//! template_path = "/assets/ldp/templates/fileTemplate.html"
//! container_id = "viewerContent"
//! fetch_timeout_secs = 10
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::constants::{DEFAULT_CONTAINER_ID, DEFAULT_FETCH_TIMEOUT, DEFAULT_TEMPLATE_PATH};
use crate::core::ViewerError;

/// Settings for a viewer run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the asset server hosting the file template.
    pub assets_base_url: Url,

    /// Base URI of the resource whose graph is rendered.
    ///
    /// An empty base URI simply misses the cache and renders the
    /// placeholder.
    pub base_uri: String,

    /// Path of the file template on the asset server.
    pub template_path: String,

    /// Id of the container element receiving rendered fragments.
    pub container_id: String,

    /// Timeout for the template fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            assets_base_url: Url::parse("http://127.0.0.1:8080/")
                .expect("default asset base URL is valid"),
            base_uri: String::new(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ViewerError::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// The fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
