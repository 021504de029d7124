//! Media URL configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppError;

/// Where stored media files (avatars, covers, post images) are served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Absolute URL prefix prepended to stored media paths.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl MediaConfig {
    /// Parse the configured base URL.
    ///
    /// The URL must be absolute. A missing trailing slash is added so that
    /// relative joins keep the last path segment.
    pub fn base_url(&self) -> Result<Url, AppError> {
        let raw = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };

        Url::parse(&raw).map_err(|e| {
            AppError::configuration(format!("Invalid media base_url '{}': {e}", self.base_url))
        })
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/media/".to_string()
}
