//! Per-request inputs to read-model rendering.

use url::Url;

use openbook_core::config::media::MediaConfig;
use openbook_core::result::AppResult;
use openbook_core::types::UserId;

/// Request-dependent inputs needed while rendering read models.
///
/// The viewer decides viewer-relative fields such as `is_muted` and the
/// viewer's own community memberships. The media base turns stored media
/// paths into absolute URLs.
#[derive(Debug, Clone)]
pub struct RenderContext {
    viewer: Option<UserId>,
    media_base: Url,
}

impl RenderContext {
    /// Creates a context for the given viewer.
    pub fn new(viewer: Option<UserId>, media_base: Url) -> Self {
        Self { viewer, media_base }
    }

    /// Creates a context from the media configuration.
    pub fn from_config(viewer: Option<UserId>, media: &MediaConfig) -> AppResult<Self> {
        Ok(Self::new(viewer, media.base_url()?))
    }

    /// The authenticated viewer, if any.
    pub fn viewer(&self) -> Option<UserId> {
        self.viewer
    }

    /// Resolves a stored media path to an absolute URL.
    ///
    /// Paths that already are absolute URLs are returned unchanged.
    pub fn media_url(&self, path: &str) -> String {
        if Url::parse(path).is_ok() {
            return path.to_string();
        }

        match self.media_base.join(path.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Could not resolve media path");
                path.to_string()
            }
        }
    }

    /// Resolves an optional stored media path. Empty paths render as `None`.
    pub fn optional_media_url(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty()).map(|p| self.media_url(p))
    }
}
