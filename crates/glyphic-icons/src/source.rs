//! Sources of raw SVG bodies.

use std::time::Duration;

use async_trait::async_trait;

/// Errors produced while fetching an SVG body.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Icon {name} not found: HTTP {status}")]
    Status {
        name: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to fetch icon {name}: {source}")]
    Request {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A source of raw SVG markup, keyed by icon name.
///
/// The seam between the icon service and the network: production code
/// injects an [`HttpSource`], tests inject scripted implementations.
#[async_trait]
pub trait SvgSource: Send + Sync {
    /// Fetch the raw SVG body for one icon name.
    async fn fetch(&self, name: &str) -> Result<String, SourceError>;
}

/// Fetches icons from a static-asset HTTP endpoint, one file per name.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for `<base_url>/<name>.svg` URLs.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("glyphic/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, base_url)
    }

    /// Create a source with a preconfigured client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn svg_url(&self, name: &str) -> String {
        format!("{}/{}.svg", self.base_url, name)
    }
}

#[async_trait]
impl SvgSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(self.svg_url(name))
            .send()
            .await
            .map_err(|source| SourceError::Request {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                name: name.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| SourceError::Request {
            name: name.to_string(),
            source,
        })
    }
}
