//! Memoizing icon service.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::source::SvgSource;
use crate::svg::{self, RenderStyle};

/// Resolves icon names to SVG markup through an injected [`SvgSource`].
///
/// Successful bodies are memoized for the service lifetime and never
/// evicted. A failed fetch is never cached, so absence always means "not
/// fetched yet or failed" and a later call retries. In-flight fetches are
/// not de-duplicated: concurrent calls for the same uncached name each
/// issue their own request.
pub struct IconService {
    source: Arc<dyn SvgSource>,
    cache: Mutex<HashMap<String, String>>,
}

impl IconService {
    /// Create a service around an SVG source.
    pub fn new(source: Arc<dyn SvgSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve an icon name to its raw SVG body.
    ///
    /// Cached bodies are returned without touching the source, so each
    /// distinct name is fetched at most once per successful resolution.
    /// Fetch failures are logged and reported as `None`.
    pub async fn icon(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.cache.lock().await.get(name) {
            return Some(cached.clone());
        }

        match self.source.fetch(name).await {
            Ok(body) => {
                tracing::debug!("Fetched icon {}", name);
                self.cache
                    .lock()
                    .await
                    .insert(name.to_string(), body.clone());
                Some(body)
            }
            Err(e) => {
                tracing::warn!("Failed to resolve icon {}: {}", name, e);
                None
            }
        }
    }

    /// Fetch a batch of icons concurrently, waiting for all to settle.
    pub async fn prefetch(&self, names: &[&str]) {
        let fetched = join_all(names.iter().map(|name| self.icon(name))).await;
        let loaded = fetched.iter().filter(|body| body.is_some()).count();
        tracing::info!("Prefetched {}/{} icons", loaded, names.len());
    }

    /// Render an icon as markup of the requested size.
    ///
    /// Never returns empty markup: unresolvable names produce a bordered
    /// placeholder box of the same size, labeled with the name.
    pub async fn render(&self, name: &str, size: u32, class: &str, style: RenderStyle) -> String {
        match self.icon(name).await {
            Some(body) => svg::render_svg(&body, size, class, style),
            None => svg::placeholder(name, size, class),
        }
    }

    /// Number of memoized SVG bodies.
    pub async fn cached(&self) -> usize {
        self.cache.lock().await.len()
    }
}
