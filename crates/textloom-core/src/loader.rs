//! Resolution of definition sources into concrete documents.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::DefinitionsCache;
use crate::domain::Definitions;
use crate::error::LoadError;
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::source::{ContentSource, DefinitionSource, FsContentSource};

/// Default freshness bound for cached definitions documents.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Resolves definition sources through the injected transport and storage
/// capabilities, memoizing locator-backed results in a shared cache.
#[derive(Clone)]
pub struct DefinitionsLoader {
    http: Arc<dyn HttpClient>,
    content: Arc<dyn ContentSource>,
    cache: DefinitionsCache,
}

impl Default for DefinitionsLoader {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), Arc::new(FsContentSource))
    }
}

impl DefinitionsLoader {
    pub fn new(http: Arc<dyn HttpClient>, content: Arc<dyn ContentSource>) -> Self {
        Self {
            http,
            content,
            cache: DefinitionsCache::new(),
        }
    }

    pub fn cache(&self) -> &DefinitionsCache {
        &self.cache
    }

    /// Resolve a source without consulting the cache.
    pub async fn load(&self, source: &DefinitionSource) -> Result<Definitions, LoadError> {
        match source {
            DefinitionSource::Inline(definitions) => Ok(definitions.clone()),
            DefinitionSource::Remote(url) => {
                let response = self.http.get(url).await.map_err(|error| LoadError::Transport {
                    url: url.clone(),
                    message: error.to_string(),
                })?;
                if !response.is_success() {
                    return Err(LoadError::HttpStatus {
                        url: url.clone(),
                        status: response.status,
                    });
                }
                parse_document(&response.body, url)
            }
            DefinitionSource::Local(path) => {
                let body = self.content.read(path).await?;
                parse_document(&body, path)
            }
        }
    }

    /// Resolve through the cache.
    ///
    /// A hit younger than `ttl` (monotonic clock) is returned without
    /// refetching; a miss or stale hit loads and overwrites the entry on
    /// success. Concurrent misses for the same key are not coalesced: each
    /// may load, and the last writer wins the slot.
    pub async fn load_cached(
        &self,
        source: &DefinitionSource,
        ttl: Duration,
    ) -> Result<Definitions, LoadError> {
        let Some(key) = source.cache_key() else {
            return self.load(source).await;
        };

        if let Some(hit) = self.cache.get_fresh(key, ttl).await {
            return Ok(hit);
        }

        let definitions = self.load(source).await?;
        self.cache.put(key, definitions.clone()).await;
        Ok(definitions)
    }
}

fn parse_document(body: &str, locator: &str) -> Result<Definitions, LoadError> {
    serde_json::from_str(body).map_err(|error| LoadError::Malformed {
        locator: locator.to_string(),
        message: error.to_string(),
    })
}
