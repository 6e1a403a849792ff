//! Definition source locators and the injected storage capability.

use std::future::Future;
use std::pin::Pin;

use crate::domain::Definitions;
use crate::error::LoadError;

/// Where a definitions document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionSource {
    /// Already-resolved document; passed through and never cached.
    Inline(Definitions),
    /// Fetched over HTTP(S) through the injected transport.
    Remote(String),
    /// Read through the host's storage capability.
    Local(String),
}

impl DefinitionSource {
    /// Locator syntax: a network scheme prefix means remote, any other
    /// string is a local path.
    pub fn from_locator(locator: &str) -> Self {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            Self::Remote(locator.to_string())
        } else {
            Self::Local(locator.to_string())
        }
    }

    /// Cache key for locator-backed sources. Inline documents have none and
    /// bypass the cache.
    pub fn cache_key(&self) -> Option<&str> {
        match self {
            Self::Inline(_) => None,
            Self::Remote(locator) | Self::Local(locator) => Some(locator),
        }
    }
}

impl From<&str> for DefinitionSource {
    fn from(locator: &str) -> Self {
        Self::from_locator(locator)
    }
}

impl From<Definitions> for DefinitionSource {
    fn from(definitions: Definitions) -> Self {
        Self::Inline(definitions)
    }
}

/// Storage capability injected by the host.
///
/// The concrete read mechanism is execution-context-dependent: networked or
/// headless hosts use [`FsContentSource`], sandboxed hosts without storage
/// access substitute [`NoStorage`].
pub trait ContentSource: Send + Sync {
    fn read<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LoadError>> + Send + 'a>>;
}

/// Filesystem-backed storage.
#[derive(Debug, Default)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn read<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LoadError>> + Send + 'a>> {
        Box::pin(async move {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|error| LoadError::Storage {
                    path: path.to_string(),
                    message: error.to_string(),
                })
        })
    }
}

/// Denying storage for execution contexts without filesystem access.
#[derive(Debug, Default)]
pub struct NoStorage;

impl ContentSource for NoStorage {
    fn read<'a>(
        &'a self,
        _path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LoadError>> + Send + 'a>> {
        Box::pin(async move {
            Err(LoadError::UnsupportedCapability {
                capability: "storage",
            })
        })
    }
}
