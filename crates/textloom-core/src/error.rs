use thiserror::Error;

/// Failures while resolving a definitions source.
///
/// Load failures are surfaced to the caller and never retried automatically.
/// Every other failure mode in the pipeline degrades to a visible in-place
/// artifact instead of an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("definitions fetch for '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("definitions fetch for '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("definitions read for '{path}' failed: {message}")]
    Storage { path: String, message: String },

    #[error("definitions document from '{locator}' is not valid JSON: {message}")]
    Malformed { locator: String, message: String },

    #[error("execution context provides no {capability} capability")]
    UnsupportedCapability { capability: &'static str },
}

/// Failures while resolving a renderer through the loader capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("renderer for '{uid}' could not be resolved from '{path}': {message}")]
    ResolveFailed {
        uid: String,
        path: String,
        message: String,
    },

    #[error("execution context cannot load renderers dynamically")]
    LoadingUnavailable,
}
