//! Component registry and renderer resolution.
//!
//! The registry is an explicit instance handed to the orchestrator, never
//! hidden process-global state; tests construct isolated registries freely.
//! Renderer resolution is a pluggable capability so the set of component
//! kinds stays open: hosts add kinds without recompiling the core.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use serde_json::{json, Map, Value};

use crate::error::RegistryError;

/// Renderer capability owned by the host: turns a validated block's data
/// into a displayable artifact.
pub trait Renderer: Send + Sync {
    fn render(&self, data: &Map<String, Value>) -> Value;
}

impl std::fmt::Debug for dyn Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Renderer")
    }
}

type RendererLoadFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Arc<dyn Renderer>, RegistryError>> + Send + 'a>>;

/// Resolution capability mapping `(uid, relative_path, base_path)` to a
/// renderer. Execution contexts substitute their own implementation;
/// [`GenericRendererLoader`] is the default, [`UnavailableRendererLoader`]
/// models hosts without dynamic loading.
pub trait RendererLoader: Send + Sync {
    fn load<'a>(
        &'a self,
        uid: &'a str,
        relative_path: &'a str,
        base_path: &'a str,
    ) -> RendererLoadFuture<'a>;
}

/// Combine the configured base path with a definition's relative component
/// path.
pub fn join_component_path(base_path: &str, relative_path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let relative = relative_path.trim_start_matches('/');
    if base.is_empty() {
        relative.to_string()
    } else {
        format!("{base}/{relative}")
    }
}

/// Default loader: resolves any path to a pass-through renderer that wraps
/// the block data in a JSON artifact naming the component and its module
/// path.
#[derive(Debug, Default)]
pub struct GenericRendererLoader;

impl RendererLoader for GenericRendererLoader {
    fn load<'a>(
        &'a self,
        uid: &'a str,
        relative_path: &'a str,
        base_path: &'a str,
    ) -> RendererLoadFuture<'a> {
        let renderer = GenericRenderer {
            component: uid.to_string(),
            module: join_component_path(base_path, relative_path),
        };
        Box::pin(async move { Ok(Arc::new(renderer) as Arc<dyn Renderer>) })
    }
}

/// Pass-through renderer produced by [`GenericRendererLoader`].
#[derive(Debug, Clone)]
pub struct GenericRenderer {
    component: String,
    module: String,
}

impl GenericRenderer {
    pub fn new(component: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            module: module.into(),
        }
    }
}

impl Renderer for GenericRenderer {
    fn render(&self, data: &Map<String, Value>) -> Value {
        json!({
            "component": self.component,
            "module": self.module,
            "props": data,
        })
    }
}

/// Loader double for execution contexts that cannot resolve renderers
/// dynamically.
#[derive(Debug, Default)]
pub struct UnavailableRendererLoader;

impl RendererLoader for UnavailableRendererLoader {
    fn load<'a>(
        &'a self,
        _uid: &'a str,
        _relative_path: &'a str,
        _base_path: &'a str,
    ) -> RendererLoadFuture<'a> {
        Box::pin(async move { Err(RegistryError::LoadingUnavailable) })
    }
}

/// Explicit registry instance mapping component uids to renderers.
///
/// Lifecycle is manual: entries appear through [`register`] or
/// [`load_component`], never automatically. The lock is never held across
/// an await.
///
/// [`register`]: ComponentRegistry::register
/// [`load_component`]: ComponentRegistry::load_component
#[derive(Clone)]
pub struct ComponentRegistry {
    entries: Arc<RwLock<HashMap<String, Arc<dyn Renderer>>>>,
    loader: Arc<dyn RendererLoader>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new(Arc::new(GenericRendererLoader))
    }
}

impl ComponentRegistry {
    pub fn new(loader: Arc<dyn RendererLoader>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            loader,
        }
    }

    pub fn register(&self, uid: impl Into<String>, renderer: Arc<dyn Renderer>) {
        self.entries
            .write()
            .expect("registry lock poisoned")
            .insert(uid.into(), renderer);
    }

    pub fn get(&self, uid: &str) -> Option<Arc<dyn Renderer>> {
        self.entries
            .read()
            .expect("registry lock poisoned")
            .get(uid)
            .cloned()
    }

    /// Registered uids in sorted order.
    pub fn list(&self) -> Vec<String> {
        let mut uids: Vec<String> = self
            .entries
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        uids.sort();
        uids
    }

    /// Remove one uid, or everything when no uid is given.
    pub fn clear(&self, uid: Option<&str>) {
        let mut entries = self.entries.write().expect("registry lock poisoned");
        match uid {
            Some(uid) => {
                entries.remove(uid);
            }
            None => entries.clear(),
        }
    }

    /// Resolve a renderer through the loader capability and register it
    /// under `uid` as a side effect. An already-registered uid returns the
    /// existing renderer without reloading.
    pub async fn load_component(
        &self,
        uid: &str,
        relative_path: &str,
        base_path: &str,
    ) -> Result<Arc<dyn Renderer>, RegistryError> {
        if let Some(existing) = self.get(uid) {
            return Ok(existing);
        }

        let renderer = self.loader.load(uid, relative_path, base_path).await?;
        self.register(uid, renderer.clone());
        Ok(renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MarkerRenderer(&'static str);

    impl Renderer for MarkerRenderer {
        fn render(&self, _data: &Map<String, Value>) -> Value {
            json!({ "marker": self.0 })
        }
    }

    #[test]
    fn register_get_list_clear_lifecycle() {
        let registry = ComponentRegistry::default();
        registry.register("Card", Arc::new(MarkerRenderer("card")));
        registry.register("Chart", Arc::new(MarkerRenderer("chart")));

        assert!(registry.get("Card").is_some());
        assert_eq!(registry.list(), vec!["Card", "Chart"]);

        registry.clear(Some("Card"));
        assert!(registry.get("Card").is_none());
        assert!(registry.get("Chart").is_some());

        registry.clear(None);
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn load_component_registers_as_side_effect() {
        let registry = ComponentRegistry::default();

        let renderer = registry
            .load_component("Card", "cards/Card", "components")
            .await
            .expect("generic loader always resolves");
        let output = renderer.render(&Map::new());

        assert_eq!(output["component"], "Card");
        assert_eq!(output["module"], "components/cards/Card");
        assert!(registry.get("Card").is_some());
    }

    #[tokio::test]
    async fn load_component_memoizes_registered_uid() {
        let registry = ComponentRegistry::default();
        registry.register("Card", Arc::new(MarkerRenderer("original")));

        let renderer = registry
            .load_component("Card", "cards/Card", "components")
            .await
            .expect("existing renderer returned");

        assert_eq!(renderer.render(&Map::new())["marker"], "original");
    }

    #[tokio::test]
    async fn unavailable_loader_surfaces_registry_error() {
        let registry = ComponentRegistry::new(Arc::new(UnavailableRendererLoader));

        let error = registry
            .load_component("Card", "cards/Card", "components")
            .await
            .expect_err("loading unavailable");
        assert_eq!(error, RegistryError::LoadingUnavailable);
        assert!(registry.get("Card").is_none());
    }

    #[test]
    fn component_paths_join_without_duplicate_separators() {
        assert_eq!(join_component_path("components/", "/cards/Card"), "components/cards/Card");
        assert_eq!(join_component_path("", "cards/Card"), "cards/Card");
    }
}
