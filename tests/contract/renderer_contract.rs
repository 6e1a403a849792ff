//! Contract tests every renderer-loader implementation must satisfy.
//!
//! Any loader plugged into a [`ComponentRegistry`] is expected to honor the
//! same observable contract: resolution is deterministic for a given
//! `(uid, relative_path, base_path)` triple, failures leave the registry
//! untouched, and successes register exactly one entry under the uid.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Map, Value};
use textloom_core::{
    join_component_path, ComponentRegistry, GenericRendererLoader, Renderer, RendererLoader,
    RegistryError, UnavailableRendererLoader,
};

/// A loader that counts invocations, for memoization assertions.
struct CountingLoader {
    calls: AtomicUsize,
}

impl CountingLoader {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

struct StaticRenderer;

impl Renderer for StaticRenderer {
    fn render(&self, data: &Map<String, Value>) -> Value {
        json!({ "props": data })
    }
}

impl RendererLoader for CountingLoader {
    fn load<'a>(
        &'a self,
        _uid: &'a str,
        _relative_path: &'a str,
        _base_path: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Arc<dyn Renderer>, RegistryError>> + Send + 'a>,
    > {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { Ok(Arc::new(StaticRenderer) as Arc<dyn Renderer>) })
    }
}

async fn assert_success_registers_uid(loader: Arc<dyn RendererLoader>) {
    let registry = ComponentRegistry::new(loader);

    registry
        .load_component("Card", "cards/Card", "components")
        .await
        .expect("loader resolves");

    assert!(registry.get("Card").is_some());
    assert_eq!(registry.list(), vec!["Card"]);
}

async fn assert_failure_leaves_registry_empty(loader: Arc<dyn RendererLoader>) {
    let registry = ComponentRegistry::new(loader);

    registry
        .load_component("Card", "cards/Card", "components")
        .await
        .expect_err("loader fails");

    assert!(registry.get("Card").is_none());
    assert!(registry.list().is_empty());
}

#[tokio::test]
async fn generic_loader_registers_on_success() {
    assert_success_registers_uid(Arc::new(GenericRendererLoader)).await;
}

#[tokio::test]
async fn counting_loader_registers_on_success() {
    assert_success_registers_uid(Arc::new(CountingLoader::new())).await;
}

#[tokio::test]
async fn unavailable_loader_leaves_registry_empty() {
    assert_failure_leaves_registry_empty(Arc::new(UnavailableRendererLoader)).await;
}

#[tokio::test]
async fn registered_uid_is_never_reloaded() {
    let loader = Arc::new(CountingLoader::new());
    let registry = ComponentRegistry::new(loader.clone());

    registry
        .load_component("Card", "cards/Card", "components")
        .await
        .expect("first load");
    registry
        .load_component("Card", "cards/Card", "components")
        .await
        .expect("memoized");

    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn generic_renderer_output_names_component_and_module() {
    let registry = ComponentRegistry::new(Arc::new(GenericRendererLoader));
    let renderer = registry
        .load_component("Chart", "charts/Chart", "components")
        .await
        .expect("generic loader resolves any path");

    let mut data = Map::new();
    data.insert(String::from("points"), json!([1, 2, 3]));
    let output = renderer.render(&data);

    assert_eq!(output["component"], "Chart");
    assert_eq!(output["module"], "components/charts/Chart");
    assert_eq!(output["props"]["points"], json!([1, 2, 3]));
}

#[test]
fn path_joining_is_separator_safe() {
    assert_eq!(join_component_path("components", "cards/Card"), "components/cards/Card");
    assert_eq!(join_component_path("components/", "cards/Card"), "components/cards/Card");
    assert_eq!(join_component_path("components", "/cards/Card"), "components/cards/Card");
    assert_eq!(join_component_path("", "cards/Card"), "cards/Card");
}
