//! Tool registry and dispatcher.
//!
//! The registry is a closed table built once per process: each entry pairs a
//! [`ToolDescriptor`] with a handler that deserializes the argument object
//! into the tool's parameter type and runs it. The [`Dispatcher`] routes a
//! [`ToolRequest`] by name and always answers with a [`ToolResult`].

use std::collections::HashMap;
use std::future::Future;
use std::ops::Add;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use once_cell::sync::Lazy;
use rmcp::schemars::{self, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{ToolDescriptor, ToolRequest, ToolResult};

type Handler =
    Box<dyn Fn(Context, Value) -> BoxFuture<'static, Result<ToolResult, AppError>> + Send + Sync>;

struct ToolEntry {
    descriptor: ToolDescriptor,
    handler: Handler,
}

/// Ordered set of tools with constant-time lookup by name.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<&'static str, usize>,
}

static REGISTRY: Lazy<ToolRegistry> = Lazy::new(super::tools::registry);

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide tool table.
    pub fn global() -> &'static ToolRegistry {
        &REGISTRY
    }

    /// Register a tool whose arguments deserialize into `P`.
    ///
    /// The input schema advertised to callers is generated from `P`.
    pub fn tool<P, F, Fut>(
        mut self,
        name: &'static str,
        description: &'static str,
        run: F,
    ) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(Context, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolResult, AppError>> + Send + 'static,
    {
        debug_assert!(!self.index.contains_key(name), "duplicate tool {}", name);

        let handler: Handler = Box::new(move |ctx, arguments| {
            match serde_json::from_value::<P>(arguments) {
                Ok(params) => run(ctx, params).boxed(),
                Err(e) => future::ready(Err(AppError::InvalidArguments {
                    tool: name.to_string(),
                    message: e.to_string(),
                }))
                .boxed(),
            }
        });

        self.index.insert(name, self.entries.len());
        self.entries.push(ToolEntry {
            descriptor: ToolDescriptor {
                name,
                description,
                input_schema: Arc::new(input_schema::<P>()),
            },
            handler,
        });
        self
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.entry(name).map(|entry| &entry.descriptor)
    }

    fn entry(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}

/// Concatenate two registries, keeping order.
impl Add for ToolRegistry {
    type Output = ToolRegistry;

    fn add(mut self, other: ToolRegistry) -> ToolRegistry {
        for entry in other.entries {
            debug_assert!(!self.index.contains_key(entry.descriptor.name));
            self.index.insert(entry.descriptor.name, self.entries.len());
            self.entries.push(entry);
        }
        self
    }
}

/// JSON Schema object for a parameter type, with nested definitions inlined
/// so enumerations show up directly on their fields.
fn input_schema<P: JsonSchema>() -> Map<String, Value> {
    let schema = schemars::generate::SchemaSettings::draft07()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<P>();

    match serde_json::to_value(schema) {
        Ok(Value::Object(mut map)) => {
            map.remove("$schema");
            map.remove("title");
            map
        }
        _ => Map::from_iter([("type".to_string(), Value::from("object"))]),
    }
}

/// Routes tool requests to their handlers.
///
/// Requests run one at a time: clones share a gate that is held for the
/// whole invocation, so the services behind the tools never see two calls
/// at once even when the transport spawns a task per request.
#[derive(Clone)]
pub struct Dispatcher {
    ctx: Context,
    registry: &'static ToolRegistry,
    gate: Arc<Mutex<()>>,
}

impl Dispatcher {
    pub fn new(ctx: Context) -> Self {
        Self::with_registry(ctx, ToolRegistry::global())
    }

    fn with_registry(ctx: Context, registry: &'static ToolRegistry) -> Self {
        Self {
            ctx,
            registry,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// All tool descriptors, in stable order.
    pub fn list(&self) -> Vec<&'static ToolDescriptor> {
        self.registry.descriptors().collect()
    }

    /// Run one request to completion.
    ///
    /// Never fails: unknown names, bad arguments, handler errors and panics
    /// all come back as `success: false` results.
    pub async fn invoke(&self, request: ToolRequest) -> ToolResult {
        let _turn = self.gate.lock().await;
        let ToolRequest { name, arguments } = request;

        let Some(entry) = self.registry.entry(&name) else {
            tracing::warn!(tool = %name, "Unknown tool requested");
            return AppError::UnknownTool(name).into();
        };

        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        tracing::info!(tool = %name, "Running tool");
        let call = (entry.handler)(self.ctx.clone(), arguments);

        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(result)) => {
                tracing::info!(tool = %name, success = result.success, "Tool finished");
                result
            }
            Ok(Err(err)) => {
                tracing::warn!(tool = %name, code = err.code(), error = %err, "Tool failed");
                err.into()
            }
            Err(_) => {
                tracing::error!(tool = %name, "Tool panicked");
                AppError::Panicked(name).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::ProjectRoot;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, JsonSchema)]
    struct EchoParams {
        /// Text to echo back.
        text: String,
        #[serde(default)]
        times: Option<u32>,
    }

    async fn echo(_ctx: Context, params: EchoParams) -> Result<ToolResult, AppError> {
        let text = params.text.repeat(params.times.unwrap_or(1) as usize);
        ToolResult::success(&json!({ "text": text }))
    }

    async fn explode(_ctx: Context, _params: EchoParams) -> Result<ToolResult, AppError> {
        panic!("boom")
    }

    async fn nap(_ctx: Context, params: EchoParams) -> Result<ToolResult, AppError> {
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        ToolResult::success(&json!({ "text": params.text }))
    }

    fn dispatcher(registry: &'static ToolRegistry) -> Dispatcher {
        let ctx = Context::new(ProjectRoot::new("/nonexistent"), Config::default());
        Dispatcher::with_registry(ctx, registry)
    }

    fn leak(registry: ToolRegistry) -> &'static ToolRegistry {
        Box::leak(Box::new(registry))
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let registry = ToolRegistry::new().tool("echo", "Echo text", echo);
        let descriptor = registry.descriptor("echo").unwrap();

        assert_eq!(descriptor.required_fields(), vec!["text"]);
        assert_eq!(descriptor.input_schema["type"], "object");
        assert!(descriptor.input_schema["properties"]["times"].is_object());
    }

    #[test]
    fn test_add_preserves_order() {
        let registry = ToolRegistry::new().tool("b", "", echo) + ToolRegistry::new().tool("a", "", echo);
        let names: Vec<_> = registry.descriptors().map(|d| d.name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(registry.descriptor("a").map(|d| d.name), Some("a"));
    }

    #[tokio::test]
    async fn test_invoke_routes_by_name() {
        let d = dispatcher(leak(ToolRegistry::new().tool("echo", "Echo text", echo)));
        let result = d
            .invoke(ToolRequest::new("echo", json!({"text": "ab", "times": 2})))
            .await;

        assert!(result.success);
        assert_eq!(result.get_str("text"), Some("abab"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let d = dispatcher(leak(ToolRegistry::new()));
        let result = d.invoke(ToolRequest::new("teleport", json!({}))).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Unknown tool: teleport"));
    }

    #[tokio::test]
    async fn test_missing_argument_is_reported() {
        let d = dispatcher(leak(ToolRegistry::new().tool("echo", "Echo text", echo)));
        let result = d.invoke(ToolRequest::new("echo", Value::Null)).await;

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.starts_with("Invalid arguments for echo:"), "{}", error);
        assert!(error.contains("text"), "{}", error);
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let d = dispatcher(leak(ToolRegistry::new().tool("explode", "", explode)));
        let result = d
            .invoke(ToolRequest::new("explode", json!({"text": "x"})))
            .await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Tool explode panicked"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_invocations_run_one_at_a_time() {
        let d = dispatcher(leak(ToolRegistry::new().tool("nap", "", nap)));

        let started = std::time::Instant::now();
        let calls: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|text| {
                let d = d.clone();
                tokio::spawn(async move {
                    d.invoke(ToolRequest::new("nap", json!({ "text": text })))
                        .await
                })
            })
            .collect();
        for call in calls {
            assert!(call.await.unwrap().success);
        }

        assert!(started.elapsed() >= std::time::Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_panic_releases_the_gate() {
        let registry = ToolRegistry::new().tool("explode", "", explode)
            + ToolRegistry::new().tool("echo", "", echo);
        let d = dispatcher(leak(registry));

        d.invoke(ToolRequest::new("explode", json!({"text": "x"}))).await;
        let result = d.invoke(ToolRequest::new("echo", json!({"text": "ok"}))).await;

        assert_eq!(result.get_str("text"), Some("ok"));
    }
}
