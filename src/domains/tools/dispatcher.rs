//! Tool Dispatcher - routes invocations to tools.
//!
//! `handle()` is total: every invocation, whatever happens while running it,
//! ends in exactly one [`ToolOutcome`]. Unknown tools, invalid arguments,
//! failing handlers and panicking handlers are all reported as text.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

use super::{Invocation, ToolError, ToolOutcome, ToolRegistry};

/// Dispatches invocations against a read-only [`ToolRegistry`].
///
/// Holds no lock and no per-call state, so concurrent calls on the same
/// dispatcher run independently and may complete in any order.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run one invocation to completion.
    #[instrument(skip_all, fields(tool = %invocation.tool_name))]
    pub async fn handle(&self, invocation: Invocation) -> ToolOutcome {
        let Some(tool) = self.registry.lookup(&invocation.tool_name) else {
            warn!("Unknown tool requested: {}", invocation.tool_name);
            return ToolOutcome::text(ToolError::not_found(&invocation.tool_name).to_string());
        };

        let call = match tool.prepare(invocation.arguments) {
            Ok(call) => call,
            Err(e) => {
                warn!("Argument validation failed: {}", e.reason);
                return ToolOutcome::text(e.to_string());
            }
        };

        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(outcome)) => {
                debug!("Tool {} completed", tool.name());
                outcome
            }
            Ok(Err(e)) => {
                warn!("Tool {} failed: {}", tool.name(), e);
                tool.failure(&e)
            }
            Err(panic) => {
                let e = ToolError::panicked(panic_message(panic.as_ref()));
                error!("Tool {} panicked: {}", tool.name(), e);
                tool.failure(&e)
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
