//! Request routing: `(name, arguments)` → typed operation → CLI run → JSON.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::catalog::{list_operations, OperationDescriptor};
use crate::error::BridgeResult;
use crate::interpreter::interpret;
use crate::invoker::ProcessInvoker;
use crate::operations::PlannerOperation;
use crate::JsonObject;

/// Routes tool calls to the planner CLI through a [`ProcessInvoker`].
///
/// Cheap to clone; concurrent calls share nothing but the read-only invoker.
#[derive(Debug, Clone)]
pub struct OperationDispatcher {
    invoker: Arc<dyn ProcessInvoker>,
}

impl OperationDispatcher {
    pub fn new(invoker: Arc<dyn ProcessInvoker>) -> Self {
        Self { invoker }
    }

    /// The published catalog, in listing order.
    pub fn list_operations(&self) -> &'static [OperationDescriptor] {
        list_operations()
    }

    /// Decode and run one tool call.
    ///
    /// Unknown names and undecodable arguments fail before any process is spawned.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> BridgeResult<Value> {
        let operation = PlannerOperation::parse(name, arguments)?;
        self.execute(&operation).await
    }

    /// Run an already-decoded operation.
    pub async fn execute(&self, operation: &PlannerOperation) -> BridgeResult<Value> {
        let args = operation.to_cli_args();
        debug!(operation = operation.name(), ?args, "Invoking planner CLI");
        let output = self.invoker.invoke(&args).await?;
        interpret(&output)
    }
}
