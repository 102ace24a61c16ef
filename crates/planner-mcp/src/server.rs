//! MCP ServerHandler implementation for Microsoft Planner.
//!
//! Every tool is a thin wrapper over one planner CLI subcommand:
//!
//! **Auth & configuration**
//! - `planner_initAuth`: Start the device-code login flow
//! - `planner_setDefaults`: Set default plan and bucket
//! - `planner_listPlans` / `planner_listBuckets`: Discover plans and buckets
//!
//! **Tasks**
//! - `planner_createTask`, `planner_listTasks`, `planner_findTask`,
//!   `planner_completeTask`, `planner_moveTask`, `planner_deleteTask`,
//!   `planner_updateTask`
//!
//! **Subtasks**
//! - `planner_addSubtask`, `planner_listSubtasks`, `planner_completeSubtask`
//!
//! **Users**
//! - `planner_searchUsers`, `planner_lookupUser`
//!
//! **Buckets**
//! - `planner_createBucket`, `planner_deleteBucket`, `planner_renameBucket`,
//!   `planner_moveBucketTasks`
//!
//! **Comments**
//! - `planner_listComments`, `planner_addComment`
//!
//! `tools/list` and `tools/call` are implemented directly against the SDK
//! catalog and dispatcher rather than through `#[tool]` macros, so the list of
//! tools and their schemas live in exactly one place.

use std::future::Future;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData as McpError, Implementation,
    ListToolsResult, PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use tracing::{debug, info, warn};

use planner_sdk::{BridgeConfig, CliInvoker, JsonObject, OperationDispatcher, ProcessInvoker};

use crate::tools::{error_result, success_result, tool_from_descriptor};

const INSTRUCTIONS: &str = "Microsoft Planner tools backed by the planner CLI.\n\
     First run: planner_initAuth returns a verification URL and code; ask the user to complete \
     the device login, then call planner_listPlans.\n\
     Discovery: planner_listPlans → planner_listBuckets → planner_listTasks.\n\
     Most task tools accept a task ID or title; pass plan when referring to a task by title.\n\
     planner_setDefaults stores a default plan/bucket so planner_createTask can omit them.\n\
     planner_updateTask with labels set to an empty string clears all labels.\n\
     Errors are returned with isError set and the CLI's structured error object as text.";

/// Planner MCP server handler.
#[derive(Debug, Clone)]
pub struct PlannerMcpServer {
    dispatcher: OperationDispatcher,
}

impl PlannerMcpServer {
    /// Create a server that spawns the planner CLI described by `config`.
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_invoker(Arc::new(CliInvoker::new(config)))
    }

    /// Create a server over an arbitrary invoker (used by tests).
    pub fn with_invoker(invoker: Arc<dyn ProcessInvoker>) -> Self {
        Self {
            dispatcher: OperationDispatcher::new(invoker),
        }
    }

    /// Tool definitions in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .list_operations()
            .iter()
            .map(tool_from_descriptor)
            .collect()
    }

    /// Run one tool call and wrap the outcome in an MCP result.
    ///
    /// Every failure, including unknown tool names, is reported as a result with
    /// `isError` set rather than as a protocol error.
    pub async fn handle_call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.dispatcher.dispatch(name, arguments).await {
            Ok(value) => {
                debug!(tool = name, "Tool call succeeded");
                success_result(&value)
            }
            Err(e) => {
                if e.is_external() {
                    info!(tool = name, error = %e, "Planner CLI reported an error");
                } else {
                    warn!(tool = name, code = e.code(), error = %e, "Tool call failed");
                }
                error_result(&e)
            }
        }
    }
}

impl ServerHandler for PlannerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "planner-mcp".to_string(),
                title: Some("Microsoft Planner MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Microsoft Planner tasks, buckets, subtasks, comments, \
                     and user lookup through the planner CLI"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { Ok(self.handle_call(&request.name, request.arguments).await) }
    }
}
