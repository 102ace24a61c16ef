//! Shared SDK for the Planner MCP bridge: operation catalog, argument marshalling,
//! process invocation, and output interpretation.
//!
//! The Planner domain logic lives in an external command-line program (the planner
//! CLI). This crate knows how to turn a named operation plus JSON arguments into a
//! command line for that program, run it, and normalize what it prints.
//!
//! # Modules
//!
//! - [`catalog`]: Ordered operation descriptors (name, description, input schema)
//! - [`config`]: Script/interpreter resolution and invocation timeout
//! - [`dispatcher`]: Routes `(name, arguments)` to a typed operation and runs it
//! - [`error`]: [`BridgeError`] taxonomy and structured error payloads
//! - [`interpreter`]: Exit status + captured output → JSON value or structured error
//! - [`invoker`]: Spawns the planner CLI and buffers its output
//! - [`operations`]: Typed request per operation and its command-line mapping

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interpreter;
pub mod invoker;
pub mod operations;

pub use catalog::{list_operations, OperationDescriptor};
pub use config::{BridgeConfig, ResolvedCommand};
pub use dispatcher::OperationDispatcher;
pub use error::{BridgeError, BridgeResult};
pub use interpreter::interpret;
pub use invoker::{CliInvoker, ProcessInvoker, ProcessOutput};
pub use operations::PlannerOperation;

/// JSON object type used for tool arguments and input schemas.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
