//! Planner MCP Server library.
//!
//! Provides the [`server::PlannerMcpServer`] MCP server handler and the helpers that
//! adapt `planner-sdk` catalog entries and results to MCP tool types.
//! Used by the `planner-mcp` binary and available for integration testing.

pub mod server;
pub mod tools;
