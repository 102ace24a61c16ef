//! MCP tool plumbing.
//!
//! Tool definitions come from the `planner-sdk` catalog; this module only adapts
//! them and dispatch results to rmcp model types.

pub mod helpers;

pub use helpers::*;
