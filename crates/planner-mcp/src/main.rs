//! Planner MCP Server
//!
//! Model Context Protocol server exposing Microsoft Planner operations
//! (tasks, buckets, subtasks, comments, user lookup) to LLM agents by
//! running the planner CLI once per tool call.

use std::path::PathBuf;

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use planner_mcp::server::PlannerMcpServer;
use planner_sdk::{list_operations, BridgeConfig};

#[derive(Debug, Parser)]
#[command(name = "planner-mcp")]
#[command(about = "MCP server for Microsoft Planner (stdio transport)", long_about = None)]
struct Cli {
    /// Planner CLI entry script (overrides PLANNER_CLI_PATH)
    #[arg(long)]
    cli_path: Option<PathBuf>,

    /// Interpreter used to run the script (overrides PYTHON_PATH)
    #[arg(long)]
    python_path: Option<PathBuf>,

    /// Per-call timeout in seconds, 0 to disable (overrides PLANNER_MCP_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the tool catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,
}

impl Cli {
    fn bridge_config(&self) -> BridgeConfig {
        let mut config = BridgeConfig::from_env();
        if let Some(path) = &self.cli_path {
            config.cli_path = Some(path.clone());
        }
        if let Some(path) = &self.python_path {
            config.python_path = Some(path.clone());
        }
        match self.timeout_secs {
            Some(secs) => config.with_timeout_secs(secs),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_catalog {
        println!("{}", serde_json::to_string_pretty(list_operations())?);
        return Ok(());
    }

    // stdout carries the protocol; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("planner_mcp=info".parse()?)
                .add_directive("planner_sdk=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.bridge_config();
    let command = config.resolve();
    tracing::info!(
        interpreter = %command.interpreter.display(),
        script = %command.script.display(),
        timeout_secs = config.timeout.map(|t| t.as_secs()),
        tools = list_operations().len(),
        "planner-mcp starting (stdio transport)"
    );

    let server = PlannerMcpServer::new(config);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "planner-mcp",
            "--cli-path",
            "/opt/planner/planner.py",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.cli_path, Some(PathBuf::from("/opt/planner/planner.py")));
        assert_eq!(cli.timeout_secs, Some(30));
        assert!(cli.python_path.is_none());
        assert!(!cli.print_catalog);
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "planner-mcp",
            "--cli-path",
            "/opt/planner/planner.py",
            "--python-path",
            "/usr/bin/python3.12",
            "--timeout-secs",
            "0",
        ])
        .unwrap();

        let config = cli.bridge_config();
        assert_eq!(config.cli_path, Some(PathBuf::from("/opt/planner/planner.py")));
        assert_eq!(config.python_path, Some(PathBuf::from("/usr/bin/python3.12")));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_timeout_flag_applies() {
        let cli = Cli::try_parse_from(["planner-mcp", "--timeout-secs", "45"]).unwrap();
        assert_eq!(cli.bridge_config().timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["planner-mcp", "--verbose-mode"]).is_err());
    }
}
