//! Exhibit MCP Server — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use exhibit_mcp::config::resolve_addr;
use exhibit_mcp::protocol::ProtocolHandler;
use exhibit_mcp::tools::ToolRegistry;
use exhibit_mcp::transport::HttpTransport;
use exhibit_mcp::types::LogLevel;

#[derive(Parser)]
#[command(
    name = "exhibit-mcp",
    about = "Stateless MCP demonstration server — one JSON-RPC envelope per HTTP POST",
    version
)]
struct Cli {
    /// Listen address (host:port). Also reads from EXHIBIT_ADDR env var.
    #[arg(short, long)]
    addr: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server over HTTP (default).
    Serve {
        /// Listen address (host:port).
        #[arg(short, long)]
        addr: Option<String>,

        /// Log level (trace, debug, info, warn, error).
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   exhibit-mcp completions bash > ~/.local/share/bash-completion/completions/exhibit-mcp
    ///   exhibit-mcp completions zsh > ~/.zfunc/_exhibit-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        addr: None,
        log_level: None,
    }) {
        Commands::Serve { addr, log_level: _ } => {
            let effective_addr = addr.or(cli.addr);
            let addr = resolve_addr(effective_addr.as_deref());
            tracing::info!("Exhibit MCP server");
            let handler = ProtocolHandler::new(LogLevel::default());
            let transport = HttpTransport::new(handler);
            transport.run(&addr).await?;
        }

        Commands::Info => {
            let capabilities = exhibit_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "exhibit-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
