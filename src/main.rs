//! Command line tool for BesperBot session tokens
//!
//! Exchanges a bot identifier for a session token and prints it on stdout.
//!
//! # Usage
//! ```bash
//! besper-token --bot-id my-bot
//! besper-token --bot-id my-bot --environment dev --json
//! besper-token --bot-id my-bot --base-url https://sessions.example.com --verbose
//! ```

use clap::Parser;

use besper_bot::cli::{TokenArgs, run_token_mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "besper-token")]
struct Cli {
    /// Bot identifier to open a session for
    #[arg(short, long, value_name = "BOT_ID", allow_hyphen_values = true)]
    bot_id: String,

    /// Environment path segment (e.g. dev, staging)
    #[arg(short, long, value_name = "ENVIRONMENT")]
    environment: Option<String>,

    /// Base URL of the session API
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Proxy server URL (http://host:port, socks5://host:port, etc.)
    #[arg(short, long, value_name = "PROXY")]
    proxy: Option<String>,

    /// Print the token as a JSON object
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = TokenArgs {
        bot_id: cli.bot_id,
        environment: cli.environment,
        base_url: cli.base_url,
        config: cli.config,
        proxy: cli.proxy,
        json: cli.json,
        verbose: cli.verbose,
    };

    run_token_mode(args).await
}
