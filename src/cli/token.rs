//! Token mode CLI logic
//!
//! Loads configuration, performs one session token exchange and prints the
//! token on stdout.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    SessionTokenClient, Settings,
    config::ConfigLoader,
    error::{format_error, format_error_for_logging},
    utils::version,
};

/// Arguments for token mode
#[derive(Debug, Default)]
pub struct TokenArgs {
    pub bot_id: String,
    pub environment: Option<String>,
    pub base_url: Option<String>,
    pub config: Option<String>,
    pub proxy: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// Run token mode with the given arguments
pub async fn run_token_mode(args: TokenArgs) -> Result<()> {
    // Configuration precedence:
    // 1. Command line arguments (highest priority)
    // 2. Environment variables
    // 3. Configuration file (from --config, BESPER_CONFIG or default location)
    // 4. Default values (lowest priority)
    let settings = load_settings(&args)?;

    init_logging(settings.logging.verbose, &settings.logging.level);

    debug!(
        "besper-token v{} using base URL {}",
        version::get_version(),
        settings.api.base_url
    );

    let client = SessionTokenClient::from_settings(&settings)?;
    let environment = args
        .environment
        .as_deref()
        .or(settings.api.environment.as_deref());

    match client.get_session_token(&args.bot_id, environment).await {
        Ok(token) => {
            println!("{}", render_token(&token, args.json)?);
            info!("Retrieved session token for bot {}", args.bot_id);
        }
        Err(e) => {
            debug!("{}", format_error_for_logging(&e));
            eprintln!(
                "Failed while retrieving session token. Error: {}",
                format_error(&e)
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Load settings and apply command line overrides
fn load_settings(args: &TokenArgs) -> Result<Settings> {
    let config_path = match &args.config {
        Some(config) => Some(std::path::PathBuf::from(config)),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = ConfigLoader::new().load(config_path.as_deref())?;

    if let Some(base_url) = &args.base_url {
        settings.api.base_url = base_url.clone();
    }
    if let Some(environment) = &args.environment {
        settings.api.environment = Some(environment.clone());
    }
    if let Some(proxy) = &args.proxy {
        settings.network.https_proxy = Some(proxy.clone());
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    settings.validate()?;
    Ok(settings)
}

/// Initialize logging on stderr
fn init_logging(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(log_filter(verbose, level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Pick the log filter
///
/// Verbose mode (`--verbose`, `VERBOSE` or `logging.verbose`) wins, then
/// `RUST_LOG`, then the configured level.
fn log_filter(verbose: bool, level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    }
}

/// Render the token for stdout
fn render_token(token: &str, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&serde_json::json!({ "token": token }))?)
    } else {
        Ok(token.to_string())
    }
}
