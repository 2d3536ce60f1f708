use anyhow::Result;
use clap::Parser;
use ghissues::{app, github, util};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ghissues", version, about = "TUI GitHub issue browser")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Repository to open, as <organization>/<repository>
    #[arg(short, long)]
    path: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = util::config::AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.path {
        // Reject a bad --path before the terminal takes over the screen
        if let Err(e) = github::RepoPath::parse(&path) {
            eprintln!("Invalid --path: {e}");
            std::process::exit(1);
        }
        config.github.default_path = path;
    }

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("ghissues starting");

    // Resolve auth token before starting TUI
    let token = match github::auth::resolve_token() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Authentication error: {e}");
            std::process::exit(1);
        }
    };

    let client = github::GithubClient::new(&token, &config.github.api_url)?;

    // Run the TUI event loop
    app::event_loop::run(config, client).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghissues.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghissues=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
