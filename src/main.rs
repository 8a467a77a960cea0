//! Server Warden - a terminal dashboard for remote game servers
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use server_warden::core::prelude::*;
use server_warden::{load_settings, run, Settings};

/// Server Warden - a terminal dashboard for remote game servers
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(about = "A terminal dashboard for remote game servers", long_about = None)]
struct Args {
    /// Base URL of the control service (overrides config)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// WebSocket URL of the live log stream (overrides config)
    #[arg(long, value_name = "URL")]
    log_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    server_warden::core::logging::init()?;

    let cwd = std::env::current_dir()?;
    let mut settings: Settings = load_settings(&cwd);
    if let Some(url) = args.url {
        settings.server.base_url = url;
    }
    if let Some(url) = args.log_url {
        settings.server.log_stream_url = Some(url);
    }

    info!(base_url = %settings.server.base_url, "server warden starting");
    run(settings).await
}
