use std::{io, io::Write, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::client::{HttpClient, SmClient};

mod client;
mod config;
mod get_binding;
mod utils;

/// What a command needs to run: where to print and whom to ask.
pub struct Context<'a> {
    pub output: &'a mut dyn Write,
    pub client: &'a dyn SmClient,
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Configuration file, defaults to /etc/smctl/config.yaml if present
    #[clap(short, long, global = true, parse(from_os_str), value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log level, overrides the configured one
    #[clap(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get service bindings by name.
    #[clap(alias = "gsb")]
    GetBinding(get_binding::Arg),
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(format!("smctl={}", level))
        .unwrap_or_else(|_| EnvFilter::new("smctl=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));
    tracing::debug!("Using service manager at {}", config.url);

    let client = HttpClient::new(&config)?;
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let mut ctx = Context {
        output: &mut output,
        client: &client,
    };

    match &cli.command {
        Commands::GetBinding(arg) => arg.handle(&mut ctx)?,
    }

    Ok(())
}
