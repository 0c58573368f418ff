//! MovieOp CLI - companion for an OAuth2-protected movie catalog

use std::error::Error as _;

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let debug = cli.debug;
    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if debug {
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  Caused by: {}", inner);
                cause = inner.source();
            }
        }
        std::process::exit(1);
    }
}

/// Route `log` output to stderr; `--debug` enables this crate's debug logs
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("movieop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Search { title, year } => cli::movie::search(&opts, title, year).await,
        Commands::Add { title, year } => cli::movie::add(&opts, title, year).await,
    }
}
