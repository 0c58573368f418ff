//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod movie;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// MovieOp CLI - search and add movies in an OAuth2-protected catalog
#[derive(Parser, Debug)]
#[command(name = "movieop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "MOVIEOP_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "MOVIEOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Catalog API base URL
    #[arg(long, global = true, env = "MOVIEOP_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// OAuth2 client ID
    #[arg(long, global = true, env = "MOVIEOP_CLIENT_ID", hide_env = true)]
    pub client_id: Option<String>,

    /// OAuth2 client secret
    #[arg(
        long,
        global = true,
        env = "MOVIEOP_CLIENT_SECRET",
        hide_env = true,
        hide_env_values = true
    )]
    pub client_secret: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MOVIEOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize MovieOp configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Search the catalog
    Search {
        /// Only movies with this title
        #[arg(long)]
        title: Option<String>,

        /// Only movies released in this year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,
    },

    /// Add a movie to the catalog
    Add {
        /// Movie title
        title: String,

        /// Release year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}
