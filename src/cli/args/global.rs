//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.movieop/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// OAuth2 client ID override
    pub client_id: Option<String>,

    /// OAuth2 client secret override
    pub client_secret: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            base_url: cli.base_url.clone(),
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Config values supplied on the command line or via environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}
