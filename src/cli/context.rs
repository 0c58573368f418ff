//! Command execution context
//!
//! Loads configuration once, merges the command-line overrides, and builds
//! the catalog client used by the movie commands.

use log::warn;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::MovieClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and output format.
pub struct CommandContext {
    /// Merged configuration (file + overrides)
    pub config: Config,
    /// Catalog client; owns the token cache for this process
    pub client: MovieClient,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error as long as the overrides supply
    /// the base URL and credentials.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed or is incomplete.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default(opts.config_ref())?;
        config.apply_overrides(&opts.overrides());
        config.validate()?;

        let client = MovieClient::new(config.base_url()?, config.credentials()?)?;
        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            client,
            format,
        })
    }
}

/// Flag/env format, then the config preference, then the default
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match config.preferences.format.as_deref() {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            warn!("Ignoring unknown output format '{}' in config", name);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}
