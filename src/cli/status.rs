//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "MovieOp Configuration Status".bold());

    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
        Config::load_from(path)?
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
        Config::default()
    };
    config.apply_overrides(&opts.overrides());

    println!();
    for line in status_lines(&config) {
        println!("{}", line);
    }

    if config.validate().is_err() {
        println!("\n  → Run 'movieop init' to configure");
    }

    Ok(())
}

/// One line per configuration item, marked as set or missing
fn status_lines(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    match config.base_url() {
        Ok(url) => lines.push(format!("{} API base URL: {}", "✓".green(), url)),
        Err(e) => lines.push(format!("{} {}", "✗".red(), e)),
    }

    match config.client_id.as_deref() {
        Some(id) if !id.trim().is_empty() => {
            lines.push(format!("{} Client ID: {}", "✓".green(), id))
        }
        _ => lines.push(format!("{} Client ID not configured", "✗".red())),
    }

    if config.client_secret.as_deref().is_some_and(|s| !s.is_empty()) {
        lines.push(format!("{} Client secret configured", "✓".green()));
    } else {
        lines.push(format!("{} Client secret not configured", "✗".red()));
    }

    lines
}
