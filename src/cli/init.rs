//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{ClientCredentials, MovieClient, parse_base_url};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the catalog URL and client credentials, checks them by
/// requesting a token, then saves them to the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to MovieOp!".bold().green());
    println!("Let's set up your movie catalog configuration.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let mut base_url_prompt = Input::<String>::with_theme(&theme)
        .with_prompt("Catalog API base URL")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_base_url(input).map(|_| ()).map_err(|e| e.to_string())
        });
    if let Some(url) = opts.base_url.clone().or_else(|| config.base_url.clone()) {
        base_url_prompt = base_url_prompt.default(url);
    }
    let base_url = base_url_prompt.interact_text()?;

    let mut client_id_prompt = Input::<String>::with_theme(&theme).with_prompt("Client ID");
    if let Some(id) = opts.client_id.clone().or_else(|| config.client_id.clone()) {
        client_id_prompt = client_id_prompt.default(id);
    }
    let client_id = client_id_prompt.interact_text()?;

    let client_secret: String = Password::with_theme(&theme)
        .with_prompt("Client secret")
        .interact()?;

    println!("\n{}", "Requesting an access token...".cyan());
    let client = MovieClient::new(
        &base_url,
        ClientCredentials::new(client_id.clone(), client_secret.clone()),
    )?;
    client.tokens().get_token().await?;
    println!("{}", "✓ Authentication successful!".green());

    config.base_url = Some(base_url);
    config.client_id = Some(client_id);
    config.client_secret = Some(client_secret);
    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
