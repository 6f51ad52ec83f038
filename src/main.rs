use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;

use studio_account_tui::api::{UserServiceClient, DISCORD_USER_NOT_FOUND_CODE};
use studio_account_tui::auth::BearerToken;
use studio_account_tui::config::Config;
use studio_account_tui::error::{ProfileError, Result};
use studio_account_tui::i18n::{Catalog, Locale, MessageKey};
use studio_account_tui::profile::card::ProfileCard;
use studio_account_tui::profile::model::can_benefit_from_discord_role;
use studio_account_tui::tui::run_tui;

#[derive(Parser)]
#[command(name = "studio-account")]
#[command(about = "Terminal dashboard for your Studio platform account profile")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive profile dashboard
    Tui,

    /// Fetch the profile and print it
    Show {
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sync your Discord role once and exit
    Sync,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("studio_account_tui=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Tui => run_tui(config).await,
        Commands::Show { format } => show_profile(&config, &format).await,
        Commands::Sync => sync_discord(&config).await,
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn show_profile(config: &Config, format: &str) -> Result<()> {
    let client = UserServiceClient::new(&config.api.base_url, config.api.timeout_secs)?;
    let token = config
        .auth_token()
        .map_err(|e| ProfileError::Auth(e.to_string()))?;
    let auth = BearerToken::new(token);

    let (profile, subscription, achievements) = futures::try_join!(
        client.fetch_profile(&auth, &config.account.user_id),
        client.fetch_subscription(&auth, &config.account.user_id),
        client.fetch_achievements(),
    )?;

    if format == "json" {
        let payload = serde_json::json!({
            "profile": profile,
            "subscription": subscription,
            "achievements": achievements,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let catalog = Catalog::new(Locale::parse(&config.ui.locale));
    let card = ProfileCard::resolve(
        &profile,
        subscription.as_ref(),
        &achievements,
        &catalog,
        &config.platform,
    );

    println!("{}", "=== Account Profile ===".cyan().bold());
    if card.display_name_is_fallback {
        println!("Username:   {}", card.display_name.dimmed());
    } else {
        println!("Username:   {}", card.display_name.green());
    }
    println!("Avatar:     {}", card.avatar_url);
    if let Some(email) = &card.email {
        println!("Email:      {}", email);
    }

    println!("\n{}", "Discord:".yellow());
    println!("  {}", card.discord.body);
    println!("{}", "GitHub:".yellow());
    println!("  {}", card.github_text);
    println!("{}", "Bio:".yellow());
    println!("  {}", card.bio_text);

    if !card.community_links.is_empty() {
        println!("{}", "Links:".yellow());
        for link in &card.community_links {
            println!("  [{:>4}] {}", link.icon, link.url);
        }
    }

    println!("{}", "Donate:".yellow());
    println!("  {}", card.donate_text);
    println!("\nPublic profile: {}", card.public_profile_url.cyan());

    Ok(())
}

async fn sync_discord(config: &Config) -> Result<()> {
    let client = UserServiceClient::new(&config.api.base_url, config.api.timeout_secs)?;
    let token = config
        .auth_token()
        .map_err(|e| ProfileError::Auth(e.to_string()))?;
    let auth = BearerToken::new(token);

    let (profile, subscription) = futures::try_join!(
        client.fetch_profile(&auth, &config.account.user_id),
        client.fetch_subscription(&auth, &config.account.user_id),
    )?;

    let Some(username) = profile
        .discord_username
        .as_deref()
        .filter(|name| !name.is_empty())
    else {
        println!("{}", "No Discord username set on the profile".yellow());
        return Ok(());
    };

    if !can_benefit_from_discord_role(subscription.as_ref()) {
        println!(
            "{}",
            "Current subscription does not include the Discord role perk".yellow()
        );
        return Ok(());
    }

    println!("{}", format!("Syncing Discord role for {}...", username).cyan());

    match client.sync_discord_username(&auth, &profile.id).await {
        Ok(()) => {
            println!("{}", "✓ Discord role synced".green());
            Ok(())
        }
        Err(e) => {
            let catalog = Catalog::new(Locale::parse(&config.ui.locale));
            match e.status_and_code() {
                Some((400, code)) if code == DISCORD_USER_NOT_FOUND_CODE => {
                    println!(
                        "{}",
                        catalog
                            .text(MessageKey::AlertDiscordUserNotFoundTitle)
                            .red()
                            .bold()
                    );
                    println!("{}", catalog.text(MessageKey::AlertDiscordUserNotFoundMessage));
                }
                _ => {
                    println!(
                        "{}",
                        catalog.text(MessageKey::AlertSyncFailedTitle).red().bold()
                    );
                    println!("{}", catalog.text(MessageKey::AlertSyncFailedMessage));
                }
            }
            Err(e)
        }
    }
}
