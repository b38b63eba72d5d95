mod cli;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use ptcgen_core::config::AppConfig;
use ptcgen_core::RegistrationError;
use ptcgen_registration::{create_account, CreateRequest, PtcSignUp};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
        warn!(path = %cli.config, "config file not found, using defaults");
        include_str!("../config/default.toml").to_string()
    });
    let config: AppConfig = toml::from_str(&config_str)?;

    let request = CreateRequest {
        username: cli.username,
        password: cli.password,
        email: cli.email,
        tag_email: cli.email_tag,
    };

    let flow = PtcSignUp::new(config.http, config.endpoints);
    let mut rng = StdRng::from_entropy();

    // Every path prints and exits 0; the message carries the failure kind.
    match create_account(&flow, &config.retry, &mut rng, request).await {
        Ok(account) => {
            println!("Created new account:");
            println!("  Username:  {}", account.username);
            println!("  Password:  {}", account.password);
            println!("  Email   :  {}", account.email);
        }
        Err(RegistrationError::InvalidPassword(msg)) => {
            println!("Invalid password: {msg}");
        }
        Err(err @ (RegistrationError::InvalidName(_) | RegistrationError::InvalidEmail(_))) => {
            println!("Failed to create account! {err}");
        }
        Err(err) => {
            println!("Failed to create account! General error: {err}");
        }
    }

    Ok(())
}
