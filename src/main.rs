use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use superlive::api::{ApiClient, ProfileData, ProfileResponse};
use superlive::app::App;
use superlive::cli::{Cli, Command};
use superlive::config::Config;
use superlive::logging::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let config = cli.apply_overrides(config);
    config.validate()?;

    let api = ApiClient::new(&config.api)?;
    tracing::debug!(base_url = api.base_url(), "api client ready");
    let mut app = App::new(api);

    match cli.command {
        Command::Login { email, password } => {
            let mut login = app.login_view_model();
            login.login(&email, &password).await;
            let state = login.state();
            if state.has_error() {
                bail!("{}", state.error);
            }
            let token = state.token.clone().unwrap_or_default();
            if cli.json {
                println!("{}", serde_json::json!({ "token": token }));
            } else {
                println!("{}", token);
            }
        }
        Command::Profile { token } => {
            let mut profile = app.profile_view_model(Some(token));
            profile.refresh().await;
            let state = profile.state();
            if state.has_error() {
                bail!("{}", state.error);
            }
            print_profile(state.profile.as_ref(), cli.json)?;
        }
        Command::UpdateProfile { token, name } => {
            let mut profile = app.profile_view_model(Some(token));
            profile
                .update_name(name.as_deref().unwrap_or_default())
                .await;
            let state = profile.state();
            if state.has_error() {
                bail!("{}", state.error);
            }
            print_profile(state.profile.as_ref(), cli.json)?;
        }
        Command::Session {
            email,
            password,
            name,
        } => {
            let report = app.run_session(&email, &password, name.as_deref()).await;
            for message in &report.messages {
                tracing::info!(%message, "session message");
            }
            if let Some(error) = report.error {
                bail!("{}", error);
            }
            tracing::info!(screen = %report.screen, "session finished");
            print_profile(report.profile.as_ref(), cli.json)?;
        }
    }

    Ok(())
}

fn print_profile(profile: Option<&ProfileData>, json: bool) -> anyhow::Result<()> {
    if json {
        let body = ProfileResponse {
            data: profile.cloned(),
            error: None,
        };
        println!("{}", serde_json::to_string(&body)?);
        return Ok(());
    }

    match profile {
        Some(profile) => {
            println!("Name: {}", profile.name);
            println!("Email: {}", profile.email);
            println!("Coins: {}", profile.coins);
        }
        None => println!("No profile data loaded."),
    }
    Ok(())
}
