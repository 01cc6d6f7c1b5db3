use anyhow::{Context, Result, bail};
use std::io::Read;
use std::time::Duration;
use tracing::info;

use crate::app::status::render_status;
use crate::cli::commands::{Cli, Commands};
use incinerator::Config;
use incinerator::acquirer::ResponseAcquirer;
use incinerator::ritual::Incinerator;
use incinerator::ui::{self, style};

/// Apply `--model` / `--fallback-model` on top of file and env settings.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(model) = cli
        .model
        .as_deref()
        .map(str::trim)
        .filter(|model| !model.is_empty())
    {
        config.acquisition.primary_model = model.to_string();
    }
    if let Some(fallback) = cli.fallback_model.as_deref().map(str::trim) {
        config.acquisition.fallback_model = if fallback.is_empty() {
            None
        } else {
            Some(fallback.to_string())
        };
    }
}

fn build_incinerator(config: &Config) -> Incinerator<ResponseAcquirer> {
    let acquirer = ResponseAcquirer::from_config(config);
    if !acquirer.has_credential() {
        tracing::warn!("No API key found; replies will explain the missing key");
    }
    Incinerator::new(
        acquirer,
        Duration::from_millis(config.ritual.min_burn_ms),
        &config.effective_locale(),
    )
}

async fn run_ritual(config: &Config) -> Result<()> {
    let locale = config.effective_locale();
    let mut incinerator = build_incinerator(config);
    info!(
        model = config.acquisition.primary_model.as_str(),
        min_burn_ms = config.ritual.min_burn_ms,
        "Starting ritual"
    );
    ui::run_interactive(&mut incinerator, &locale).await
}

async fn burn_once(config: &Config, text: Option<String>) -> Result<()> {
    let locale = config.effective_locale();
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read thought from stdin")?;
            buffer
        }
    };
    if text.trim().is_empty() {
        bail!("{}", t!("burn.empty", locale = locale.as_str()));
    }

    let mut incinerator = build_incinerator(config);
    let response = incinerator.submit(text).await?;
    println!("{}", ui::render_ashes(&response));
    Ok(())
}

fn init_config(config: &Config, force: bool) -> Result<()> {
    let locale = config.effective_locale();
    let locale = locale.as_str();
    let path = config.config_path.display().to_string();

    if config.config_path.exists() && !force {
        println!(
            "  {}",
            style::yellow(t!("init.exists", locale = locale, path = path))
        );
        return Ok(());
    }

    // Env overrides (including the key) stay out of the written file.
    let fresh = Config {
        config_path: config.config_path.clone(),
        ..Config::default()
    };
    fresh.save()?;
    println!(
        "  {}",
        style::value(t!("init.created", locale = locale, path = path))
    );
    Ok(())
}

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    match cli.command.unwrap_or(Commands::Ritual) {
        Commands::Ritual => run_ritual(&config).await,
        Commands::Burn { text } => burn_once(&config, text).await,
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }
        Commands::Init { force } => init_config(&config, force),
    }
}
