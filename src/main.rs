use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_age_commands, RunContext};
use services::age_info::now_millis;
use services::config::{load_config, resolve_settings};
use services::manifest::{collect_dependencies, load_manifest};
use services::registry::RegistryClient;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = resolve_settings(&cli, load_config(cli.config.as_deref())?);
    let manifest = load_manifest(cli.manifest.as_deref())?;
    let dependencies = collect_dependencies(&manifest, &cli.dependencies)?;
    let client = RegistryClient::new(&settings.registry, settings.timeout_secs)?;

    let ctx = RunContext {
        settings: &settings,
        manifest: &manifest,
        dependencies: &dependencies,
        source: &client,
        now: now_millis(),
    };
    handle_age_commands(&cli, &ctx)
}
