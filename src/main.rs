//! Concierge - Command-line entry point.

mod cli;
mod register;

use std::path::Path;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use concierge_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use concierge_core::ToolRegistry;
use concierge_protocols::tool::{ToolContext, ToolDefinition};

use crate::cli::{Cli, Commands, ToolsFormat};

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` takes precedence over `logging.level`.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid logging.level")?;

    let file_layer = if logging.file {
        std::fs::create_dir_all(&logging.dir)
            .with_context(|| format!("Failed to create log dir {}", logging.dir.display()))?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("concierge")
            .filename_suffix("log")
            .max_log_files(logging.max_files.max(1))
            .build(&logging.dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Flushes buffered lines on exit.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Tools { format } => list_tools(&config, format).await,
        Commands::Exec {
            tool,
            params,
            approve,
        } => exec_tool(&config, &tool, &params, approve).await,
        Commands::Config { validate } => show_config(&config, &cli.config, validate),
    }
}

async fn registry_for(config: &Config) -> anyhow::Result<std::sync::Arc<ToolRegistry>> {
    let (registry, report) = register::build_registry(config).await?;
    info!(
        loaded = ?report.loaded,
        skipped = ?report.skipped,
        "Extensions loaded"
    );
    Ok(registry)
}

/// Print the tool catalogue.
async fn list_tools(config: &Config, format: ToolsFormat) -> anyhow::Result<()> {
    let registry = registry_for(config).await?;
    let tools = registry.list();

    match format {
        ToolsFormat::Json => println!("{}", serde_json::to_string_pretty(&tools)?),
        ToolsFormat::Openai => {
            let exported: Vec<_> = tools.iter().map(ToolDefinition::to_openai_function).collect();
            println!("{}", serde_json::to_string_pretty(&exported)?);
        }
        ToolsFormat::Anthropic => {
            let exported: Vec<_> = tools.iter().map(ToolDefinition::to_anthropic_tool).collect();
            println!("{}", serde_json::to_string_pretty(&exported)?);
        }
        ToolsFormat::Table => {
            println!("{:<28} {:<36} {:<8} {}", "ID", "NAME", "RISK", "CONFIRM");
            println!("{}", "-".repeat(80));
            for tool in tools {
                let risk = serde_json::to_value(&tool.risk_level)?;
                println!(
                    "{:<28} {:<36} {:<8} {}",
                    tool.id,
                    tool.name,
                    risk.as_str().unwrap_or("-"),
                    if tool.requires_confirmation { "yes" } else { "no" }
                );
            }
        }
    }

    Ok(())
}

/// Run one tool. No scheduler or prompt runner is attached.
async fn exec_tool(config: &Config, tool: &str, params: &str, approve: bool) -> anyhow::Result<()> {
    let params: serde_json::Value =
        serde_json::from_str(params).context("--params must be valid JSON")?;
    let registry = registry_for(config).await?;
    let ctx = ToolContext::new("cli");

    let result = if approve {
        registry.execute_confirmed(tool, params, ctx).await?
    } else {
        registry.execute(tool, params, ctx).await?
    };

    if result.success {
        println!("{}", result.text());
    } else {
        warn!(tool, "Tool reported an error");
        eprintln!("{}", result.text());
    }
    Ok(())
}

/// Print the effective configuration and, on request, its validation findings.
fn show_config(config: &Config, path: &Path, validate: bool) -> anyhow::Result<()> {
    println!("# {}", path.display());
    println!("{}", toml::to_string_pretty(config)?);

    if !validate {
        return Ok(());
    }

    let result = ConfigValidator::validate(config)?;
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    if !result.is_valid() {
        bail!("{} configuration error(s)", result.errors.len());
    }
    println!("Configuration is valid.");
    Ok(())
}
