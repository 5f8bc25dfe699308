use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use keycase_config::{parse_yaml, BuildSide, LayoutMode, ProfileRegistry, DEFAULT_PROFILE};
use keycase_layout::KeyLayout;
use keycase_outline::case_outlines;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use report::BuildReport;

/// Keyboard key placement and case outline builder.
#[derive(Parser, Debug)]
#[command(name = "keycase", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in profiles
    List,
    /// Build placements, plate and case outlines for a profile
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Built-in profile name
    #[arg(value_name = "PROFILE", default_value = DEFAULT_PROFILE)]
    profile: String,

    /// YAML file layered on top of the profile
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "keycase=debug" } else { "keycase=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = ProfileRegistry::builtin();
    match cli.command {
        Command::List => list(&registry),
        Command::Build(args) => build(&registry, &args),
    }
}

fn list(registry: &ProfileRegistry) -> Result<()> {
    println!("Available profiles:");
    for name in registry.names() {
        let config = registry
            .resolve(name, None)
            .with_context(|| format!("Failed to resolve profile \"{name}\""))?;
        let thumbs = config.thumb.cluster.keys;
        let thumb_note = if thumbs > 0 {
            format!(" + {thumbs} thumbs")
        } else {
            String::new()
        };
        // The side only matters for split builds that keep a single half.
        let side_note = match (config.layout.mode, config.layout.side) {
            (LayoutMode::Split, side) if side != BuildSide::Both => format!(" ({side})"),
            _ => String::new(),
        };
        println!(
            "  {name}: {} keys {}{thumb_note}{side_note} [{}]",
            config.total_keys(),
            config.row_pattern(),
            config.switch.kind,
        );
    }
    Ok(())
}

fn build(registry: &ProfileRegistry, args: &BuildArgs) -> Result<()> {
    let overrides = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            Some(
                parse_yaml(&text)
                    .with_context(|| format!("Failed to parse config file: {path:?}"))?,
            )
        }
        None => None,
    };

    let config = registry
        .resolve(&args.profile, overrides.as_ref())
        .with_context(|| format!("Failed to resolve profile \"{}\"", args.profile))?;
    tracing::info!(
        profile = %args.profile,
        switch = %config.switch.kind,
        style = %config.enclosure.case_style,
        "building"
    );

    let layout = KeyLayout::from_config(&config).context("Failed to lay out keys")?;
    let outlines = case_outlines(&config, &layout).context("Failed to build case outlines")?;

    println!("{} keys", layout.placements.len());
    println!(
        "{:.1}×{:.1} mm",
        layout.plate.plate_width, layout.plate.plate_height
    );

    if let Some(path) = &args.output {
        let report = BuildReport::new(&args.profile, &config, &layout, &outlines);
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {path:?}"))?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(())
}
