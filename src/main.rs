//! Vitals CLI
//!
//! Prints the health dashboard without a browser:
//! - Render the screen as text
//! - Export cards and chart datasets as JSON
//! - Compute a weight-loss percentage
//! - Print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals::{snapshot, Config, Layout, WeightGoal};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Health tracking dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/vitals/config.toml or ./vitals.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard as text
    Render {
        /// Layout (charts, compact)
        #[arg(short, long)]
        layout: Option<Layout>,
        /// Accent color token, e.g. blue.600
        #[arg(long)]
        accent: Option<String>,
        /// Background color token, e.g. orange.50
        #[arg(long)]
        background: Option<String>,
    },

    /// Print the dashboard as JSON
    Export {
        /// Layout (charts, compact)
        #[arg(short, long)]
        layout: Option<Layout>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Compute weight-loss progress
    Goal {
        /// Current weight in kg
        #[arg(long)]
        current: f64,
        /// Goal weight in kg
        #[arg(long)]
        goal: f64,
    },

    /// Print a default config file
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config);
    tracing::debug!("Vitals v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Render {
            layout,
            accent,
            background,
        } => {
            config
                .apply_cli_overrides(layout, accent.as_deref(), background.as_deref())
                .context("colors do not fit the layout")?;
            let dashboard = config.dashboard();
            let prefs = config.initial_preferences()?;

            print!("{}", snapshot::to_text(&dashboard, &prefs));
        }

        Commands::Export { layout, pretty } => {
            config
                .apply_cli_overrides(layout, None, None)
                .context("config colors do not fit the layout")?;
            let dashboard = config.dashboard();
            let prefs = config.initial_preferences()?;

            println!("{}", snapshot::to_json(&dashboard, &prefs, pretty)?);
        }

        Commands::Goal { current, goal } => {
            let goal = WeightGoal::new(current, goal)?;
            println!(
                "Current: {} kg, Goal: {} kg, Progress: {}",
                goal.current_kg(),
                goal.goal_kg(),
                goal.percent_label()
            );
        }

        Commands::InitConfig => {
            print!("{}", vitals::generate_default_config());
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over the config level.
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("vitals={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
