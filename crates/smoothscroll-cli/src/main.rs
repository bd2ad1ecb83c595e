use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smoothscroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "smoothscroll")]
#[command(author, version, about = "Smooth-scroll engine driven against simulated layouts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/smoothscroll/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scroll an element of a scene file and print every animation frame
    Simulate {
        /// Scene file (.toml or .json)
        #[arg(short = 's', long)]
        scene: PathBuf,
        /// Id of the element to scroll to; omit to scroll the page to its origin
        #[arg(short = 't', long)]
        target: Option<String>,
        /// Use scroll-into-view instead of scroll-to
        #[arg(short = 'i', long)]
        into_view: bool,
        /// Center the target (scroll-into-view only)
        #[arg(long, conflicts_with = "no_center", requires = "into_view")]
        center: bool,
        /// Edge-align the target (scroll-into-view only)
        #[arg(long, requires = "into_view")]
        no_center: bool,
        /// Horizontal offset in pixels
        #[arg(long, allow_negative_numbers = true)]
        offset_x: Option<f64>,
        /// Vertical offset in pixels
        #[arg(long, allow_negative_numbers = true)]
        offset_y: Option<f64>,
        /// Only treat ancestors with overflowing content as scrollable
        #[arg(long)]
        fallback_to_nearest: bool,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Pace frames in real time instead of running them back to back
        #[arg(long)]
        realtime: bool,
    },
    /// Print samples of the easing curve
    Ease {
        /// Number of intervals to sample
        #[arg(short = 'n', long, default_value_t = 10)]
        steps: u32,
    },
    /// Show the effective configuration
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Simulate {
            scene,
            target,
            into_view,
            center,
            no_center,
            offset_x,
            offset_y,
            fallback_to_nearest,
            fps,
            realtime,
        } => {
            let center = match (center, no_center) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let args = commands::simulate::SimulateArgs {
                scene,
                target,
                into_view,
                center,
                offset_x,
                offset_y,
                fallback_to_nearest,
                fps,
                realtime,
            };
            commands::simulate::run(&config, args).await
        }
        Commands::Ease { steps } => commands::ease::run(&config, steps),
        Commands::Config { init } => commands::config::run(&config, cli.config.as_deref(), init),
    }
}
