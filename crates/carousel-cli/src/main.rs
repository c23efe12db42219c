use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::AppConfig;

mod commands;

use commands::simulate::Step;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A terminal carousel with seamless wraparound paging")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

/// Command-line overrides for the `[carousel]` section
#[derive(Args)]
struct Overrides {
    /// Number of placeholder titles to mount
    #[arg(long, global = true, default_value_t = 20)]
    items: usize,

    /// Cards visible at once
    #[arg(long, global = true)]
    show: Option<usize>,

    /// Cards moved per step
    #[arg(long, global = true)]
    scroll: Option<usize>,

    /// Stop at both ends instead of wrapping around
    #[arg(long, global = true)]
    finite: bool,

    /// Transition duration in milliseconds
    #[arg(long = "duration-ms", global = true)]
    duration_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Run navigation steps headlessly and print each transition
    Simulate {
        /// Steps: next, prev, page:<index>, dot:<n>, resize:<show>
        #[arg(required = true)]
        steps: Vec<Step>,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Print the pagination table
    Pages,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Overrides {
    fn apply(&self, config: &mut AppConfig) {
        // an explicit count applies at every width
        if let Some(show) = self.show {
            config.carousel.slides_to_show = show;
            config.breakpoints.clear();
        }
        if let Some(scroll) = self.scroll {
            config.carousel.slides_to_scroll = scroll;
        }
        if self.finite {
            config.carousel.infinite = false;
        }
        if let Some(duration_ms) = self.duration_ms {
            config.carousel.animation_duration_ms = duration_ms;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    // Writing the defaults must not depend on the current file parsing
    if let Some(Commands::Config {
        action: ConfigAction::Init { force },
    }) = &cli.command
    {
        return commands::config::init(&config_path, *force);
    }

    // Load configuration; overrides apply before validation
    let mut config = AppConfig::read_from(&config_path)?;
    cli.overrides.apply(&mut config);
    config.carousel.validate()?;

    // Initialize logging; stderr keeps stdout clean for simulate output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(path = %config_path.display(), "Loaded config");

    let config = Arc::new(config);
    let items = cli.overrides.items;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, items).await,
        Some(Commands::Simulate { steps, json }) => {
            commands::simulate::run(&config, items, &steps, json).await
        }
        Some(Commands::Pages) => commands::pages::run(&config, items),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use carousel_core::Breakpoint;

    use super::*;

    #[test]
    fn test_show_override_wins_over_breakpoints() {
        let cli = Cli::parse_from(["carousel", "pages", "--show", "3", "--finite"]);
        let mut config = AppConfig::default();
        config.carousel.slides_to_show = 0;
        config.breakpoints = vec![Breakpoint {
            min_width: 0,
            slides_to_show: 5,
        }];

        cli.overrides.apply(&mut config);
        assert!(config.carousel.validate().is_ok());
        assert!(!config.carousel.infinite);
        assert_eq!(config.slides_to_show_for_width(40), 3);
        assert_eq!(config.slides_to_show_for_width(200), 3);
    }

    #[test]
    fn test_breakpoints_kept_without_show_override() {
        let cli = Cli::parse_from(["carousel", "--scroll", "2"]);
        let mut config = AppConfig::default();
        config.breakpoints = vec![Breakpoint {
            min_width: 100,
            slides_to_show: 5,
        }];

        cli.overrides.apply(&mut config);
        assert_eq!(config.carousel.slides_to_scroll, 2);
        assert_eq!(config.slides_to_show_for_width(120), 5);
        assert_eq!(config.slides_to_show_for_width(40), 6);
    }
}
