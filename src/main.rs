//! webslide - Web search to presentation slide
//!
//! Entry point for the webslide CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use webslide::cli::{commands, Cli, Commands};
use webslide::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the environment or config.
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        commands::print_completions(shell);
        return Ok(());
    }

    // Load configuration only for runtime commands.
    let settings = Settings::load()?;

    // Initialize logging
    let default_level = if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Serve { bind } => {
            commands::serve(&settings, bind).await?;
        }
        Commands::Generate {
            topic,
            output,
            show_search,
        } => {
            commands::generate_slide(&settings, &topic, output, show_search).await?;
        }
        Commands::Search { query, max_results } => {
            commands::search(&settings, &query, max_results).await?;
        }
        Commands::Render { outline, output } => {
            commands::render_outline(&settings, &outline, output)?;
        }
        Commands::Config(config_cmd) => {
            commands::config_command(&settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
