//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::{Settings, API_KEY_ENV};
use crate::pipeline::{PipelineController, Session};
use crate::search::{build_backend, format_results, SearchProvider};
use crate::slide::{SlideOutline, SlideRenderer};
use crate::SlideError;

/// Start the web UI
pub async fn serve(settings: &Settings, bind: Option<String>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(bind) = bind {
        settings.server.bind = bind;
    }

    let controller = build_controller(&settings)?;
    crate::server::serve(&settings, controller).await
}

/// Run the full pipeline once and write the slide to disk
pub async fn generate_slide(
    settings: &Settings,
    topic: &str,
    output: Option<PathBuf>,
    show_search: bool,
) -> Result<()> {
    let controller = build_controller(settings)?;
    let mut session = Session::new();

    let slide = controller.run(&mut session, topic).await?;

    if show_search {
        println!("{}", slide.search_text);
    }

    let path = output.unwrap_or_else(|| PathBuf::from(slide.local_filename()));
    std::fs::write(&path, &slide.html)
        .with_context(|| format!("Failed to write slide: {}", path.display()))?;
    println!("Slide saved to: {}", path.display());

    Ok(())
}

/// Print formatted search results for a query
pub async fn search(settings: &Settings, query: &str, max_results: Option<usize>) -> Result<()> {
    if query.trim().is_empty() {
        return Err(SlideError::EmptyTopic.into());
    }

    let locale = settings.slide.locale;
    let provider = SearchProvider::new(build_backend(settings)?, locale);
    let max_results = max_results.unwrap_or_else(|| settings.effective_max_results());

    let items = provider.search(query, max_results).await;
    print!("{}", format_results(query, &items, locale));

    Ok(())
}

/// Render an outline file to HTML
pub fn render_outline(settings: &Settings, outline: &Path, output: Option<PathBuf>) -> Result<()> {
    let json = std::fs::read_to_string(outline)
        .with_context(|| format!("Failed to read outline file: {}", outline.display()))?;
    let outline = SlideOutline::from_json(&json)?;
    let html = SlideRenderer::from_settings(settings).render(&outline);

    if let Some(path) = output {
        std::fs::write(&path, html)?;
        println!("Rendered to: {}", path.display());
    } else {
        print!("{}", html);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, command_name, &mut io::stdout());
}

/// Build the pipeline, explaining how to supply the API key when it is missing.
fn build_controller(settings: &Settings) -> Result<PipelineController> {
    match PipelineController::from_settings(settings) {
        Ok(controller) => Ok(controller),
        Err(e @ SlideError::Config(_)) if settings.llm.api_key.trim().is_empty() => {
            eprintln!("{}", api_key_help());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn api_key_help() -> String {
    let config_path = Settings::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "config.toml".to_string());

    [
        "An OpenAI API key is required to generate slides.".to_string(),
        String::new(),
        "Set it in one of these places:".to_string(),
        format!("  environment:  export {API_KEY_ENV}=your_key_here"),
        format!("  .env file:    {API_KEY_ENV}=your_key_here  (in the working directory)"),
        format!("  config file:  [llm] api_key = \"your_key_here\"  ({config_path})"),
    ]
    .join("\n")
}
