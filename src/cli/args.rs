//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// webslide - Turn a topic into a presentation slide from live web search
#[derive(Parser, Debug)]
#[command(name = "webslide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Generate a slide for a topic and save it as HTML
    Generate {
        /// Topic to research
        topic: String,

        /// Output file path (defaults to <topic>_slide.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the search text that was fed to the model
        #[arg(long)]
        show_search: bool,
    },

    /// Run only the web search and print the formatted results
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (overrides search.max_results)
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
    },

    /// Render an outline JSON file to HTML without calling any API
    Render {
        /// Path to the outline JSON file
        outline: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
