//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site configurator and scroll-spy navigation for static blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: stickynav.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default stickynav.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Emit the plugin manifest consumed by the site builder
    #[command(visible_alias = "m")]
    Manifest {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Compute menu link attributes for a target path
    Menu {
        /// Target path (without leading slash)
        target: String,

        /// Path of the page being rendered
        #[arg(short, long, default_value = "")]
        current: String,

        /// Output as JSON instead of HTML attributes
        #[arg(short, long)]
        json: bool,
    },

    /// Render the browser scroll-spy script
    #[command(visible_alias = "s")]
    Script {
        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "write")]
        output: Option<PathBuf>,

        /// Write into <build.output>/<assets.js_dir>/stickynav.js
        #[arg(short, long)]
        write: bool,
    },

    /// Replay scroll and click events against an in-memory page
    Simulate {
        #[command(flatten)]
        args: SimulateArgs,
    },
}

/// Simulate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Navigation bar offset from the document top, in pixels
    #[arg(long, default_value_t = 200.0)]
    pub offset: f64,

    /// Scroll positions to replay, in order (comma-separated)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub scroll: Vec<f64>,

    /// Navigation link ids to click after scrolling (comma-separated)
    #[arg(short = 'k', long, value_delimiter = ',')]
    pub click: Vec<String>,
}
