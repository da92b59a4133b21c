//! stickynav - site configurator and scroll-spy navigation for static blogs.

mod cli;
mod config;
mod embed;
mod helper;
mod logger;
mod plugin;
mod spy;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `menu` works without a site
    if !matches!(cli.command, Commands::Menu { .. }) {
        init_config(SiteConfig::load(&cli)?);
        debug!("config"; "loaded {}", cfg().config_path.display());
    }
    let config = cfg();

    match &cli.command {
        Commands::Menu {
            target,
            current,
            json,
        } => cli::menu::run_menu(target, current, *json),
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Manifest { pretty, output } => {
            cli::manifest::run_manifest(&config, *pretty, output.as_deref())
        }
        Commands::Script { output, write } => {
            cli::script::run_script(&config, output.as_deref(), *write)
        }
        Commands::Simulate { args } => cli::simulate::run_simulate(&config.nav, args),
    }
}
