//! PlatformIO project configuration CLI
//!
//! Read-only inspection of a merged, interpolated `platformio.ini`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use pio_core::Selector;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, SelectorArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.project_conf, cmd),
        None => {
            println!(
                "{} PlatformIO project configuration",
                "pio-config".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "pio-config --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(project_conf: &str, cmd: Commands) -> Result<()> {
    let config = commands::load_project(project_conf)?;

    match cmd {
        Commands::Sections => commands::run_sections(&config),
        Commands::Envs => commands::run_envs(&config),
        Commands::DefaultEnvs => commands::run_default_envs(&config),
        Commands::Get {
            section,
            option,
            default,
        } => commands::run_get(&config, &section, &option, default.as_deref()),
        Commands::Items { selector, json } => {
            commands::run_items(&config, selector_of(&selector)?, json)
        }
        Commands::Options { selector } => commands::run_options(&config, selector_of(&selector)?),
        Commands::Dump { json } => commands::run_dump(&config, json),
        Commands::Validate { envs } => commands::run_validate(&config, &envs),
    }
}

fn selector_of(args: &SelectorArgs) -> Result<Selector<'_>> {
    Ok(Selector::from_args(
        args.section.as_deref(),
        args.env.as_deref(),
    )?)
}
