//! Composer - templated docker-compose application manager
//!
//! Installs multi-part docker-compose applications rendered from Jinja-style
//! templates and merged value files, and manages their whole lifecycle
//! (install, delete, logs, pass-through commands) by one application id.

use clap::Parser;

mod cli;
mod commands;
mod context;
mod discovery;
mod engine;
mod error;
mod names;
mod operations;
mod storage;
mod template;
mod ui;
mod values;

use cli::{Cli, Commands};
use engine::{ComposeEngine, DeploymentEngine};
use error::{ComposerError, Result};

/// Create the durable storage root and verify it is usable
fn prepare_storage() -> Result<()> {
    let storage_root = storage::paths::storage_root()?;
    storage::initialize(&storage_root)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = prepare_storage() {
        ui::error(&e.to_string());
        std::process::exit(1);
    }

    // Check the engine binary for commands that invoke it
    // List, subapps, template, version, and completions run without it
    let needs_engine = matches!(
        cli.command,
        Commands::Install(_) | Commands::Delete(_) | Commands::Logs(_) | Commands::Cmd(_)
    );

    if needs_engine {
        let engine = ComposeEngine::from_env();
        if !engine.is_installed() {
            ui::error(&ComposerError::EngineNotInstalled {
                binary: engine.binary().to_string(),
            }
            .to_string());
            std::process::exit(1);
        }
    }

    let verbose = cli.verbose;
    let result = match cli.command {
        Commands::Install(args) => commands::install::run(verbose, args),
        Commands::Delete(args) => commands::uninstall::run(verbose, args),
        Commands::List(args) => commands::list::run(verbose, args),
        Commands::Logs(args) => commands::logs::run(verbose, args),
        Commands::Cmd(args) => commands::cmd::run(verbose, args),
        Commands::Subapps(args) => commands::subapps::run(verbose, args),
        Commands::Template(args) => commands::template::run(verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report(verbose, &e);
        std::process::exit(1);
    }
}

/// Print a fatal error, with full diagnostics only in verbose mode
fn report(verbose: bool, err: &ComposerError) {
    ui::error(&err.to_string());
    if let ComposerError::TemplateRenderFailed { detail, .. } = err {
        if verbose {
            eprintln!("{detail}");
        } else {
            ui::hint("Enable --verbose flag for more details.");
        }
    }
}
