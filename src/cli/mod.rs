//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Delete/uninstall command arguments
//! - list: List command arguments
//! - logs: Logs command arguments
//! - cmd: Pass-through command arguments
//! - subapps: Sub-application listing arguments
//! - template: Template dry-run arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod cmd;
pub mod completions;
pub mod install;
pub mod list;
pub mod logs;
pub mod subapps;
pub mod template;
pub mod uninstall;

pub use cmd::CmdArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use logs::LogsArgs;
pub use subapps::SubappsArgs;
pub use template::TemplateArgs;
pub use uninstall::DeleteArgs;

/// Composer - templated docker-compose application manager
///
/// Install, inspect and remove multi-part compose applications as one unit.
#[derive(Parser, Debug)]
#[command(
    name = "composer",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install and manage multi-part docker-compose applications from templates",
    long_about = "Composer renders docker-compose applications from Jinja-style templates and \
                  merged value files, installs every discovered sub-application as one unit, \
                  and manages the whole application lifecycle by a single id.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  composer install                      \x1b[90m# Install the application in this directory\x1b[0m\n   \
                  composer install -f prod.yaml -s n=3 \x1b[90m# Extra values file plus an override\x1b[0m\n   \
                  composer list                         \x1b[90m# List installed applications\x1b[0m\n   \
                  composer logs moon-baboon --follow    \x1b[90m# Stream an application's logs\x1b[0m\n   \
                  composer delete moon-baboon --force   \x1b[90m# Tear it down with zero grace period\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a compose application from templates in this directory
    Install(InstallArgs),

    /// Uninstall applications by id, removing them completely
    #[command(alias = "uninstall")]
    Delete(DeleteArgs),

    /// List installed applications
    List(ListArgs),

    /// Get the logs of an application
    Logs(LogsArgs),

    /// Forward any other engine command to an application
    Cmd(CmdArgs),

    /// List the sub-applications under a single application
    Subapps(SubappsArgs),

    /// Print the rendered compose output without installing anything
    Template(TemplateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
