//! Delete/uninstall command CLI wrapper

use crate::cli::DeleteArgs;
use crate::engine::ComposeEngine;
use crate::error::Result;
use crate::operations::uninstall::{self, UninstallOptions};

/// Run delete command
pub fn run(verbose: bool, args: DeleteArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    let engine = ComposeEngine::from_env();
    let options = UninstallOptions {
        ids: args.ids,
        force: args.force,
        all: args.all,
        yes: args.yes,
    };
    uninstall::run(&ctx, &engine, &options)
}
