//! Install command CLI wrapper

use crate::cli::InstallArgs;
use crate::engine::ComposeEngine;
use crate::error::Result;
use crate::names::RandomIdGenerator;
use crate::operations::install::{self, InstallOptions};

/// Run install command
pub fn run(verbose: bool, args: InstallArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    let engine = ComposeEngine::from_env();
    let options = InstallOptions {
        root: super::current_dir()?,
        template: args.template,
        values: args.values,
        set: args.set,
        application_id: args.id,
    };

    let application_id = install::run(&ctx, &engine, &RandomIdGenerator, &options)?;

    println!("Successfully installed {application_id}");
    println!("To view installed applications use `composer list`");
    Ok(())
}
