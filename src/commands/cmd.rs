//! Pass-through command CLI wrapper

use crate::cli::CmdArgs;
use crate::engine::ComposeEngine;
use crate::error::Result;
use crate::operations::cmd::{self, CmdOptions};

/// Run cmd command
pub fn run(verbose: bool, args: CmdArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    let engine = ComposeEngine::from_env();
    let options = CmdOptions {
        id: args.id,
        argv: args.args,
        application: args.application,
    };
    cmd::run(&ctx, &engine, &options)
}
