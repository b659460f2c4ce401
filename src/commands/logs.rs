//! Logs command CLI wrapper

use crate::cli::LogsArgs;
use crate::engine::ComposeEngine;
use crate::error::Result;
use crate::operations::logs::{self, LogsOptions};

/// Run logs command
pub fn run(verbose: bool, args: LogsArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    let engine = ComposeEngine::from_env();
    let options = LogsOptions {
        ids: args.ids,
        follow: args.follow,
        service: args.service,
        application: args.application,
    };
    logs::run(&ctx, &engine, &options)
}
