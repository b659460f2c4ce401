//! List command CLI wrapper

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::list;

/// Run list command
pub fn run(verbose: bool, args: ListArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    list::run(&ctx, args.quiet)
}
