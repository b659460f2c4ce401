//! Subapps command CLI wrapper

use crate::cli::SubappsArgs;
use crate::error::Result;
use crate::operations::subapps;

/// Run subapps command
pub fn run(verbose: bool, args: SubappsArgs) -> Result<()> {
    let ctx = super::context(verbose)?;
    subapps::run(&ctx, &args.ids)
}
