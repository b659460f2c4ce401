//! Template dry-run command CLI wrapper

use crate::cli::TemplateArgs;
use crate::error::Result;
use crate::operations::template::{self, TemplateOptions};

/// Run template command
pub fn run(_verbose: bool, args: TemplateArgs) -> Result<()> {
    let options = TemplateOptions {
        root: super::current_dir()?,
        template: args.template,
        values: args.values,
        set: args.set,
    };
    template::run(&options)
}
