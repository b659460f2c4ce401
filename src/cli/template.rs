use std::path::PathBuf;

use clap::Parser;

/// Arguments for the template dry-run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Print the rendered compose output:\n    composer template\n\n\
                   Render with overrides applied:\n    composer template -s replicas=3")]
pub struct TemplateArgs {
    /// The name of the template file to render
    #[arg(long, short = 't', default_value = "template.yaml")]
    pub template: String,

    /// Values YAML files to generate templates from, merged left to right
    #[arg(long = "values", short = 'f', value_name = "FILE", default_value = "values.yaml")]
    pub values: Vec<PathBuf>,

    /// Literal key=value overrides, applied after the value files
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}
