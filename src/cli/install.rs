use std::path::PathBuf;

use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install with the default template and values:\n    composer install\n\n\
                   Install with extra value files (later files win):\n    \
                   composer install -f values.yaml -f prod.yaml\n\n\
                   Override single values:\n    composer install -s replicas=3 -s debug=true\n\n\
                   Pin the application id:\n    composer install -i my-stack")]
pub struct InstallArgs {
    /// The name of the template file to install
    #[arg(long, short = 't', default_value = "template.yaml")]
    pub template: String,

    /// Values YAML files to generate templates from, merged left to right
    #[arg(long = "values", short = 'f', value_name = "FILE", default_value = "values.yaml")]
    pub values: Vec<PathBuf>,

    /// Literal key=value overrides, applied after the value files
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Set the application id (must be unique for each installation)
    #[arg(long, short = 'i')]
    pub id: Option<String>,
}
