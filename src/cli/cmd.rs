use clap::Parser;

/// Arguments for the pass-through command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Show images of every unit:\n    composer cmd moon-baboon images\n\n\
                   Scope to one sub-application:\n    composer cmd moon-baboon ps -a frontend")]
pub struct CmdArgs {
    /// Id of the application to run the command against
    pub id: String,

    /// Arguments forwarded verbatim to the engine
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Only the sub-application with this name (from its app.yaml)
    #[arg(long, short = 'a')]
    pub application: Option<String>,
}
