use clap::Parser;

/// Arguments for the logs command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   All logs of an application:\n    composer logs moon-baboon\n\n\
                   Follow one service of one sub-application:\n    \
                   composer logs moon-baboon --follow -s nginx -a frontend")]
pub struct LogsArgs {
    /// Ids of the applications to view logs for
    pub ids: Vec<String>,

    /// Follow the application logs for updates
    #[arg(long, short = 'f')]
    pub follow: bool,

    /// Get the logs of a specific service in the compose
    #[arg(long, short = 's')]
    pub service: Option<String>,

    /// Only the sub-application with this name (from its app.yaml)
    #[arg(long, short = 'a')]
    pub application: Option<String>,
}
