use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print the application ids only
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
