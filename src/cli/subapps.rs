use clap::Parser;

/// Arguments for the subapps command
#[derive(Parser, Debug)]
pub struct SubappsArgs {
    /// Ids of the applications to list sub-applications for
    pub ids: Vec<String>,
}
