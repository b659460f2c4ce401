use clap::Parser;

/// Arguments for the delete command (also exposed as `uninstall`)
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Uninstall one application:\n    composer delete moon-baboon\n\n\
                   Force teardown with zero grace period:\n    composer delete moon-baboon --force\n\n\
                   Uninstall everything without prompting:\n    composer delete --all --yes")]
pub struct DeleteArgs {
    /// Ids of the applications to uninstall
    pub ids: Vec<String>,

    /// Use a zero grace period when taking services down
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Delete all of the installed applications
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Skip the confirmation prompt when deleting all applications
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_delete() {
        let cli =
            super::super::Cli::try_parse_from(["composer", "delete", "moon-baboon"]).unwrap();
        match cli.command {
            super::super::Commands::Delete(args) => {
                assert_eq!(args.ids, vec!["moon-baboon".to_string()]);
                assert!(!args.force);
                assert!(!args.all);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parsing_delete_multiple_with_force() {
        let cli = super::super::Cli::try_parse_from([
            "composer",
            "delete",
            "first-app",
            "second-app",
            "--force",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Delete(args) => {
                assert_eq!(args.ids.len(), 2);
                assert!(args.force);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parsing_delete_all_yes() {
        let cli =
            super::super::Cli::try_parse_from(["composer", "delete", "-a", "-y"]).unwrap();
        match cli.command {
            super::super::Commands::Delete(args) => {
                assert!(args.all);
                assert!(args.yes);
                assert!(args.ids.is_empty());
            }
            _ => panic!("Expected Delete command"),
        }
    }
}
