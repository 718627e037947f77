use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mailaddr-cli", version, about = "Parse, compare and sort email addresses")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV depending on --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// parse one address and print its report
    Validate { email: String },
    /// three-way comparison of two addresses, with every derived predicate
    Compare { a: String, b: String },
    /// read addresses from stdin and print them in index order
    Sort {
        /// drop addresses equal to their predecessor
        #[arg(long)]
        dedup: bool,
        /// order by domain first and print a header per domain
        #[arg(long = "group-by-domain")]
        group_by_domain: bool,
    },
    /// print the 64-bit and folded 32-bit hash of an address
    Hash { email: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::clap_command().debug_assert();
    }

    #[test]
    fn parses_sort_flags() {
        let cli = <Cli as Parser>::try_parse_from([
            "mailaddr-cli",
            "sort",
            "--dedup",
            "--group-by-domain",
        ])
        .expect("valid args");
        assert!(matches!(
            cli.cmd,
            Some(Commands::Sort {
                dedup: true,
                group_by_domain: true
            })
        ));
    }

    #[test]
    fn global_format_defaults_to_human() {
        let cli = <Cli as Parser>::try_parse_from(["mailaddr-cli", "--stdin"]).expect("valid");
        assert!(cli.stdin);
        assert_eq!(cli.format, "human");
        assert!(cli.cmd.is_none());
    }
}
