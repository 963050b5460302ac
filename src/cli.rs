//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cartel-onboard",
    version,
    about = "Create a Coin Cartel publisher account and verify website ownership"
)]
pub struct Cli {
    /// Config file (default: <config dir>/coin-cartel/onboard.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a fresh verification token
    Token,

    /// Print the meta tag and DNS TXT record for a token
    Snippets {
        #[arg(long)]
        token: String,

        /// Also write the DNS TXT record file into this directory
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Check a record file against the basic-info rules
    Validate {
        #[arg(long, value_name = "FILE")]
        record: PathBuf,
    },

    /// Check website ownership (meta tag, then DNS TXT)
    Verify {
        #[arg(long)]
        website: String,

        #[arg(long)]
        token: String,
    },

    /// Run the whole wizard from a record file: validate, submit, verify
    ///
    /// Put the token printed by `token` into the record as
    /// `verificationToken` and publish its meta tag or DNS record first.
    Submit {
        #[arg(long, value_name = "FILE")]
        record: PathBuf,

        /// Submit without verifying the website now
        #[arg(long)]
        skip_verification: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_submit_with_global_flags() {
        let cli = Cli::try_parse_from([
            "cartel-onboard",
            "submit",
            "--record",
            "publisher.toml",
            "--skip-verification",
            "-vv",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        let Command::Submit {
            record,
            skip_verification,
        } = cli.command
        else {
            panic!("expected submit");
        };
        assert_eq!(record, PathBuf::from("publisher.toml"));
        assert!(skip_verification);
    }

    #[test]
    fn verify_requires_website_and_token() {
        assert!(Cli::try_parse_from(["cartel-onboard", "verify", "--token", "AB12CD34EF56"]).is_err());
    }
}
