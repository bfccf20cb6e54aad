//! CLI argument definitions using clap
//!
//! The program is interactive; flags only tune logging and where data lives.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Explore US bikeshare data: filter trips by month and weekday and report travel statistics
#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Directory holding the city CSV files
    #[arg(long, env = "BIKESHARE_DATA_DIR", value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_flags_when_parsing_then_interactive_defaults() {
        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();

        assert_eq!(cli.debug, 0);
        assert!(cli.completions.is_none());
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["bikeshare", "-dd", "--data-dir", "/tmp/trips"]).unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/trips")));
    }
}
