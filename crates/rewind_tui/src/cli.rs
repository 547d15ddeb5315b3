//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel in the terminal
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "rewind.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.log_file, PathBuf::from("rewind.log"));
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["rewind", "-c", "rewind.toml", "--log-file", "/tmp/r.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("rewind.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/r.log"));
    }
}
