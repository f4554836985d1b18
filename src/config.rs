use std::path::PathBuf;

use clap::Parser;
use crossterm::tty::IsTty;

pub const DEFAULT_CAPACITY: usize = 1_000_000;
pub const DEFAULT_MAX_LINE: usize = 80;

/// Command-line options. Editing itself is driven from standard input.
#[derive(Debug, Parser)]
#[command(name = "dotedit", version, about = "Line-oriented text buffer editor")]
pub struct Args {
    /// Maximum number of bytes the buffer may hold
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Longest accepted input line in bytes, terminator included
    #[arg(long, default_value_t = DEFAULT_MAX_LINE as u64, value_parser = clap::value_parser!(u64).range(2..))]
    pub max_line: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Never style output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub max_line: usize,
    pub log_file: Option<PathBuf>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_line: DEFAULT_MAX_LINE,
            log_file: None,
            color: false,
        }
    }
}

impl Config {
    /// Colour is only used when stdout is a terminal.
    pub fn from_args(args: Args) -> Self {
        Self {
            capacity: args.capacity,
            max_line: args.max_line as usize,
            log_file: args.log_file,
            color: !args.no_color && std::io::stdout().is_tty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dotedit"]).unwrap();
        assert_eq!(args.capacity, DEFAULT_CAPACITY);
        assert_eq!(args.max_line, DEFAULT_MAX_LINE as u64);
        assert!(args.log_file.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "dotedit",
            "--capacity",
            "4096",
            "--max-line",
            "256",
            "--log-file",
            "/tmp/dotedit.log",
            "--no-color",
        ])
        .unwrap();

        let config = Config::from_args(args);
        assert_eq!(config.capacity, 4096);
        assert_eq!(config.max_line, 256);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/dotedit.log")));
        assert!(!config.color);
    }

    #[test]
    fn test_rejects_tiny_line_limit() {
        assert!(Args::try_parse_from(["dotedit", "--max-line", "1"]).is_err());
    }
}
