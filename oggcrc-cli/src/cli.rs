use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "oggcrc")]
#[command(about = "Ogg CRC-32 (polynomial 0x04C11DB7) of whole buffers", long_about = None)]
pub struct Cli {
    /// Settings file used instead of the built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the checksum of each input
    Sum {
        /// Files to read; `-` or nothing reads stdin, which may be named once
        inputs: Vec<Input>,
    },
    /// Exit with status 1 unless the input has the expected checksum
    Check {
        /// Expected checksum, `0x`-prefixed hex or decimal
        #[arg(long, value_parser = parse_checksum)]
        expect: u32,
        #[arg(default_value = "-")]
        input: Input,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl FromStr for Input {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Input::Stdin,
            path => Input::Path(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "-"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn parse_checksum(value: &str) -> Result<u32, CliError> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };

    parsed.map_err(|_| CliError::InvalidChecksum(value.to_string()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum("0x5fb0a94f").unwrap(), 0x5fb0a94f);
        assert_eq!(parse_checksum("0X5FB0A94F").unwrap(), 0x5fb0a94f);
        assert_eq!(parse_checksum("1605413199").unwrap(), 0x5fb0a94f);
        assert_eq!(parse_checksum("0").unwrap(), 0);

        assert!(parse_checksum("").is_err());
        assert!(parse_checksum("0x").is_err());
        assert!(parse_checksum("0x1_0000_0000").is_err());
        assert!(parse_checksum("4294967296").is_err());
        assert!(parse_checksum("-1").is_err());
    }

    #[test]
    fn test_parse_check_command() {
        let cli =
            Cli::try_parse_from(["oggcrc", "check", "--expect", "0x3eb0ec23", "page.bin"]).unwrap();

        match cli.command {
            Command::Check { expect, input } => {
                assert_eq!(expect, 0x3eb0ec23);
                assert_eq!(input, Input::Path(PathBuf::from("page.bin")));
            }
            _ => panic!("expected check command"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_sum_command() {
        let cli = Cli::try_parse_from(["oggcrc", "sum", "a.bin", "-", "--config", "oggcrc.toml"])
            .unwrap();

        match cli.command {
            Command::Sum { inputs } => {
                assert_eq!(inputs, vec![Input::Path(PathBuf::from("a.bin")), Input::Stdin]);
            }
            _ => panic!("expected sum command"),
        }
        assert_eq!(cli.config, Some(PathBuf::from("oggcrc.toml")));
    }

    #[test]
    fn test_check_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["oggcrc", "check", "--expect", "0"]).unwrap();
        assert!(matches!(cli.command, Command::Check { input: Input::Stdin, .. }));

        assert!(Cli::try_parse_from(["oggcrc", "check", "--expect", "nope"]).is_err());
    }
}
