use std::io;

use oggcrc_core::CrcError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Standard input given more than once")]
    RepeatedStdin,

    #[error("Invalid checksum value: {0}")]
    InvalidChecksum(String),

    #[error("{name}: {source}")]
    Mismatch {
        name: String,
        #[source]
        source: CrcError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    /// Process exit code: 1 for a failed check, 2 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Mismatch { .. } => 1,
            _ => 2,
        }
    }
}
