use std::fs;
use std::io::{self, Read, Write};

use oggcrc_core::{crc32, verify};

use crate::cli::{Command, Input};
use crate::error::CliError;
use crate::settings::Settings;

pub mod cli;
pub mod error;
pub mod settings;

/// Executes `command`, reading `-` inputs from `stdin` and writing results to `out`.
pub fn run<R, W>(
    command: &Command,
    settings: &Settings,
    stdin: &mut R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: Read,
    W: Write,
{
    match command {
        Command::Sum { inputs } => {
            let stdin_only = [Input::Stdin];
            let inputs = if inputs.is_empty() { &stdin_only[..] } else { &inputs[..] };

            // Stdin is consumed by the first read; a second `-` would hash an empty buffer.
            if inputs.iter().filter(|input| **input == Input::Stdin).count() > 1 {
                return Err(CliError::RepeatedStdin);
            }

            for input in inputs {
                let data = read_input(input, stdin)?;
                let rendered = settings.output.render(crc32(&data));
                tracing::debug!(%input, len = data.len(), crc = %rendered, "Computed checksum");

                writeln!(out, "{}  {}", rendered, input).map_err(CliError::Output)?;
            }
        }
        Command::Check { expect, input } => {
            let data = read_input(input, stdin)?;
            verify(&data, *expect).map_err(|source| CliError::Mismatch {
                name: input.to_string(),
                source,
            })?;
            tracing::debug!(%input, len = data.len(), "Checksum verified");

            writeln!(out, "{}: OK", input).map_err(CliError::Output)?;
        }
    }

    Ok(())
}

/// Reads one input completely; each input is checksummed as a single buffer.
fn read_input<R: Read>(input: &Input, stdin: &mut R) -> Result<Vec<u8>, CliError> {
    let io_error = |source: io::Error| CliError::Io {
        name: input.to_string(),
        source,
    };

    match input {
        Input::Stdin => {
            let mut data = Vec::new();
            stdin.read_to_end(&mut data).map_err(io_error)?;
            Ok(data)
        }
        Input::Path(path) => fs::read(path).map_err(io_error),
    }
}
