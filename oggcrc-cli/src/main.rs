use std::io;
use std::process::ExitCode;

use clap::Parser;

use oggcrc_cli::cli::Cli;
use oggcrc_cli::error::CliError;
use oggcrc_cli::run;
use oggcrc_cli::settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::new(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level},oggcrc_core={level}").into()
        }))
        .init();

    let result = run(
        &cli.command,
        &settings,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                CliError::Mismatch { .. } => tracing::warn!("{e}"),
                _ => tracing::error!("{e}"),
            }
            ExitCode::from(e.exit_code())
        }
    }
}
