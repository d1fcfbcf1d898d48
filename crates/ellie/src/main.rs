use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::{ensure_config_dir, get_config_path, Settings};
use commands::{CommandContext, CommandError};
use dispatch::{AuthCommand, AuthDispatch, NoAuthCommand, NoAuthDispatch};
use ellie_api_rs::client::EllieClient;
use ellie_api_rs::error::Error as ApiClientError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success; usage errors exit 1.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(
        cli.verbose,
        cli.quiet,
        commands::colors_enabled(cli.no_color),
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config_path = get_config_path(cli.config.as_deref())?;
    ensure_config_dir(&config_path)?;
    let ctx = CommandContext::from_cli(cli, config_path);

    // Config, completions and help never need an API key
    if let Some(dispatch) = NoAuthDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let Some(dispatch) = AuthDispatch::from_cli(cli) else {
        return Ok(());
    };
    dispatch.validate()?;

    let settings = Settings::resolve(&ctx.config_path)?;
    let client = EllieClient::with_base_url(settings.api_key, settings.base_url)?;

    dispatch.execute(&ctx, &client).await
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Api(ApiClientError::Transport(_)) => "NETWORK_ERROR",
        CommandError::Api(ApiClientError::Api(_)) => "API_ERROR",
        CommandError::Api(ApiClientError::Json(_)) => "JSON_ERROR",
        CommandError::Api(ApiClientError::Query(_)) => "USAGE_ERROR",
        CommandError::Api(ApiClientError::InvalidApiKey) => "CONFIG_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Usage(_) => "USAGE_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Api(ApiClientError::InvalidApiKey) => ExitCode::from(5),
        CommandError::Api(ApiClientError::Api(_)) => ExitCode::from(2),
        CommandError::Api(ApiClientError::Transport(_)) => ExitCode::from(3),
        CommandError::Api(ApiClientError::Json(_) | ApiClientError::Query(_)) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Usage(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
