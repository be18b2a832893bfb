use std::io::Read;
use std::path::Path;

use clap::ArgMatches;
use launchenv_core::{EnvError, ExportRequest, LaunchEnvError, LaunchEnvResult};
use tracing::error;

mod escape;
mod render;
mod services;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("render", sub_matches)) => render::handle_render_command(sub_matches),
        Some(("services", sub_matches)) => services::handle_services_command(sub_matches),
        Some(("escape", sub_matches)) => escape::handle_escape_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Read the request named by `--request`, `-` meaning stdin.
pub(crate) fn read_request(matches: &ArgMatches) -> Result<ExportRequest, EnvError> {
    let source = matches
        .get_one::<String>("request")
        .map(String::as_str)
        .unwrap_or("-");

    let bytes = if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| EnvError::InvalidRequest {
                message: format!("failed to read stdin: {}", e),
            })?;
        buf
    } else {
        std::fs::read(Path::new(source)).map_err(|e| EnvError::InvalidRequest {
            message: format!("failed to read {}: {}", source, e),
        })?
    };

    ExportRequest::from_json_slice(&bytes)
}

pub(crate) fn boxed<E: LaunchEnvError>(err: E) -> Box<dyn LaunchEnvError> {
    Box::new(err)
}

/// Report a failed command and hand its result back to `main`.
pub(crate) fn finish<T>(
    event: &'static str,
    result: LaunchEnvResult<T>,
) -> Result<T, Box<dyn std::error::Error>> {
    result.map_err(|err| {
        report_failure(event, err.as_ref());
        err.to_string().into()
    })
}

/// Print a failure to stderr and log it with its error code.
pub(crate) fn report_failure(event: &'static str, err: &dyn LaunchEnvError) {
    eprintln!(
        "{} {}",
        crate::color::error(&format!("Error: {}", err)),
        crate::color::muted(&format!("[{}]", err.error_code()))
    );
    error!(
        event = event,
        error = %err,
        error_code = err.error_code(),
        user_error = err.is_user_error()
    );
}
