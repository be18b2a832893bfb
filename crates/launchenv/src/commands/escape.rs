use clap::ArgMatches;
use launchenv_core::{EnvError, EscapeMode, escape};
use tracing::info;

use super::{boxed, finish};

pub(crate) fn handle_escape_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = matches
        .get_one::<String>("value")
        .ok_or("Value argument is required")?;
    let mode: EscapeMode = matches
        .get_one::<String>("mode")
        .map(String::as_str)
        .unwrap_or("safe")
        .parse()?;

    info!(event = "cli.escape_started", mode = %mode);

    let escaped = escape(value, mode).map_err(|source| {
        boxed(EnvError::Encoding {
            name: "value".to_string(),
            source,
        })
    });
    let escaped = finish("cli.escape_failed", escaped)?;

    println!("{}", escaped);
    info!(event = "cli.escape_completed", mode = %mode);
    Ok(())
}
