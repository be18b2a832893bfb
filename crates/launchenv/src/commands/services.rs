use clap::ArgMatches;
use launchenv_core::{Env, LaunchEnvResult, ServiceGroup};
use tracing::info;

use super::{boxed, finish, read_request};

pub(crate) fn handle_services_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.services_started");

    let services = finish("cli.services_failed", grouped_services(matches))?;
    println!("{}", serde_json::to_string_pretty(&services)?);
    info!(event = "cli.services_completed", labels = services.len());
    Ok(())
}

fn grouped_services(matches: &ArgMatches) -> LaunchEnvResult<ServiceGroup> {
    let request = read_request(matches).map_err(boxed)?;
    Env::with_default_strategy(&request)
        .vcap_services()
        .map_err(boxed)
}
