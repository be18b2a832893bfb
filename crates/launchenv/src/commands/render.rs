use std::path::Path;

use clap::ArgMatches;
use launchenv_config::load_config;
use launchenv_core::{Env, EnvError, LaunchEnvResult, StaticStrategy};
use tracing::info;

use super::{boxed, finish, read_request};

pub(crate) fn handle_render_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let part = matches
        .get_one::<String>("part")
        .map(String::as_str)
        .unwrap_or("all");

    info!(event = "cli.render_started", part = part);

    let script = finish("cli.render_failed", render(matches, part))?;
    print!("{}", script);
    info!(
        event = "cli.render_completed",
        part = part,
        statements = script.lines().count()
    );
    Ok(())
}

fn render(matches: &ArgMatches, part: &str) -> LaunchEnvResult<String> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = load_config(config_path).map_err(boxed)?;
    let strategy = StaticStrategy::from_config(&config);

    let request = read_request(matches).map_err(boxed)?;
    let env = Env::new(&request, &strategy).with_policy(config.malformed_user_variables);

    render_part(&env, part).map_err(boxed)
}

fn render_part(env: &Env<'_>, part: &str) -> Result<String, EnvError> {
    match part {
        "system" => env.exported_system_environment_variables(),
        "user" => env.exported_user_environment_variables(),
        _ => env.exported_environment_variables(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;
    use launchenv_core::{ExportRequest, Limits};

    fn request() -> ExportRequest {
        ExportRequest {
            limits: Limits { mem: 256 },
            env: vec!["FOO=$MEMORY_LIMIT".to_string()],
            ..Default::default()
        }
    }

    fn render_args(args: &[&str]) -> LaunchEnvResult<String> {
        let mut argv = vec!["launchenv", "render"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        let sub = matches.subcommand_matches("render").unwrap();
        render(sub, "all")
    }

    #[test]
    fn test_render_part_user_only() {
        let request = request();
        let env = Env::with_default_strategy(&request);
        assert_eq!(
            render_part(&env, "user").unwrap(),
            "export FOO=\"$MEMORY_LIMIT\";\n"
        );
    }

    #[test]
    fn test_render_part_system_only() {
        let request = request();
        let env = Env::with_default_strategy(&request);
        let script = render_part(&env, "system").unwrap();
        assert!(script.starts_with("export MEMORY_LIMIT=\"256m\";\n"));
        assert!(!script.contains("FOO"));
    }

    #[test]
    fn test_render_part_all_orders_system_first() {
        let request = request();
        let env = Env::with_default_strategy(&request);
        let script = render_part(&env, "all").unwrap();
        assert!(script.ends_with("export FOO=\"$MEMORY_LIMIT\";\n"));
        assert!(script.find("MEMORY_LIMIT=").unwrap() < script.find("FOO=").unwrap());
    }

    #[test]
    fn test_render_with_config_and_request_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[system]\nSTACK = \"cflinuxfs4\"\n").unwrap();
        let request = dir.path().join("request.json");
        std::fs::write(&request, r#"{"limits":{"mem":64},"env":["A=1"]}"#).unwrap();

        let script = render_args(&[
            "--config",
            config.to_str().unwrap(),
            "--request",
            request.to_str().unwrap(),
        ])
        .unwrap();
        assert!(script.starts_with("export STACK=\"cflinuxfs4\";\nexport MEMORY_LIMIT=\"64m\";\n"));
        assert!(script.ends_with("export A=\"1\";\n"));
    }

    #[test]
    fn test_render_reports_config_error_code() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = render_args(&["--config", missing.to_str().unwrap(), "--request", "-"])
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_NOT_FOUND");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_render_reports_request_error_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let missing = dir.path().join("missing.json");
        let err = render_args(&[
            "--config",
            config.to_str().unwrap(),
            "--request",
            missing.to_str().unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err.error_code(), "ENV_INVALID_REQUEST");
    }
}
