use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("launchenv")
        .about("Render the shell environment a supervised process starts with")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Print the export script for a request")
                .arg(request_arg())
                .arg(
                    Arg::new("part")
                        .long("part")
                        .help("Which variables to render")
                        .value_parser(["all", "system", "user"])
                        .default_value("all"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Config file (defaults to $LAUNCHENV_CONFIG or ~/.launchenv/config.toml)")
                        .value_name("PATH"),
                ),
        )
        .subcommand(
            Command::new("services")
                .about("Print the grouped VCAP_SERVICES document for a request")
                .arg(request_arg()),
        )
        .subcommand(
            Command::new("escape")
                .about("Escape a single value for use inside double quotes")
                .arg(
                    Arg::new("value")
                        .help("Value to escape")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .help("Escaping mode")
                        .value_parser(["safe", "permissive"])
                        .default_value("safe"),
                ),
        )
}

fn request_arg() -> Arg {
    Arg::new("request")
        .long("request")
        .short('r')
        .help("JSON request file, or '-' for stdin")
        .value_name("PATH")
        .required(true)
}
