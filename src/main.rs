/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;
use std::io;
use std::path::Path;

/* Custom libraries */
use elevator_sim::config::{self, OutputFormat};
use elevator_sim::control;
use elevator_sim::scenario;
use elevator_sim::unwrap_or_exit;
use elevator_sim::Dispatcher;

/* Main */
fn main() -> io::Result<()> {
    let matches = Command::new("elevator-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates a single elevator car serving prioritised floor requests")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .takes_value(true)
                .default_value("config.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .short('s')
                .value_name("FILE")
                .takes_value(true)
                .help("Serve the requests in FILE and exit instead of starting the console"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final status as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = Path::new(matches.value_of("config").unwrap_or("config.toml"));
    let loaded = config::load_config_or_default(config_path);

    // The logger must run before a config error can be reported
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::log_level(&loaded)),
    )
    .init();
    let config = unwrap_or_exit!(loaded);
    info!("Booting elevator simulator");

    let output_format = if matches.is_present("json") {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let mut dispatcher = Dispatcher::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.value_of("scenario") {
        Some(path) => {
            let scenario = unwrap_or_exit!(scenario::load_scenario(Path::new(path)));
            scenario.submit(&mut dispatcher);

            let status = control::Command::Status { format: None };
            control::execute(&mut dispatcher, control::Command::Run, output_format, &mut out)?;
            control::execute(&mut dispatcher, status, output_format, &mut out)?;
        }
        None => {
            info!("No scenario given, reading commands from stdin");
            let stdin = io::stdin();
            control::run_console(&mut dispatcher, stdin.lock(), &mut out, output_format)?;
        }
    }

    Ok(())
}
