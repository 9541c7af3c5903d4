use jwtmaker::config::cli::Cli;
use jwtmaker::logging::events;
use jwtmaker::{app, telemetry};

fn main() {
    telemetry::init_tracing();

    let cli = Cli::parse_normalized();

    match app::run(&cli) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            events::token_failed(&e);
            println!("{e}");
            std::process::exit(e.exit_code(cli.exit_code_policy));
        }
    }
}
