mod app;

use app::cli::parse_args;
use env_logger::Env;
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Prints help/version or the usage error and exits on its own.
    let args = parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    if let Err(err) = app::run(args, io::stdout().lock()) {
        let (message, code) = app::failure_report(&err);
        eprintln!("{}", message);
        process::exit(code);
    }
}
