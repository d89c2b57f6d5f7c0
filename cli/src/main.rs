use std::env;
use std::process::ExitCode;

use employee_form_cli::run_cli;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    run_cli(args)
}
