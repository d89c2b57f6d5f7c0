use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use employee_form_core::{EmployeeClient, FormController, SubmitOutcome, DEFAULT_BASE_URL};
use log::{debug, error};

use crate::session::{parse_assignment, Session};
use crate::transport::UreqTransport;

const PROGRAM_NAME: &str = "employee-form";

pub fn build_cli() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(format!(
            "Fill in and submit an employee record\n\nExample:\n {} --set \
             EmployeeID=E1 --set Email=ann@co.com --submit",
            PROGRAM_NAME
        ))
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .env("EMPLOYEE_FORM_ENDPOINT")
                .default_value(DEFAULT_BASE_URL)
                .help("Base URL of the employee service"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .short('s')
                .action(ArgAction::Append)
                .value_name("FIELD=VALUE")
                .help("Pre-fill a field. E.g. 'EmployeeID=E1', 'Date Of Joining=2020-01-01'"),
        )
        .arg(
            Arg::new("submit")
                .long("submit")
                .action(ArgAction::SetTrue)
                .help("Submit once and exit instead of starting an interactive session"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .value_parser(clap::value_parser!(u64))
                .default_value("10")
                .help("Request timeout in seconds"),
        )
}

pub fn run_cli(args: Vec<String>) -> ExitCode {
    env_logger::init();
    let matches = build_cli().try_get_matches_from(args).unwrap_or_else(|e| {
        e.exit();
    });
    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Build a controller from the parsed arguments, with every `--set` applied.
pub fn form_from_matches(matches: &ArgMatches) -> Result<FormController> {
    let endpoint = matches
        .get_one::<String>("endpoint")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BASE_URL);
    let mut form = FormController::new(EmployeeClient::new(endpoint));
    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        let (field, value) = parse_assignment(assignment)
            .with_context(|| format!("invalid --set '{assignment}'"))?;
        debug!("prefill {field}");
        form.update_field(field, value);
    }
    Ok(form)
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let form = form_from_matches(matches)?;
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(10);
    let transport = UreqTransport::new(Duration::from_secs(timeout));
    debug!("posting to {}", form.client().employees_url());

    let stdin = io::stdin();
    let mut session = Session::new(form, transport, stdin.lock(), io::stdout());

    if !matches.get_flag("submit") {
        session.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = session.submit();
    let view = session.form().view();
    let mut out = session.into_output();
    writeln!(out, "{view}")?;
    Ok(match outcome {
        SubmitOutcome::Succeeded { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
