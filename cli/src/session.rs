//! Line-oriented terminal session around a `FormController`.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use employee_form_core::{Field, FormController, SubmitOutcome, Transport};

const HELP: &str = "\
Commands:
  set <field> <value>   set one field (empty value clears it)
  fill                  prompt for every field in order (empty keeps the value)
  show                  print the form
  submit                validate and send the form
  reset                 clear the form, errors and status
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Fill,
    Show,
    Submit,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. `set` takes the field and value separated by
/// whitespace or `=`; everything after the separator is the value.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = parse_assignment(rest)?;
            Command::Set(field, value)
        }
        "fill" => Command::Fill,
        "show" | "" => Command::Show,
        "submit" => Command::Submit,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command: {other} (try 'help')"),
    };
    Ok(command)
}

/// Parse `KEY=VALUE` or `KEY VALUE`. With `=`, the key may be a label
/// containing spaces ("Date Of Joining=2020-01-01").
pub fn parse_assignment(s: &str) -> Result<(Field, String)> {
    let s = s.trim_start();
    if s.is_empty() {
        bail!("expected a field name");
    }
    if let Some((key, value)) = s.split_once('=') {
        if let Ok(field) = key.trim().parse::<Field>() {
            return Ok((field, value.to_string()));
        }
    }
    let (key, value) = match s.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim_start()),
        None => (s, ""),
    };
    let field: Field = key.parse().map_err(|e| anyhow!("{e}"))?;
    Ok((field, value.to_string()))
}

pub struct Session<T, R, W> {
    form: FormController,
    transport: T,
    input: R,
    output: W,
}

impl<T: Transport, R: BufRead, W: Write> Session<T, R, W> {
    pub fn new(form: FormController, transport: T, input: R, output: W) -> Self {
        Self {
            form,
            transport,
            input,
            output,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.form.view())?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "error: {err}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                return Ok(());
            }
            self.execute(command)?;
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Set(field, value) => self.form.update_field(field, value),
            Command::Fill => self.fill()?,
            Command::Show => writeln!(self.output, "{}", self.form.view())?,
            Command::Submit => {
                self.submit();
                writeln!(self.output, "{}", self.form.view())?;
            }
            Command::Reset => {
                self.form.reset();
                writeln!(self.output, "{}", self.form.view())?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit(&self.transport)
    }

    fn fill(&mut self) -> Result<()> {
        for field in Field::ALL {
            let current = self.form.values().get(field).to_string();
            if current.is_empty() {
                write!(self.output, "{}: ", field.label())?;
            } else {
                write!(self.output, "{} [{current}]: ", field.label())?;
            }
            self.output.flush()?;
            match self.read_line()? {
                Some(line) if !line.is_empty() => self.form.update_field(field, line),
                Some(_) => {}
                None => break,
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
