//! Terminal host for the employee form.
//!
//! Renders the form as text, edits fields from commands or `--set` flags,
//! and executes the `POST /employees` request the core builds with ureq.

pub mod parser;
pub mod session;
pub mod transport;

pub use parser::{build_cli, run_cli};
pub use session::{parse_command, Command, Session};
pub use transport::UreqTransport;
