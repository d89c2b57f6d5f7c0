//! Render model for the employee form.
//!
//! Hosts draw from `FormView` instead of poking at controller internals: a
//! title, an optional status line, one row per field in display order, and
//! whether a submit is in flight (so the submit control can be disabled).

use std::fmt;

use crate::field::{Field, InputKind};
use crate::form::FormController;

pub const TITLE: &str = "Add Employee";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: Field,
    pub key: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: String,
    pub value: String,
    pub error: Option<String>,
}

impl FieldRow {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub status: Option<String>,
    pub rows: Vec<FieldRow>,
    pub is_submitting: bool,
}

impl FormView {
    pub(crate) fn of(form: &FormController) -> Self {
        let rows = Field::ALL
            .into_iter()
            .map(|field| FieldRow {
                field,
                key: field.key(),
                label: field.label(),
                kind: field.kind(),
                placeholder: field.placeholder(),
                value: form.values().get(field).to_string(),
                error: form.errors().get(field).map(str::to_string),
            })
            .collect();
        Self {
            title: TITLE,
            status: form.status().filter(|s| !s.is_empty()).map(str::to_string),
            rows,
            is_submitting: form.is_submitting(),
        }
    }
}

/// Plain-text rendering used by terminal hosts. Rows with an error are
/// marked with `!` and followed by the message.
impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(status) = &self.status {
            writeln!(f, "{status}")?;
        }
        let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in &self.rows {
            let marker = if row.has_error() { '!' } else { ' ' };
            let value = if row.value.is_empty() {
                format!("<{}>", row.placeholder)
            } else {
                row.value.clone()
            };
            let hint = match row.kind {
                InputKind::Date => " (YYYY-MM-DD)",
                InputKind::Text => "",
            };
            writeln!(f, "{marker} {:>width$}: {value}{hint}", row.label)?;
            if let Some(error) = &row.error {
                writeln!(f, "  {:>width$}  {error}", "")?;
            }
        }
        if self.is_submitting {
            writeln!(f, "(submitting...)")?;
        }
        Ok(())
    }
}
