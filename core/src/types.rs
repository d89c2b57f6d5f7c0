//! Form data and wire DTOs for the employee API.
//!
//! # Design
//! `FormState` holds exactly one string per field and serializes to the
//! seven-key JSON object the `/employees` endpoint expects. `FieldErrors`
//! mirrors it with one optional message per field, so "no message" is the
//! only way to say "valid". The mock-server crate defines its own copy of
//! the employee record; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current values of all seven inputs. All values are raw strings, the date
/// included, until validation looks at them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "DateOfJoining")]
    pub date_of_joining: String,
    #[serde(rename = "Role")]
    pub role: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EmployeeId => &self.employee_id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Department => &self.department,
            Field::DateOfJoining => &self.date_of_joining,
            Field::Role => &self.role,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::EmployeeId => &mut self.employee_id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Department => &mut self.department,
            Field::DateOfJoining => &mut self.date_of_joining,
            Field::Role => &mut self.role,
        }
    }

    /// Replace one field's value, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Iterate `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, v)| v.is_empty())
    }
}

/// Per-field validation messages. A field with no message is valid.
///
/// Serializes as a sparse object containing only the failing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(rename = "EmployeeID", default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "PhoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Department", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "DateOfJoining", default, skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<String>,
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::EmployeeId => self.employee_id.as_deref(),
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::PhoneNumber => self.phone_number.as_deref(),
            Field::Department => self.department.as_deref(),
            Field::DateOfJoining => self.date_of_joining.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let slot = match field {
            Field::EmployeeId => &mut self.employee_id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Department => &mut self.department,
            Field::DateOfJoining => &mut self.date_of_joining,
            Field::Role => &mut self.role,
        };
        *slot = Some(message.into());
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate failing fields and their messages in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|m| (f, m)))
    }
}

/// Body of a successful `POST /employees` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a failed reply. Servers either put `message` at the top level or
/// wrap it as `{"error": {"message": ...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<WrappedError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WrappedError {
    #[serde(default)]
    message: Option<String>,
}

impl ErrorReply {
    pub(crate) fn into_message(self) -> Option<String> {
        let non_empty = |m: &String| !m.is_empty();
        self.message
            .filter(non_empty)
            .or_else(|| self.error.and_then(|e| e.message).filter(non_empty))
    }
}
