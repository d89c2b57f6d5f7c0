//! The fixed set of form fields and their descriptors.
//!
//! # Design
//! Rendering, validation and (de)serialization all walk `FIELDS`, a static
//! table in display order. Nothing enumerates keys at runtime, so the order
//! and the key set cannot drift between the view and the wire format.

use std::fmt;
use std::str::FromStr;

use crate::validation::{self, Rule};

/// One of the seven employee form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EmployeeId,
    Name,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

/// How a host should render the input control for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
}

/// Static description of a field: wire key, label, input kind and the
/// validation rule applied at submit time (if any).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub key: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub rule: Option<Rule>,
}

/// All fields in display order.
pub const FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        field: Field::EmployeeId,
        key: "EmployeeID",
        label: "Employee ID",
        kind: InputKind::Text,
        rule: Some(validation::EMPLOYEE_ID),
    },
    FieldSpec {
        field: Field::Name,
        key: "Name",
        label: "Name",
        kind: InputKind::Text,
        rule: None,
    },
    FieldSpec {
        field: Field::Email,
        key: "Email",
        label: "Email",
        kind: InputKind::Text,
        rule: Some(validation::EMAIL),
    },
    FieldSpec {
        field: Field::PhoneNumber,
        key: "PhoneNumber",
        label: "Phone Number",
        kind: InputKind::Text,
        rule: Some(validation::PHONE_NUMBER),
    },
    FieldSpec {
        field: Field::Department,
        key: "Department",
        label: "Department",
        kind: InputKind::Text,
        rule: Some(validation::DEPARTMENT),
    },
    FieldSpec {
        field: Field::DateOfJoining,
        key: "DateOfJoining",
        label: "Date Of Joining",
        kind: InputKind::Date,
        rule: Some(validation::DATE_OF_JOINING),
    },
    FieldSpec {
        field: Field::Role,
        key: "Role",
        label: "Role",
        kind: InputKind::Text,
        rule: Some(validation::ROLE),
    },
];

impl Field {
    pub const ALL: [Field; 7] = [
        Field::EmployeeId,
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self.index()]
    }

    /// Position in display order; also the index into `FIELDS`.
    pub fn index(self) -> usize {
        match self {
            Field::EmployeeId => 0,
            Field::Name => 1,
            Field::Email => 2,
            Field::PhoneNumber => 3,
            Field::Department => 4,
            Field::DateOfJoining => 5,
            Field::Role => 6,
        }
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn kind(self) -> InputKind {
        self.spec().kind
    }

    pub fn placeholder(self) -> String {
        format!("Enter {}", self.label())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names none of the form fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts either the wire key or the label, ignoring case, spaces,
    /// underscores and dashes ("EmployeeID", "employee id", "phone_number").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        FIELDS
            .iter()
            .find(|spec| normalize(spec.key) == wanted || normalize(spec.label) == wanted)
            .map(|spec| spec.field)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_index() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FIELDS[i].field, *field);
        }
    }

    #[test]
    fn only_date_of_joining_is_a_date_input() {
        let dates: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| f.kind() == InputKind::Date)
            .collect();
        assert_eq!(dates, vec![Field::DateOfJoining]);
    }

    #[test]
    fn name_has_no_rule() {
        assert!(Field::Name.spec().rule.is_none());
        assert!(Field::ALL
            .into_iter()
            .filter(|f| *f != Field::Name)
            .all(|f| f.spec().rule.is_some()));
    }

    #[test]
    fn placeholder_uses_label() {
        assert_eq!(Field::DateOfJoining.placeholder(), "Enter Date Of Joining");
        assert_eq!(Field::EmployeeId.placeholder(), "Enter Employee ID");
    }

    #[test]
    fn parse_accepts_keys_and_labels() {
        assert_eq!("EmployeeID".parse::<Field>().unwrap(), Field::EmployeeId);
        assert_eq!("employee id".parse::<Field>().unwrap(), Field::EmployeeId);
        assert_eq!("phone_number".parse::<Field>().unwrap(), Field::PhoneNumber);
        assert_eq!("Date Of Joining".parse::<Field>().unwrap(), Field::DateOfJoining);
        assert_eq!("ROLE".parse::<Field>().unwrap(), Field::Role);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "salary".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("salary".to_string()));
    }
}
