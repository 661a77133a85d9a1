//! Sign-in form values and the static field rules they are checked against.
//!
//! DESIGN
//! ======
//! Rules are plain data (`RULES`) rather than a schema object, so adding a
//! field means adding a `Field` variant and one table row. `validate` is pure
//! and is the only gate between user input and the network.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Credentials collected by the sign-in form.
///
/// Field order here is the key order of the JSON request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub username: String,
    pub password: String,
}

impl FormValues {
    /// Current value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
        }
    }
}

/// Input fields of the sign-in form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// Wire/DOM name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A minimum-length rule for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub min_len: usize,
    pub message: &'static str,
}

impl FieldRule {
    /// Whether `value` satisfies the rule. Length is counted in chars.
    pub fn accepts(&self, value: &str) -> bool {
        value.chars().count() >= self.min_len
    }
}

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validation table applied on every pass, in field order.
pub const RULES: [FieldRule; 2] = [
    FieldRule {
        field: Field::Username,
        min_len: USERNAME_MIN_LEN,
        message: "Username must be at least 3 characters",
    },
    FieldRule {
        field: Field::Password,
        min_len: PASSWORD_MIN_LEN,
        message: "Password must be at least 6 characters",
    },
];

/// Per-field validation messages. At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check `values` against [`RULES`].
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(values: &FormValues) -> Result<FormValues, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for rule in &RULES {
        if !rule.accepts(values.get(rule.field)) {
            errors.insert(rule.field, rule.message);
        }
    }
    if errors.is_empty() { Ok(values.clone()) } else { Err(errors) }
}
