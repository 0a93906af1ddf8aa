// File: src/field.rs
// Purpose: Identity of the four contact form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One of the contact form inputs
///
/// Ordering follows declaration order, which is also the order fields are
/// rendered and errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in render order
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Wire name, used as the input `name`/`id` and as the error message subject
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Whether the label carries a required marker
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    /// `data-testid` of the element echoing this field after submission
    pub fn display_test_id(self) -> &'static str {
        match self {
            Field::FirstName => "firstnameDisplay",
            Field::LastName => "lastnameDisplay",
            Field::Email => "emailDisplay",
            Field::Message => "messageDisplay",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
