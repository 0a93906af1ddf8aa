// File: src/error.rs
// Purpose: Validation errors, the derived error set, and API errors

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::field::Field;

/// A single failing field and its human readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors keyed by field, at most one per field
///
/// Serializes as `{ "<fieldName>": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorSet {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous error for the same field
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field, error);
    }

    /// Check if a field has an error
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the error message for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Fields that currently fail validation
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

impl FromIterator<ValidationError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        for error in iter {
            set.insert(error);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ValidationError;
    type IntoIter = std::collections::btree_map::Values<'a, Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in self.errors.values() {
            map.serialize_entry(error.field.name(), &error.message)?;
        }
        map.end()
    }
}

/// Errors raised by the field store API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {} field(s) failing validation", .0.len())]
    Invalid(ErrorSet),
}

impl SubmitError {
    /// The errors that blocked the submission
    pub fn errors(&self) -> &ErrorSet {
        match self {
            SubmitError::Invalid(errors) => errors,
        }
    }
}
