// File: src/validation.rs
// Purpose: Rule engine mapping a form state to its error set

use contact_form_validation::{is_valid_email, validate_min_length, validate_required};

use crate::error::{ErrorSet, ValidationError};
use crate::field::Field;
use crate::state::FormState;

/// Minimum first name length of the stock contact form
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

/// Trait for rule sets that can validate a form state
///
/// Implementations must be pure: the same state always yields the same
/// error set. Closures `Fn(&FormState) -> ErrorSet` implement it too.
pub trait Validate {
    /// Returns one error per failing field; empty when the state is valid
    fn validate(&self, state: &FormState) -> ErrorSet;
}

impl<F> Validate for F
where
    F: Fn(&FormState) -> ErrorSet,
{
    fn validate(&self, state: &FormState) -> ErrorSet {
        self(state)
    }
}

/// The contact form rules
///
/// - firstName: at least `first_name_min_length` characters
/// - lastName: required (non-empty)
/// - email: `local@domain.tld` shape, empty fails
/// - message: free text, never fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRules {
    pub first_name_min_length: usize,
}

impl ContactRules {
    pub fn new(first_name_min_length: usize) -> Self {
        Self {
            first_name_min_length,
        }
    }

    fn check(&self, field: Field, value: &str) -> Result<(), String> {
        match field {
            Field::FirstName => {
                validate_min_length(value, field.name(), self.first_name_min_length)
            }
            Field::LastName => validate_required(value, field.name()),
            Field::Email => {
                if is_valid_email(value) {
                    Ok(())
                } else {
                    Err(format!("{} must be a valid email address", field.name()))
                }
            }
            Field::Message => Ok(()),
        }
    }
}

impl Default for ContactRules {
    fn default() -> Self {
        Self::new(FIRST_NAME_MIN_LENGTH)
    }
}

impl Validate for ContactRules {
    fn validate(&self, state: &FormState) -> ErrorSet {
        state
            .iter()
            .filter_map(|(field, value)| {
                self.check(field, value)
                    .err()
                    .map(|message| ValidationError::new(field, message))
            })
            .collect()
    }
}

/// Validate a state against the stock contact form rules
pub fn validate(state: &FormState) -> ErrorSet {
    ContactRules::default().validate(state)
}
