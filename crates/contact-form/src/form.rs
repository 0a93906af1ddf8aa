// File: src/form.rs
// Purpose: Contact form component: field store plus submission controller

use serde::Serialize;

use crate::error::{ErrorSet, FormError, SubmitError};
use crate::field::Field;
use crate::state::FormState;
use crate::store::{dispatch, FieldStore, FormEvent, SubscriptionId};
use crate::validation::{ContactRules, Validate};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Initial state, and the state after any edit
    #[default]
    Editing,
    /// The last submit succeeded and nothing was edited since
    Submitted,
}

/// A live contact form instance
///
/// Owns the editable values, the derived errors, and the last successfully
/// submitted snapshot. A submit only succeeds when the error set is empty;
/// a successful submit copies the values into the snapshot and leaves the
/// editing fields as they are.
///
/// # Example
///
/// ```
/// use contact_form::{ContactForm, Field};
///
/// let mut form = ContactForm::new();
/// form.set_field(Field::FirstName, "Branden");
/// form.set_field(Field::LastName, "Jones");
/// form.set_field(Field::Email, "me@me.me");
///
/// let snapshot = form.submit().unwrap();
/// assert_eq!(snapshot.first_name, "Branden");
/// ```
#[derive(Debug)]
pub struct ContactForm<V = ContactRules> {
    store: FieldStore<V>,
    submitted: Option<FormState>,
    phase: Phase,
}

impl ContactForm {
    /// Create an empty form using the stock contact form rules
    pub fn new() -> Self {
        Self::with_validator(ContactRules::default())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> ContactForm<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            store: FieldStore::with_validator(validator),
            submitted: None,
            phase: Phase::Editing,
        }
    }

    pub fn store(&self) -> &FieldStore<V> {
        &self.store
    }

    pub fn state(&self) -> &FormState {
        self.store.state()
    }

    pub fn errors(&self) -> &ErrorSet {
        self.store.errors()
    }

    /// Last successfully submitted values, if any
    pub fn submitted(&self) -> Option<&FormState> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &ErrorSet {
        self.phase = Phase::Editing;
        self.store.set_field(field, value)
    }

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&ErrorSet, FormError> {
        let errors = self.store.set_field_by_name(name, value)?;
        self.phase = Phase::Editing;
        Ok(errors)
    }

    /// Attempt a submission
    ///
    /// Revalidates first. With errors, nothing changes and the errors are
    /// returned. Without, the current values become the submitted snapshot,
    /// overwriting any previous one.
    pub fn submit(&mut self) -> Result<&FormState, SubmitError> {
        if !self.store.revalidate().is_empty() {
            let errors = self.store.errors().clone();
            tracing::debug!(
                failing = ?errors.fields(),
                "submission rejected"
            );
            dispatch(
                &mut self.store.observers,
                &FormEvent::SubmitRejected { errors: &errors },
            );
            return Err(SubmitError::Invalid(errors));
        }

        let snapshot = self.submitted.insert(self.store.state().clone());
        self.phase = Phase::Submitted;
        tracing::info!(has_message = !snapshot.message.is_empty(), "contact form submitted");

        dispatch(
            &mut self.store.observers,
            &FormEvent::Submitted { snapshot: &*snapshot },
        );
        Ok(snapshot)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&FormEvent<'_>) + 'static,
    {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::FirstName, "Branden");
        form.set_field(Field::LastName, "Jones");
        form.set_field(Field::Email, "me@me.me");
        form
    }

    #[test]
    fn test_starts_editing_without_snapshot() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), Phase::Editing);
        assert!(form.submitted().is_none());
    }

    #[test]
    fn test_rejected_submit_changes_nothing() {
        let mut form = ContactForm::new();
        form.set_field(Field::FirstName, "abc");

        let err = form.submit().unwrap_err();
        assert_eq!(err.errors().len(), 3);
        assert!(form.submitted().is_none());
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.state().first_name, "abc");
    }

    #[test]
    fn test_submit_keeps_editing_fields() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.phase(), Phase::Submitted);
        assert_eq!(form.store().get(Field::FirstName), "Branden");
        assert_eq!(form.submitted(), Some(form.state()));
    }

    #[test]
    fn test_edit_after_submit_returns_to_editing() {
        let mut form = filled();
        form.submit().unwrap();
        form.set_field(Field::Message, "one more thing");
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.submitted().unwrap().message, "");
    }

    #[test]
    fn test_resubmit_overwrites_snapshot() {
        let mut form = filled();
        form.submit().unwrap();
        form.set_field(Field::Message, "second");
        let snapshot = form.submit().unwrap();
        assert_eq!(snapshot.message, "second");
        assert_eq!(form.phase(), Phase::Submitted);
    }

    #[test]
    fn test_unknown_field_by_name() {
        let mut form = ContactForm::new();
        assert!(form.set_field_by_name("nickname", "x").is_err());
        assert_eq!(form.state(), &FormState::new());
    }
}
