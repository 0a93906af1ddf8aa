// File: src/store.rs
// Purpose: Field store holding form values and their live error set

use std::fmt;

use crate::error::{ErrorSet, FormError};
use crate::field::Field;
use crate::state::FormState;
use crate::validation::{ContactRules, Validate};

/// Notification sent to observers after the form changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent<'a> {
    /// A field was written; `errors` is already recomputed
    FieldChanged {
        field: Field,
        value: &'a str,
        errors: &'a ErrorSet,
    },
    /// A submit was refused because of `errors`
    SubmitRejected { errors: &'a ErrorSet },
    /// A submit succeeded and `snapshot` is the new submitted copy
    Submitted { snapshot: &'a FormState },
}

/// Handle returned by [`FieldStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FormEvent<'_>)>;

pub(crate) fn dispatch(observers: &mut [(SubscriptionId, Observer)], event: &FormEvent<'_>) {
    for (_, observer) in observers.iter_mut() {
        observer(event);
    }
}

/// Current field values plus the errors derived from them
///
/// The error set is recomputed synchronously on every write, so
/// `errors()` always equals `validator.validate(state())`.
pub struct FieldStore<V = ContactRules> {
    state: FormState,
    errors: ErrorSet,
    validator: V,
    pub(crate) observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl FieldStore {
    /// Create an empty store using the stock contact form rules
    pub fn new() -> Self {
        Self::with_validator(ContactRules::default())
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> FieldStore<V> {
    /// Create an empty store validated by `validator`
    pub fn with_validator(validator: V) -> Self {
        let state = FormState::new();
        let errors = validator.validate(&state);
        Self {
            state,
            errors,
            validator,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn get(&self, field: Field) -> &str {
        self.state.get(field)
    }

    /// Replace a field's value, revalidate, and notify observers
    ///
    /// The value is stored verbatim: no trimming, no coercion.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &ErrorSet {
        self.state.set(field, value);
        self.errors = self.validator.validate(&self.state);

        tracing::debug!(
            field = field.name(),
            errors = self.errors.len(),
            "field updated"
        );

        let event = FormEvent::FieldChanged {
            field,
            value: self.state.get(field),
            errors: &self.errors,
        };
        dispatch(&mut self.observers, &event);

        &self.errors
    }

    /// Same as [`set_field`](Self::set_field), addressing the field by wire name
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&ErrorSet, FormError> {
        let field = name.parse::<Field>().map_err(|e| {
            tracing::warn!(field = name, "rejected write to unknown field");
            e
        })?;
        Ok(self.set_field(field, value))
    }

    /// Recompute the error set from the current state
    pub fn revalidate(&mut self) -> &ErrorSet {
        self.errors = self.validator.validate(&self.state);
        &self.errors
    }

    /// Register an observer called after every change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&FormEvent<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }
}

impl<V: fmt::Debug> fmt::Debug for FieldStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldStore")
            .field("state", &self.state)
            .field("errors", &self.errors)
            .field("validator", &self.validator)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_store_has_live_errors() {
        let store = FieldStore::new();
        assert_eq!(store.errors().len(), 3);
        assert!(!store.errors().contains(Field::Message));
    }

    #[test]
    fn test_set_field_revalidates() {
        let mut store = FieldStore::new();
        let errors = store.set_field(Field::FirstName, "Branden");
        assert!(!errors.contains(Field::FirstName));

        store.set_field(Field::FirstName, "abc");
        assert!(store.errors().contains(Field::FirstName));
    }

    #[test]
    fn test_set_field_by_name() {
        let mut store = FieldStore::new();
        store.set_field_by_name("lastName", "Jones").unwrap();
        assert_eq!(store.get(Field::LastName), "Jones");

        let err = store.set_field_by_name("phone", "555").unwrap_err();
        assert_eq!(err, FormError::UnknownField("phone".to_string()));
        assert_eq!(store.errors().len(), 2);
    }

    #[test]
    fn test_observer_sees_fresh_errors() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = FieldStore::new();

        let sink = Rc::clone(&seen);
        store.subscribe(move |event| {
            if let FormEvent::FieldChanged { field, value, errors } = event {
                sink.borrow_mut().push((*field, value.to_string(), errors.len()));
            }
        });

        store.set_field(Field::Email, "me@me.me");
        store.set_field(Field::Email, "@.");

        assert_eq!(
            *seen.borrow(),
            vec![
                (Field::Email, "me@me.me".to_string(), 2),
                (Field::Email, "@.".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = FieldStore::new();

        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_field(Field::Message, "hi");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_field(Field::Message, "again");

        assert_eq!(*count.borrow(), 1);
    }
}
