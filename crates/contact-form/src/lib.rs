// Contact Form - field store, validation rules and submission controller
// The host owns painting and event dispatch; this crate owns the state

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod state;
pub mod store;
pub mod validation;
pub mod view;

// Re-export core types
pub use config::Config;
pub use error::{ErrorSet, FormError, SubmitError, ValidationError};
pub use field::Field;
pub use form::{ContactForm, Phase};
pub use state::FormState;
pub use store::{FieldStore, FormEvent, SubscriptionId};
pub use validation::{validate, ContactRules, Validate, FIRST_NAME_MIN_LENGTH};
pub use view::{render, render_display, ViewOptions};

// Re-export Maud markup for hosts embedding the view
pub use maud::Markup;
