//! Contact Form Validation Core
//!
//! Pure Rust string predicates compatible with both std and no_std environments.
//! The `contact-form` rule engine builds its field rules on top of these.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod email;
pub mod string;

// Re-export all validators
pub use email::*;
pub use string::*;
