//! Form schema declaration and validation for formling
//!
//! This crate provides the declarative half of the form demo:
//! - field specifications (`TextField`, `NumberField`, `ChoiceField`,
//!   `MultiChoiceField`) with per-constraint error messages
//! - `FormSchema`, which cleans a raw submission field by field and
//!   accumulates every failure into one result
//! - the value types that flow through the rest of the system
//!   (`RawForm`, `FormValues`, `FieldErrors`, `ValidationResult`)

pub mod field;
pub mod fields;
pub mod schema;
pub mod values;

pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{ChoiceField, MultiChoiceField, NumberField, TextField};
pub use schema::{FormSchema, ValidationResult};
pub use values::{FieldErrors, FormValues, RawForm};
