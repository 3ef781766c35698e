//! The field contract shared by every field specification

use serde_json::Value;

/// Error produced by a single field's `clean`
///
/// The display form of each variant is the user-visible message, so error
/// lists can be built with `to_string()` without further mapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
	/// A required field was absent or carried only the unset sentinel
	#[error("{0}")]
	Required(String),
	/// The raw token could not be interpreted as the field's type
	#[error("{0}")]
	Invalid(String),
	/// The parsed value violated a declared constraint
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// How a field is presented when the form is rendered
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
	TextInput,
	NumberInput,
	/// One radio input per `(value, label)` choice
	RadioSelect { choices: Vec<(String, String)> },
	/// A select element; the empty-string sentinel option is rendered first
	Select {
		empty_label: String,
		choices: Vec<(String, String)>,
	},
	/// One checkbox per `(value, label)` choice, all sharing the field name
	CheckboxMultiple { choices: Vec<(String, String)> },
}

/// A single form field specification
///
/// `clean` receives every raw token submitted under the field's name (the
/// multi-choice field is encoded as repeated occurrences of the same key,
/// so one field may see many tokens). An empty slice means the field was
/// absent from the submission.
///
/// The cleaned value is a `serde_json::Value`: `Null` for an absent
/// optional field, a string, a number, or an array of strings. Optional
/// fields normalize to `Null`, never to an empty string.
///
/// # Examples
///
/// ```
/// use formling_forms::{FormField, TextField};
///
/// let field = TextField::new("user");
/// assert_eq!(field.name(), "user");
/// assert_eq!(field.clean(&[]).unwrap(), serde_json::Value::Null);
/// assert_eq!(field.clean(&["Kim"]).unwrap(), serde_json::json!("Kim"));
/// ```
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn widget(&self) -> &Widget;

	/// The factory-default value this field contributes to a fresh form
	fn default_value(&self) -> Value;

	/// Clean the raw tokens submitted under this field's name
	fn clean(&self, tokens: &[&str]) -> FieldResult<Value>;
}
