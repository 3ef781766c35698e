//! Single-choice enum field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use serde_json::Value;

/// Required single selection out of a declared set of `(value, label)` choices
///
/// The empty string is the "unset" sentinel: it is a legal raw token (it is
/// what an untouched select submits) but the required constraint rejects it,
/// so it is never silently accepted as a valid choice. Unknown tokens get
/// the same message as a missing selection.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub choices: Vec<(String, String)>,
	pub required_message: String,
	widget: Widget,
}

impl ChoiceField {
	/// Create a new required ChoiceField rendered as radio inputs
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{ChoiceField, FormField};
	///
	/// let field = ChoiceField::new("gender", vec![("male", "Male"), ("female", "Female")]);
	/// assert_eq!(field.name(), "gender");
	/// assert!(field.required());
	/// ```
	pub fn new(name: impl Into<String>, choices: Vec<(&str, &str)>) -> Self {
		let choices: Vec<(String, String)> = choices
			.into_iter()
			.map(|(v, l)| (v.to_string(), l.to_string()))
			.collect();
		Self {
			name: name.into(),
			label: None,
			required: true,
			widget: Widget::RadioSelect {
				choices: choices.clone(),
			},
			choices,
			required_message: "please select".to_string(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = message.into();
		self
	}

	/// Render as a select element with a leading sentinel option
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{ChoiceField, FormField, Widget};
	///
	/// let field = ChoiceField::new("country", vec![("korea", "Korea"), ("usa", "USA")])
	///     .select("please choose");
	/// assert!(matches!(field.widget(), Widget::Select { .. }));
	/// ```
	pub fn select(mut self, empty_label: impl Into<String>) -> Self {
		self.widget = Widget::Select {
			empty_label: empty_label.into(),
			choices: self.choices.clone(),
		};
		self
	}

	fn is_declared(&self, token: &str) -> bool {
		self.choices.iter().any(|(value, _)| value == token)
	}
}

impl FormField for ChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn default_value(&self) -> Value {
		Value::String(String::new())
	}

	fn clean(&self, tokens: &[&str]) -> FieldResult<Value> {
		let token = tokens.first().copied().unwrap_or("");

		if token.is_empty() {
			if self.required {
				return Err(FieldError::Required(self.required_message.clone()));
			}
			return Ok(Value::String(String::new()));
		}

		if self.is_declared(token) {
			Ok(Value::String(token.to_string()))
		} else {
			Err(FieldError::Invalid(self.required_message.clone()))
		}
	}
}
