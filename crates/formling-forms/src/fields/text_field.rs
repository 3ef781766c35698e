//! Free-text field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use serde_json::Value;

/// Optional free-text input
///
/// An empty token is treated the same as an absent field: the cleaned value
/// of an unfilled optional text field is `Null`, never `""`.
#[derive(Debug, Clone)]
pub struct TextField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub required_message: String,
	widget: Widget,
}

impl TextField {
	/// Create a new optional TextField
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{FormField, TextField};
	///
	/// let field = TextField::new("user");
	/// assert_eq!(field.name(), "user");
	/// assert!(!FormField::required(&field));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			required_message: "value required".to_string(),
			widget: Widget::TextInput,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = message.into();
		self
	}
}

impl FormField for TextField {
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
		Value::Null
	}

	fn clean(&self, tokens: &[&str]) -> FieldResult<Value> {
		match tokens.iter().find(|t| !t.is_empty()) {
			Some(token) => Ok(Value::String((*token).to_string())),
			None if self.required => Err(FieldError::Required(self.required_message.clone())),
			None => Ok(Value::Null),
		}
	}
}
