//! Numeric field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use serde_json::Value;

/// Optional numeric input with an optional minimum-value constraint
///
/// Integer tokens stay integers (`"25"` cleans to `25`, not `25.0`) so a
/// cleaned value re-encodes to the same token it came from. The minimum is
/// checked on the numeric value regardless of representation.
#[derive(Debug, Clone)]
pub struct NumberField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub min_value: Option<f64>,
	pub required_message: String,
	pub invalid_message: String,
	pub min_message: String,
	widget: Widget,
}

impl NumberField {
	/// Create a new optional NumberField
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{FormField, NumberField};
	///
	/// let field = NumberField::new("age");
	/// assert_eq!(field.name(), "age");
	/// assert_eq!(field.min_value, None);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			min_value: None,
			required_message: "value required".to_string(),
			invalid_message: "enter a number".to_string(),
			min_message: "value too small".to_string(),
			widget: Widget::NumberInput,
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

	/// Declare a minimum value and the message reported below it
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::NumberField;
	///
	/// let field = NumberField::new("age").with_min(18.0, "must be at least 18");
	/// assert_eq!(field.min_value, Some(18.0));
	/// ```
	pub fn with_min(mut self, min: f64, message: impl Into<String>) -> Self {
		self.min_value = Some(min);
		self.min_message = message.into();
		self
	}

	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = message.into();
		self
	}
}

impl FormField for NumberField {
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
		let token = match tokens.iter().find(|t| !t.is_empty()) {
			Some(t) => t.trim(),
			None if self.required => {
				return Err(FieldError::Required(self.required_message.clone()));
			}
			None => return Ok(Value::Null),
		};

		let value = if let Ok(i) = token.parse::<i64>() {
			serde_json::json!(i)
		} else if let Ok(f) = token.parse::<f64>() {
			if !f.is_finite() {
				return Err(FieldError::Invalid(self.invalid_message.clone()));
			}
			serde_json::json!(f)
		} else {
			return Err(FieldError::Invalid(self.invalid_message.clone()));
		};

		if let Some(min) = self.min_value
			&& value.as_f64().is_some_and(|n| n < min)
		{
			return Err(FieldError::Validation(self.min_message.clone()));
		}

		Ok(value)
	}
}
