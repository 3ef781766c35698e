//! Multi-choice set field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use serde_json::Value;

/// A set of option tokens collected from repeated occurrences of the key
///
/// Only the minimum-cardinality constraint is enforced; individual token
/// membership is not checked, matching the agreement-checkbox behavior this
/// field models. Duplicate tokens count once.
#[derive(Debug, Clone)]
pub struct MultiChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub choices: Vec<(String, String)>,
	pub min_selected: usize,
	pub min_message: String,
	widget: Widget,
}

impl MultiChoiceField {
	/// Create a new MultiChoiceField with no minimum
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{FormField, MultiChoiceField};
	///
	/// let field = MultiChoiceField::new("agree", vec![("1", "Terms"), ("2", "Privacy")]);
	/// assert_eq!(field.name(), "agree");
	/// assert_eq!(field.min_selected, 0);
	/// ```
	pub fn new(name: impl Into<String>, choices: Vec<(&str, &str)>) -> Self {
		let choices: Vec<(String, String)> = choices
			.into_iter()
			.map(|(v, l)| (v.to_string(), l.to_string()))
			.collect();
		Self {
			name: name.into(),
			label: None,
			widget: Widget::CheckboxMultiple {
				choices: choices.clone(),
			},
			choices,
			min_selected: 0,
			min_message: "please select all".to_string(),
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Require at least `min` distinct tokens, reporting `message` below it
	pub fn with_min_selected(mut self, min: usize, message: impl Into<String>) -> Self {
		self.min_selected = min;
		self.min_message = message.into();
		self
	}
}

impl FormField for MultiChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.min_selected > 0
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn default_value(&self) -> Value {
		Value::Array(Vec::new())
	}

	fn clean(&self, tokens: &[&str]) -> FieldResult<Value> {
		let mut selected: Vec<String> = Vec::new();
		for token in tokens {
			if !token.is_empty() && !selected.iter().any(|s| s == token) {
				selected.push((*token).to_string());
			}
		}

		if selected.len() < self.min_selected {
			return Err(FieldError::Validation(self.min_message.clone()));
		}

		Ok(Value::Array(selected.into_iter().map(Value::String).collect()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn agree_field() -> MultiChoiceField {
		MultiChoiceField::new("agree", vec![("1", "Terms"), ("2", "Privacy")])
			.with_min_selected(2, "please select all")
	}

	#[rstest]
	#[case(&["1", "2"], Ok(json!(["1", "2"])))]
	#[case(&["2", "1"], Ok(json!(["2", "1"])))]
	#[case(&["1"], Err(FieldError::Validation("please select all".to_string())))]
	#[case(&[], Err(FieldError::Validation("please select all".to_string())))]
	fn test_minimum_cardinality(#[case] tokens: &[&str], #[case] expected: FieldResult<Value>) {
		assert_eq!(agree_field().clean(tokens), expected);
	}

	#[test]
	fn test_duplicates_count_once() {
		let field = agree_field();
		assert_eq!(
			field.clean(&["1", "1"]),
			Err(FieldError::Validation("please select all".to_string()))
		);
	}

	#[test]
	fn test_no_minimum_accepts_empty() {
		let field = MultiChoiceField::new("tags", vec![("a", "A")]);
		assert_eq!(field.clean(&[]).unwrap(), json!([]));
	}
}
