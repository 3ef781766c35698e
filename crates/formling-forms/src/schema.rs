//! Form schema: the ordered field list and the validate entry point

use crate::field::FormField;
use crate::values::{FieldErrors, FormValues, RawForm};

/// Outcome of validating one raw submission
///
/// Exactly one variant is populated: normalized values on success, the
/// field-keyed error mapping on failure. A field appears in the mapping
/// only if at least one of its constraints failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
	Valid(FormValues),
	Invalid(FieldErrors),
}

impl ValidationResult {
	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid(_))
	}

	pub fn values(&self) -> Option<&FormValues> {
		match self {
			Self::Valid(values) => Some(values),
			Self::Invalid(_) => None,
		}
	}

	pub fn errors(&self) -> Option<&FieldErrors> {
		match self {
			Self::Valid(_) => None,
			Self::Invalid(errors) => Some(errors),
		}
	}
}

/// Declares the accepted shape of submitted data
///
/// Validation evaluates every field independently and accumulates all
/// failing fields into one `Invalid` result, so the UI can show every
/// field's error at once.
pub struct FormSchema {
	fields: Vec<Box<dyn FormField>>,
}

impl FormSchema {
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Builder-style `add_field`
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{FormSchema, TextField};
	///
	/// let schema = FormSchema::new().with_field(TextField::new("user"));
	/// assert_eq!(schema.fields().len(), 1);
	/// ```
	pub fn with_field(mut self, field: impl FormField + 'static) -> Self {
		self.fields.push(Box::new(field));
		self
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	/// The factory-default record: every declared field present, unset
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::{ChoiceField, FormSchema, TextField};
	/// use serde_json::{Value, json};
	///
	/// let schema = FormSchema::new()
	///     .with_field(TextField::new("user"))
	///     .with_field(ChoiceField::new("gender", vec![("male", "Male")]));
	///
	/// let defaults = schema.defaults();
	/// assert_eq!(defaults.get("user"), Some(&Value::Null));
	/// assert_eq!(defaults.get("gender"), Some(&json!("")));
	/// ```
	pub fn defaults(&self) -> FormValues {
		self.fields
			.iter()
			.map(|f| (f.name().to_string(), f.default_value()))
			.collect()
	}

	/// Validate a raw submission
	///
	/// Every schema-declared key is present in the `Valid` values, even
	/// when unset; tokens under keys the schema does not declare are
	/// ignored.
	pub fn validate(&self, raw: &RawForm) -> ValidationResult {
		let mut values = FormValues::new();
		let mut errors = FieldErrors::new();

		for field in &self.fields {
			let tokens = raw.tokens(field.name());
			match field.clean(&tokens) {
				Ok(cleaned) => values.insert(field.name(), cleaned),
				Err(e) => errors
					.entry(field.name().to_string())
					.or_default()
					.push(e.to_string()),
			}
		}

		if errors.is_empty() {
			ValidationResult::Valid(values)
		} else {
			ValidationResult::Invalid(errors)
		}
	}
}

impl Default for FormSchema {
	fn default() -> Self {
		Self::new()
	}
}
