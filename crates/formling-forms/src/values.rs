//! Value types flowing between the HTTP surface, the validator, and the
//! session controller

use serde_json::Value;
use std::collections::BTreeMap;

/// Per-field error messages
///
/// Iteration order across fields is not significant; insertion order within
/// one field's message list is.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A raw form submission: field name to one-or-many string tokens
///
/// Pairs are kept in submission order so repeated keys (the multi-choice
/// encoding) survive intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForm {
	entries: Vec<(String, String)>,
}

impl RawForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build from decoded key/value pairs
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::RawForm;
	///
	/// let raw = RawForm::from_pairs(vec![
	///     ("agree".to_string(), "1".to_string()),
	///     ("agree".to_string(), "2".to_string()),
	/// ]);
	/// assert_eq!(raw.tokens("agree"), vec!["1", "2"]);
	/// ```
	pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
		Self {
			entries: pairs.into_iter().collect(),
		}
	}

	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries.push((name.into(), value.into()));
	}

	/// Builder-style `append`, convenient in tests
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(name, value);
		self
	}

	/// All tokens submitted under `name`, in submission order
	pub fn tokens(&self, name: &str) -> Vec<&str> {
		self.entries
			.iter()
			.filter(|(k, _)| k == name)
			.map(|(_, v)| v.as_str())
			.collect()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|(k, _)| k == name)
	}

	pub fn entries(&self) -> &[(String, String)] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Collapse into a name -> tokens map (for render-state payloads)
	pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
		let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
		for (k, v) in &self.entries {
			map.entry(k.clone()).or_default().push(v.clone());
		}
		map
	}
}

/// Typed, normalized form values
///
/// Invariant: every field declared by the schema is present, even when its
/// value is unset (`Null` for optional fields, `""` for enum fields, an
/// empty array for the multi-choice field).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, Value>);

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, value: Value) {
		self.0.insert(name.into(), value);
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// True when the field is absent, `Null`, the `""` sentinel, or an
	/// empty selection set
	pub fn is_unset(&self, name: &str) -> bool {
		match self.0.get(name) {
			None | Some(Value::Null) => true,
			Some(Value::String(s)) => s.is_empty(),
			Some(Value::Array(a)) => a.is_empty(),
			Some(_) => false,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Re-encode as a raw submission
	///
	/// Unset values contribute no pairs; validating the result against the
	/// same schema yields the same values again.
	///
	/// # Examples
	///
	/// ```
	/// use formling_forms::FormValues;
	/// use serde_json::json;
	///
	/// let mut values = FormValues::new();
	/// values.insert("user", json!("Kim"));
	/// values.insert("age", json!(25));
	/// values.insert("agree", json!(["1", "2"]));
	/// values.insert("country", json!(""));
	///
	/// let raw = values.to_raw();
	/// assert_eq!(raw.tokens("user"), vec!["Kim"]);
	/// assert_eq!(raw.tokens("age"), vec!["25"]);
	/// assert_eq!(raw.tokens("agree"), vec!["1", "2"]);
	/// assert!(!raw.contains("country"));
	/// ```
	pub fn to_raw(&self) -> RawForm {
		let mut raw = RawForm::new();
		for (name, value) in &self.0 {
			match value {
				Value::Null => {}
				Value::String(s) => {
					if !s.is_empty() {
						raw.append(name.clone(), s.clone());
					}
				}
				Value::Number(n) => raw.append(name.clone(), n.to_string()),
				Value::Bool(b) => raw.append(name.clone(), b.to_string()),
				Value::Array(items) => {
					for item in items {
						if let Some(s) = item.as_str() {
							raw.append(name.clone(), s.to_string());
						}
					}
				}
				Value::Object(_) => {}
			}
		}
		raw
	}
}

impl FromIterator<(String, Value)> for FormValues {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_raw_form_repeated_keys() {
		let raw = RawForm::new()
			.with("gender", "male")
			.with("agree", "1")
			.with("agree", "2");

		assert_eq!(raw.tokens("gender"), vec!["male"]);
		assert_eq!(raw.tokens("agree"), vec!["1", "2"]);
		assert!(raw.tokens("country").is_empty());
		assert!(!raw.contains("country"));
	}

	#[test]
	fn test_form_values_unset() {
		let mut values = FormValues::new();
		values.insert("user", Value::Null);
		values.insert("gender", json!(""));
		values.insert("agree", json!([]));
		values.insert("age", json!(25));

		assert!(values.is_unset("user"));
		assert!(values.is_unset("gender"));
		assert!(values.is_unset("agree"));
		assert!(values.is_unset("missing"));
		assert!(!values.is_unset("age"));
	}

	#[test]
	fn test_to_raw_skips_unset() {
		let mut values = FormValues::new();
		values.insert("user", Value::Null);
		values.insert("gender", json!("male"));
		values.insert("agree", json!(["1", "2"]));

		let raw = values.to_raw();
		assert!(!raw.contains("user"));
		assert_eq!(raw.tokens("gender"), vec!["male"]);
		assert_eq!(raw.tokens("agree"), vec!["1", "2"]);
	}
}
