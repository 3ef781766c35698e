//! Mutable per-form UI-facing state

use formling_forms::{FieldErrors, FormValues, RawForm};
use std::collections::BTreeMap;

/// Observable lifecycle phase of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
	Idle,
	LoadingDefaults,
	Submitting,
	Revalidating,
	/// A backend operation failed; the session keeps its values and the
	/// failure message for an error banner, and retry is permitted
	Failed,
}

/// The mutable state behind one rendered form
///
/// Created when the page loads (values seeded from defaults), mutated on
/// each submit attempt, replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct FormSession {
	pub values: FormValues,
	/// Error mapping from the most recent rejected submit
	pub errors: Option<FieldErrors>,
	/// Raw tokens exactly as entered on the last rejected submit, so
	/// re-display preserves what the user typed
	pub entered: Option<RawForm>,
	pub failure: Option<String>,
	pub phase: Phase,
	/// Monotonically increasing; a bump forces a full re-render and
	/// invalidates in-flight results captured under the old value
	pub token: u64,
}

impl FormSession {
	pub fn new(values: FormValues) -> Self {
		Self {
			values,
			errors: None,
			entered: None,
			failure: None,
			phase: Phase::Idle,
			token: 1,
		}
	}

	/// Snapshot served to the client as the render state
	pub fn render_state(&self) -> RenderState {
		RenderState {
			token: self.token,
			phase: self.phase,
			values: self.values.clone(),
			errors: self.errors.clone(),
			entered: self.entered.as_ref().map(|raw| raw.to_map()),
			failure: self.failure.clone(),
		}
	}
}

/// Serializable snapshot of a session
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RenderState {
	pub token: u64,
	pub phase: Phase,
	pub values: FormValues,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub errors: Option<FieldErrors>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub entered: Option<BTreeMap<String, Vec<String>>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub failure: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_render_state_serialization() {
		let mut values = FormValues::new();
		values.insert("gender", json!(""));
		let session = FormSession::new(values);

		let state = serde_json::to_value(session.render_state()).unwrap();
		assert_eq!(state["token"], json!(1));
		assert_eq!(state["phase"], json!("idle"));
		assert_eq!(state["values"], json!({"gender": ""}));
		assert!(state.get("errors").is_none());
	}
}
