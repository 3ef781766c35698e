//! The abstract server boundary behind the form

use async_trait::async_trait;
use formling_forms::{FieldErrors, FormSchema, FormValues, RawForm, ValidationResult};
use std::sync::Arc;
use std::time::Duration;

/// Transport-level failure of a backend operation
///
/// Field-constraint violations are not errors at this level; they come back
/// as a `SubmitOutcome::Rejected`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
	#[error("backend unavailable: {0}")]
	Unavailable(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// What a completed submit asks the UI to do
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// Validation passed; navigate to the destination (303 semantics)
	Redirect(String),
	/// Validation failed; re-render with the field-keyed error mapping
	Rejected(FieldErrors),
}

/// The two operations a form needs from its server
///
/// # Examples
///
/// ```
/// use formling_forms::{FormSchema, RawForm, TextField};
/// use formling_session::{FormBackend, SimulatedBackend, SubmitOutcome};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() {
/// let schema = Arc::new(FormSchema::new().with_field(TextField::new("user")));
/// let backend = SimulatedBackend::new(schema).with_latency(Duration::ZERO);
///
/// let defaults = backend.fetch_defaults().await.unwrap();
/// assert!(defaults.is_unset("user"));
///
/// let outcome = backend.submit(RawForm::new().with("user", "Kim")).await.unwrap();
/// assert_eq!(outcome, SubmitOutcome::Redirect("/".to_string()));
/// # }
/// ```
#[async_trait]
pub trait FormBackend: Send + Sync {
	/// Fetch the factory-default values the form is seeded with
	async fn fetch_defaults(&self) -> BackendResult<FormValues>;

	/// Validate a raw submission and decide redirect or re-render
	async fn submit(&self, raw: RawForm) -> BackendResult<SubmitOutcome>;
}

/// In-process backend that simulates server latency
///
/// Sleeps for the configured latency, then delegates to the schema. It
/// never fails; transport failure is exercised with test doubles.
pub struct SimulatedBackend {
	schema: Arc<FormSchema>,
	latency: Duration,
	destination: String,
}

impl SimulatedBackend {
	pub fn new(schema: Arc<FormSchema>) -> Self {
		Self {
			schema,
			latency: Duration::from_millis(150),
			destination: "/".to_string(),
		}
	}

	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	/// Destination of the success redirect (defaults to the landing page)
	pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
		self.destination = destination.into();
		self
	}
}

#[async_trait]
impl FormBackend for SimulatedBackend {
	async fn fetch_defaults(&self) -> BackendResult<FormValues> {
		tracing::debug!(latency_ms = self.latency.as_millis() as u64, "serving defaults");
		tokio::time::sleep(self.latency).await;
		Ok(self.schema.defaults())
	}

	async fn submit(&self, raw: RawForm) -> BackendResult<SubmitOutcome> {
		tracing::debug!(latency_ms = self.latency.as_millis() as u64, "receiving submission");
		tokio::time::sleep(self.latency).await;
		match self.schema.validate(&raw) {
			ValidationResult::Valid(_) => Ok(SubmitOutcome::Redirect(self.destination.clone())),
			ValidationResult::Invalid(errors) => Ok(SubmitOutcome::Rejected(errors)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use formling_forms::ChoiceField;

	fn schema() -> Arc<FormSchema> {
		Arc::new(FormSchema::new().with_field(ChoiceField::new("gender", vec![("male", "Male")])))
	}

	#[tokio::test]
	async fn test_submit_rejects_with_field_errors() {
		let backend = SimulatedBackend::new(schema()).with_latency(Duration::ZERO);
		let outcome = backend.submit(RawForm::new()).await.unwrap();

		let SubmitOutcome::Rejected(errors) = outcome else {
			panic!("expected rejection");
		};
		assert_eq!(errors.get("gender"), Some(&vec!["please select".to_string()]));
	}

	#[tokio::test]
	async fn test_submit_redirects_to_destination() {
		let backend = SimulatedBackend::new(schema())
			.with_latency(Duration::ZERO)
			.with_destination("/home");
		let outcome = backend
			.submit(RawForm::new().with("gender", "male"))
			.await
			.unwrap();

		assert_eq!(outcome, SubmitOutcome::Redirect("/home".to_string()));
	}
}
