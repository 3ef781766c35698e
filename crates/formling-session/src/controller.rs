//! The interaction controller for one form instance

use crate::backend::{FormBackend, SubmitOutcome};
use crate::session::{FormSession, Phase, RenderState};
use formling_forms::{FormValues, RawForm};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the caller of `submit` should do next
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
	/// Validation passed; issue a see-other redirect to the destination
	Navigate(String),
	/// Re-render with the enclosed state (field errors or a failure banner)
	Rerender(RenderState),
	/// The session token changed while the submit was in flight; the result
	/// was discarded and no state was touched
	Stale,
}

/// Orchestrates the load / submit / reset lifecycle of one form instance
///
/// The session record is guarded by an async mutex, but the lock is never
/// held across a backend await: each operation captures the session token
/// before the latency point and re-checks it after, so a reset that raced a
/// slow submit wins for display purposes.
pub struct FormController {
	backend: Arc<dyn FormBackend>,
	session: Mutex<FormSession>,
}

impl FormController {
	pub fn new(backend: Arc<dyn FormBackend>) -> Self {
		Self {
			backend,
			session: Mutex::new(FormSession::new(FormValues::new())),
		}
	}

	/// Snapshot of the current session
	pub async fn render_state(&self) -> RenderState {
		self.session.lock().await.render_state()
	}

	/// Page-load lifecycle: fetch defaults and seed the session
	///
	/// `Idle -> LoadingDefaults -> Idle`; on backend failure the session
	/// enters `Failed` with a banner message and a later `load` retries.
	pub async fn load(&self) -> RenderState {
		let token = {
			let mut session = self.session.lock().await;
			session.phase = Phase::LoadingDefaults;
			session.token
		};
		tracing::debug!(token, "loading defaults");

		match self.backend.fetch_defaults().await {
			Ok(defaults) => {
				let mut session = self.session.lock().await;
				if session.token == token {
					session.values = defaults;
					session.failure = None;
					session.phase = Phase::Idle;
				}
				session.render_state()
			}
			Err(e) => {
				tracing::warn!(token, error = %e, "default fetch failed");
				let mut session = self.session.lock().await;
				if session.token == token {
					session.failure = Some(e.to_string());
					session.phase = Phase::Failed;
				}
				session.render_state()
			}
		}
	}

	/// Submit raw form data through the backend
	///
	/// On rejection the session keeps the raw tokens exactly as entered so
	/// the re-render shows what the user typed; on success no local state
	/// is needed beyond the navigation signal.
	pub async fn submit(&self, raw: RawForm) -> SubmitAction {
		let token = {
			let mut session = self.session.lock().await;
			if !matches!(session.phase, Phase::Idle | Phase::Failed) {
				tracing::warn!(phase = ?session.phase, "submit while an operation is in flight");
			}
			session.phase = Phase::Submitting;
			session.failure = None;
			session.token
		};
		tracing::info!(token, "submitting form");

		let result = self.backend.submit(raw.clone()).await;

		let mut session = self.session.lock().await;
		if session.token != token {
			tracing::info!(
				stale_token = token,
				current_token = session.token,
				"discarding stale submit result"
			);
			return SubmitAction::Stale;
		}

		match result {
			Ok(SubmitOutcome::Redirect(destination)) => {
				session.phase = Phase::Idle;
				session.errors = None;
				session.entered = None;
				tracing::info!(token, destination = %destination, "submit accepted");
				SubmitAction::Navigate(destination)
			}
			Ok(SubmitOutcome::Rejected(errors)) => {
				tracing::info!(token, fields = errors.len(), "submit rejected");
				session.phase = Phase::Idle;
				session.errors = Some(errors);
				session.entered = Some(raw);
				SubmitAction::Rerender(session.render_state())
			}
			Err(e) => {
				tracing::warn!(token, error = %e, "submit transport failed");
				session.phase = Phase::Failed;
				session.failure = Some(e.to_string());
				SubmitAction::Rerender(session.render_state())
			}
		}
	}

	/// Reset-and-revalidate: bump the token, then restore factory defaults
	///
	/// The token increments before the latency point, so any in-flight
	/// submit's eventual result is already invalidated when this returns.
	pub async fn reset(&self) -> RenderState {
		let token = {
			let mut session = self.session.lock().await;
			session.token += 1;
			session.phase = Phase::Revalidating;
			session.token
		};
		tracing::info!(token, "resetting session");

		match self.backend.fetch_defaults().await {
			Ok(defaults) => {
				let mut session = self.session.lock().await;
				if session.token == token {
					session.values = defaults;
					session.errors = None;
					session.entered = None;
					session.failure = None;
					session.phase = Phase::Idle;
				}
				session.render_state()
			}
			Err(e) => {
				tracing::warn!(token, error = %e, "reset fetch failed");
				let mut session = self.session.lock().await;
				if session.token == token {
					session.failure = Some(e.to_string());
					session.phase = Phase::Failed;
				}
				session.render_state()
			}
		}
	}
}
