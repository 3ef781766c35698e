//! Form session lifecycle for formling
//!
//! One `FormController` per form instance mediates between raw submitted
//! data and the validator through an abstract `FormBackend`. The backend is
//! the stand-in for a real network boundary: swapping in actual I/O touches
//! neither the controller nor the validator.
//!
//! The session carries a monotonically increasing token. `reset` bumps it
//! before re-fetching defaults, so a submit that completes under an older
//! token is discarded instead of being applied to the new session (logical
//! cancellation; the in-flight task itself is not cancelled).

pub mod backend;
pub mod controller;
pub mod session;

pub use backend::{BackendError, BackendResult, FormBackend, SimulatedBackend, SubmitOutcome};
pub use controller::{FormController, SubmitAction};
pub use session::{FormSession, Phase, RenderState};
