//! # formling
//!
//! A small form demo server. One landing page, one form page: the form
//! page serves factory defaults on GET, validates a form-encoded POST
//! against a declared schema, and answers 303 See Other on success or a
//! field-keyed error mapping on failure. A reset endpoint restores the
//! defaults and bumps the session token so a stale in-flight submit cannot
//! clobber the new session.
//!
//! The pieces compose left to right: `formling_forms` declares and
//! validates, `formling_session` runs the load/submit/reset lifecycle
//! behind an abstract backend, `formling_urls` and `formling_http` carry
//! the two routes, and this crate wires them into a running demo.

pub use formling_forms as forms;
pub use formling_http as http;
pub use formling_session as session;
pub use formling_urls as urls;

pub mod handlers;
pub mod render;
pub mod schema;
pub mod server;
pub mod settings;
