//! HTTP primitives for formling
//!
//! A deliberately small request/response pair over `hyper` types, plus the
//! `Handler` trait every route implements. Form-encoded bodies decode into
//! key/value pairs with repeated keys preserved, which is how the
//! multi-choice field arrives on the wire.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use handler::Handler;
pub use request::Request;
pub use response::Response;
