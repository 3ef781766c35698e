//! Route registration and dispatch for formling
//!
//! Two static destinations exist in this application, so the router is a
//! plain ordered route list matched on exact path. Handlers dispatch on
//! method themselves and answer 405 for methods they do not support.

pub mod routers;

pub use routers::{DefaultRouter, Route, path};
