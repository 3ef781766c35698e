//! The route handlers wiring the controller to the HTTP surface

use crate::render;
use async_trait::async_trait;
use formling_forms::{FormSchema, RawForm};
use formling_http::{Handler, Request, Response, Result};
use formling_session::{FormController, SubmitAction};
use formling_urls::{DefaultRouter, Route};
use hyper::Method;
use std::sync::Arc;

/// True when the client asked for the JSON render state instead of HTML
fn wants_json(request: &Request) -> bool {
	request
		.headers
		.get(hyper::header::ACCEPT)
		.and_then(|v| v.to_str().ok())
		.is_some_and(|accept| accept.contains("application/json"))
}

/// Landing page: the destination of a successful submit
pub struct LandingHandler;

#[async_trait]
impl Handler for LandingHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		if request.method != Method::GET {
			return Ok(Response::method_not_allowed());
		}
		Ok(Response::ok().with_html(render::landing_page()))
	}
}

/// The form page: loader on GET, action on POST
pub struct DetailHandler {
	schema: Arc<FormSchema>,
	controller: Arc<FormController>,
}

impl DetailHandler {
	pub fn new(schema: Arc<FormSchema>, controller: Arc<FormController>) -> Self {
		Self { schema, controller }
	}

	async fn load(&self, request: &Request) -> Result<Response> {
		let state = self.controller.load().await;
		if wants_json(request) {
			return Response::ok().with_json(&state);
		}
		Ok(Response::ok().with_html(render::detail_page(&self.schema, &state)))
	}

	async fn submit(&self, request: &Request) -> Result<Response> {
		let pairs = match request.form_pairs() {
			Ok(pairs) => pairs,
			Err(e) => {
				tracing::warn!(error = %e, "unreadable form body");
				return Ok(Response::bad_request().with_body(e.to_string()));
			}
		};
		let raw = RawForm::from_pairs(pairs);

		match self.controller.submit(raw).await {
			SubmitAction::Navigate(destination) => Ok(Response::see_other(destination)),
			SubmitAction::Rerender(state) => {
				if let Some(failure) = &state.failure {
					return Response::service_unavailable()
						.with_json(&serde_json::json!({ "failure": failure }));
				}
				if wants_json(request) {
					return Response::unprocessable()
						.with_json(&serde_json::json!({ "errors": state.errors }));
				}
				Ok(Response::ok().with_html(render::detail_page(&self.schema, &state)))
			}
			SubmitAction::Stale => Ok(Response::conflict().with_body("stale submit discarded")),
		}
	}
}

#[async_trait]
impl Handler for DetailHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		match request.method {
			Method::GET => self.load(&request).await,
			Method::POST => self.submit(&request).await,
			_ => Ok(Response::method_not_allowed()),
		}
	}
}

/// Reset-and-revalidate endpoint
pub struct ResetHandler {
	schema: Arc<FormSchema>,
	controller: Arc<FormController>,
}

impl ResetHandler {
	pub fn new(schema: Arc<FormSchema>, controller: Arc<FormController>) -> Self {
		Self { schema, controller }
	}
}

#[async_trait]
impl Handler for ResetHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		if request.method != Method::POST {
			return Ok(Response::method_not_allowed());
		}
		let state = self.controller.reset().await;
		if wants_json(&request) {
			return Response::ok().with_json(&state);
		}
		Ok(Response::ok().with_html(render::detail_page(&self.schema, &state)))
	}
}

/// Assemble the demo route table
pub fn build_router(schema: Arc<FormSchema>, controller: Arc<FormController>) -> DefaultRouter {
	let mut router = DefaultRouter::new();
	router.add_route(Route::from_handler("/", LandingHandler).with_name("landing"));
	router.add_route(
		Route::from_handler(
			"/detail",
			DetailHandler::new(schema.clone(), controller.clone()),
		)
		.with_name("detail"),
	);
	router.add_route(
		Route::from_handler("/detail/reset", ResetHandler::new(schema, controller))
			.with_name("detail-reset"),
	);
	router
}
