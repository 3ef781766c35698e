use formling_http::{Handler, Request, Response, Result};
use std::sync::Arc;

/// Route definition
///
/// Composes a path with a handler; the optional name documents the route in
/// logs.
#[derive(Clone)]
pub struct Route {
	pub path: String,
	handler: Arc<dyn Handler>,
	pub name: Option<String>,
}

impl Route {
	pub fn new(path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
		Self {
			path: path.into(),
			handler,
			name: None,
		}
	}

	/// Create a route from a concrete handler without wrapping it in `Arc`
	pub fn from_handler<H>(path: impl Into<String>, handler: H) -> Self
	where
		H: Handler + 'static,
	{
		Self::new(path, Arc::new(handler))
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn handler(&self) -> &Arc<dyn Handler> {
		&self.handler
	}
}

/// Shorthand for `Route::new`
///
/// # Examples
///
/// ```
/// use formling_urls::path;
/// use formling_http::{Handler, Request, Response, Result};
/// use std::sync::Arc;
///
/// # use async_trait::async_trait;
/// # struct DummyHandler;
/// # #[async_trait]
/// # impl Handler for DummyHandler {
/// #     async fn handle(&self, _req: Request) -> Result<Response> {
/// #         Ok(Response::ok())
/// #     }
/// # }
/// let route = path("/detail", Arc::new(DummyHandler)).with_name("detail");
/// assert_eq!(route.path, "/detail");
/// ```
pub fn path(path: impl Into<String>, handler: Arc<dyn Handler>) -> Route {
	Route::new(path, handler)
}

/// Default router: ordered routes, exact path match, 404 fallback
pub struct DefaultRouter {
	routes: Vec<Route>,
}

impl DefaultRouter {
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	pub fn add_route(&mut self, route: Route) {
		self.routes.push(route);
	}

	pub fn get_routes(&self) -> &[Route] {
		&self.routes
	}

	/// Dispatch a request to the first route whose path matches exactly
	///
	/// Unknown paths answer 404; method handling is the matched handler's
	/// concern.
	pub async fn route(&self, request: Request) -> Result<Response> {
		let path = request.path().to_string();
		match self.routes.iter().find(|r| r.path == path) {
			Some(route) => {
				tracing::debug!(
					path = %path,
					method = %request.method,
					route = route.name.as_deref().unwrap_or("<unnamed>"),
					"dispatching request"
				);
				route.handler.handle(request).await
			}
			None => {
				tracing::debug!(path = %path, "no route matched");
				Ok(Response::not_found().with_body("not found"))
			}
		}
	}
}

impl Default for DefaultRouter {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use hyper::{Method, StatusCode};

	struct EchoPathHandler;

	#[async_trait]
	impl Handler for EchoPathHandler {
		async fn handle(&self, req: Request) -> Result<Response> {
			Ok(Response::ok().with_body(req.path().to_string()))
		}
	}

	#[tokio::test]
	async fn test_exact_path_dispatch() {
		let mut router = DefaultRouter::new();
		router.add_route(Route::from_handler("/", EchoPathHandler).with_name("landing"));
		router.add_route(Route::from_handler("/detail", EchoPathHandler).with_name("detail"));

		let request = Request::builder().method(Method::GET).uri("/detail").build();
		let response = router.route(request).await.unwrap();

		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, bytes::Bytes::from("/detail"));
	}

	#[tokio::test]
	async fn test_unknown_path_is_404() {
		let mut router = DefaultRouter::new();
		router.add_route(Route::from_handler("/", EchoPathHandler));

		let request = Request::builder().method(Method::GET).uri("/missing").build();
		let response = router.route(request).await.unwrap();

		assert_eq!(response.status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_query_string_does_not_affect_match() {
		let mut router = DefaultRouter::new();
		router.add_route(Route::from_handler("/detail", EchoPathHandler));

		let request = Request::builder()
			.method(Method::GET)
			.uri("/detail?from=landing")
			.build();
		let response = router.route(request).await.unwrap();

		assert_eq!(response.status, StatusCode::OK);
	}
}
