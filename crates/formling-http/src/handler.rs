use crate::{Request, Response, Result};
use async_trait::async_trait;

/// The seam every route implements
///
/// # Examples
///
/// ```
/// use formling_http::{Handler, Request, Response, Result};
/// use async_trait::async_trait;
///
/// struct PingHandler;
///
/// #[async_trait]
/// impl Handler for PingHandler {
///     async fn handle(&self, _req: Request) -> Result<Response> {
///         Ok(Response::ok().with_body("pong"))
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}
