//! HTTP/1.1 server loop
//!
//! Accepts connections, reads each request body into memory, hands the
//! request to the router and writes the response back.

use bytes::Bytes;
use formling_http::{Request, Response};
use formling_urls::DefaultRouter;
use http_body_util::{BodyExt, Full};
use hyper::StatusCode;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Maximum request body size (1 MB); form posts are tiny
const MAX_BODY_SIZE: u64 = 1024 * 1024;

pub struct Server {
	router: Arc<DefaultRouter>,
}

impl Server {
	pub fn new(router: DefaultRouter) -> Self {
		Self {
			router: Arc::new(router),
		}
	}

	/// Bind the address and serve until an accept error occurs
	pub async fn listen(self, addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
		let listener = TcpListener::bind(addr).await?;
		tracing::info!(%addr, "listening");

		loop {
			let (stream, peer) = listener.accept().await?;
			let router = self.router.clone();

			tokio::task::spawn(async move {
				if let Err(err) = handle_connection(stream, router).await {
					tracing::warn!(%peer, error = %err, "connection error");
				}
			});
		}
	}
}

async fn handle_connection(
	stream: TcpStream,
	router: Arc<DefaultRouter>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let io = TokioIo::new(stream);
	let service = RouterService { router };

	http1::Builder::new().serve_connection(io, service).await?;

	Ok(())
}

/// Service implementation for hyper
struct RouterService {
	router: Arc<DefaultRouter>,
}

impl Service<hyper::Request<Incoming>> for RouterService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = Box<dyn std::error::Error + Send + Sync>;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let router = self.router.clone();

		Box::pin(async move {
			if let Some(content_length) = req.headers().get(hyper::header::CONTENT_LENGTH)
				&& let Ok(len_str) = content_length.to_str()
				&& let Ok(len) = len_str.parse::<u64>()
				&& len > MAX_BODY_SIZE
			{
				return to_hyper(
					Response::new(StatusCode::PAYLOAD_TOO_LARGE).with_body("request body too large"),
				);
			}

			let (parts, body) = req.into_parts();

			let body_bytes = match http_body_util::Limited::new(body, MAX_BODY_SIZE as usize)
				.collect()
				.await
			{
				Ok(collected) => collected.to_bytes(),
				Err(_) => {
					return to_hyper(
						Response::new(StatusCode::PAYLOAD_TOO_LARGE)
							.with_body("request body too large"),
					);
				}
			};

			let request = Request::builder()
				.method(parts.method)
				.uri(&parts.uri.to_string())
				.headers(parts.headers)
				.body(body_bytes)
				.build();

			let response = router.route(request).await.unwrap_or_else(|err| {
				tracing::error!(error = %err, "handler failed");
				Response::internal_server_error()
			});

			to_hyper(response)
		})
	}
}

fn to_hyper(
	response: Response,
) -> Result<hyper::Response<Full<Bytes>>, Box<dyn std::error::Error + Send + Sync>> {
	let mut out = hyper::Response::builder().status(response.status);
	for (key, value) in response.headers.iter() {
		out = out.header(key, value);
	}
	Ok(out.body(Full::new(response.body))?)
}
