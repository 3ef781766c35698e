use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP response representation
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use formling_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	pub fn conflict() -> Self {
		Self::new(StatusCode::CONFLICT)
	}

	pub fn service_unavailable() -> Self {
		Self::new(StatusCode::SERVICE_UNAVAILABLE)
	}

	pub fn unprocessable() -> Self {
		Self::new(StatusCode::UNPROCESSABLE_ENTITY)
	}

	/// Create a Response with HTTP 303 See Other
	///
	/// The browser re-requests the destination via GET, which is the
	/// post/redirect/get behavior a successful form submit relies on.
	///
	/// # Examples
	///
	/// ```
	/// use formling_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::see_other("/");
	/// assert_eq!(response.status, StatusCode::SEE_OTHER);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/"
	/// );
	/// ```
	pub fn see_other(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::SEE_OTHER).with_location(location.as_ref())
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Add a Location header to the response
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = hyper::header::HeaderValue::from_str(location) {
			self.headers.insert(hyper::header::LOCATION, value);
		}
		self
	}

	/// Set the response body to JSON and add the Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use formling_http::Response;
	/// use serde_json::json;
	///
	/// let data = json!({"errors": {"gender": ["please select"]}});
	/// let response = Response::ok().with_json(&data).unwrap();
	///
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::Result<Self> {
		use crate::Error;
		let json = serde_json::to_vec(data).map_err(|e| Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		Ok(self)
	}

	/// Set an HTML body with the matching Content-Type header
	pub fn with_html(mut self, html: impl Into<Bytes>) -> Self {
		self.body = html.into();
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_see_other_sets_location() {
		let response = Response::see_other("/landing");
		assert_eq!(response.status, StatusCode::SEE_OTHER);
		assert_eq!(
			response.headers.get("location").unwrap().to_str().unwrap(),
			"/landing"
		);
	}

	#[test]
	fn test_with_json_body() {
		let response = Response::unprocessable()
			.with_json(&serde_json::json!({"errors": {}}))
			.unwrap();
		assert_eq!(response.body, Bytes::from(r#"{"errors":{}}"#));
	}
}
