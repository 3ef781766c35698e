use crate::{Error, Result};
use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri};

/// HTTP request representation
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Request {
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Decode the body as form-encoded key/value pairs
	///
	/// Repeated keys are preserved in submission order; an empty body is an
	/// empty list.
	///
	/// # Examples
	///
	/// ```
	/// use formling_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/detail")
	///     .body("gender=male&agree=1&agree=2")
	///     .build();
	///
	/// let pairs = request.form_pairs().unwrap();
	/// assert_eq!(pairs.len(), 3);
	/// assert_eq!(pairs[1], ("agree".to_string(), "1".to_string()));
	/// assert_eq!(pairs[2], ("agree".to_string(), "2".to_string()));
	/// ```
	pub fn form_pairs(&self) -> Result<Vec<(String, String)>> {
		let body = std::str::from_utf8(&self.body)
			.map_err(|e| Error::MalformedBody(e.to_string()))?;
		serde_urlencoded::from_str::<Vec<(String, String)>>(body)
			.map_err(|e| Error::MalformedBody(e.to_string()))
	}
}

/// Builder for `Request`
pub struct RequestBuilder {
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: Uri::from_static("/"),
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: &str) -> Self {
		if let Ok(parsed) = uri.parse::<Uri>() {
			self.uri = parsed;
		}
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Add a single header, ignoring invalid names or values
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Request {
		Request {
			method: self.method,
			uri: self.uri,
			headers: self.headers,
			body: self.body,
		}
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}
