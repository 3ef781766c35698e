/// Errors raised while handling a request
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Malformed request body: {0}")]
	MalformedBody(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("Internal error: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
