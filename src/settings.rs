//! Process configuration from environment variables

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LATENCY_MS: u64 = 150;

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("invalid FORMLING_ADDR: {0}")]
	InvalidAddr(String),
	#[error("invalid FORMLING_LATENCY_MS: {0}")]
	InvalidLatency(String),
}

/// Runtime settings of the demo server
///
/// - `FORMLING_ADDR` sets the bind address (default `127.0.0.1:8000`)
/// - `FORMLING_LATENCY_MS` sets the simulated backend latency (default 150)
#[derive(Debug, Clone)]
pub struct Settings {
	pub bind_addr: SocketAddr,
	pub latency: Duration,
}

impl Settings {
	pub fn from_env() -> Result<Self, SettingsError> {
		let mut settings = Self::default();

		if let Ok(addr) = std::env::var("FORMLING_ADDR") {
			settings.bind_addr = addr
				.parse()
				.map_err(|_| SettingsError::InvalidAddr(addr))?;
		}
		if let Ok(latency) = std::env::var("FORMLING_LATENCY_MS") {
			let millis: u64 = latency
				.parse()
				.map_err(|_| SettingsError::InvalidLatency(latency))?;
			settings.latency = Duration::from_millis(millis);
		}

		Ok(settings)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
			latency: Duration::from_millis(DEFAULT_LATENCY_MS),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.bind_addr.port(), 8000);
		assert_eq!(settings.latency, Duration::from_millis(150));
	}
}
