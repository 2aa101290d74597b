//! Client-level error types shared across the token codec, transport, and API operations.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token encryption, decryption, or authentication failure.
	#[error(transparent)]
	Crypto(#[from] CryptoError),
	/// Transport failure (DNS, TCP, TLS, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The requested resource is absent from an otherwise well-formed response.
	#[error(transparent)]
	NotFound(#[from] NotFoundError),

	/// Licensing request could not be serialized or deserialized.
	#[error("Licensing request could not be (de)serialized.")]
	Serialization(#[source] serde_json::Error),
	/// Response body is not an array of the expected shape.
	#[error("The {endpoint} endpoint returned a malformed response.")]
	MalformedResponse {
		/// Endpoint label (`content` or `rate`).
		endpoint: &'static str,
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// Returns `true` when the caller's cancellation signal aborted the request.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Cancelled))
	}

	/// Returns `true` when the remote service returned no usable element.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}
}

/// Configuration and validation failures raised while building a client or a request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Shared secret is empty.
	#[error("Secret key cannot be empty.")]
	EmptySecret,
	/// Organization identifier failed validation.
	#[error("Organization identifier is invalid.")]
	InvalidOrganization(#[from] crate::auth::IdentifierError),
	/// API base cannot be used as a prefix for endpoint URLs.
	#[error("API base `{base}` cannot carry endpoint paths.")]
	InvalidApiBase {
		/// Rejected base URL.
		base: String,
	},
	/// Endpoint URL built from the canonical target cannot be parsed.
	#[error("Endpoint URL for `{target}` is invalid.")]
	InvalidEndpoint {
		/// Canonical target that produced the invalid URL.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Canonical target carries `.`/`..` segments that would resolve outside the endpoint.
	#[error("Target `{target}` contains dot segments and cannot address an endpoint.")]
	DotSegmentTarget {
		/// Canonical target that was rejected.
		target: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token codec failures.
#[derive(Debug, ThisError)]
pub enum CryptoError {
	/// Cipher refused to seal the plaintext.
	#[error("Licensing token could not be encrypted.")]
	Encryption,
	/// Token cannot be split into nonce and ciphertext.
	#[error("Licensing token is malformed: {reason}.")]
	MalformedToken {
		/// Short description of the structural problem.
		reason: String,
	},
	/// Authentication tag mismatch: wrong secret or tampered token.
	#[error("Licensing token failed authentication.")]
	Authentication,
}

/// Transport-level failures (network, cancellation).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the licensing API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Caller cancelled the request before the transport completed.
	#[error("Request was cancelled before the licensing API responded.")]
	Cancelled,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Well-formed responses that carry nothing usable.
#[derive(Debug, ThisError)]
pub enum NotFoundError {
	/// Content array was empty or its first element had an empty `main` body.
	#[error("No licensed content is available for `{target}`.")]
	Content {
		/// Canonical target that was requested.
		target: String,
	},
	/// Rate array was empty.
	#[error("No rate is available for `{target}`.")]
	Rate {
		/// Canonical target that was requested.
		target: String,
	},
}
