//! Transport primitives for licensing API calls.
//!
//! The module exposes [`LicensingHttpClient`] alongside the minimal [`HttpRequest`] and
//! [`HttpResponse`] shapes so downstream crates can plug in any HTTP stack (or a scripted fake
//! in tests) without pulling the default reqwest transport.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed, `Send` future returned by [`LicensingHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing a licensing API `GET`.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so a single transport can be shared (behind `Arc`) by clones of a
/// client running concurrently. Dropping the returned future must abort the request; the client
/// relies on this to honor caller cancellation.
pub trait LicensingHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and resolves with the response status and full body.
	///
	/// Non-success statuses are not errors at this layer; the client inspects the body.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Outbound `GET` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// Fully-built endpoint URL.
	pub url: Url,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(&'static str, String)>,
}
impl HttpRequest {
	/// Creates a request with no headers.
	pub fn get(url: Url) -> Self {
		Self { url, headers: Vec::new() }
	}

	/// Appends a header.
	pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));

		self
	}

	/// Returns the first value recorded for `name` (case-insensitive).
	pub fn header_value(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Response status and raw body bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from a status code and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a transport whose requests give up after `timeout`.
	///
	/// Timeouts surface as network failures; use a cancellation future instead when the caller
	/// needs to tell them apart.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl LicensingHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.get(request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}
