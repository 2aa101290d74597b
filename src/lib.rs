//! Async client for the Tollbit content-licensing API.
//!
//! Licensing requests are sealed into opaque tokens, exchanged for licensed content or price
//! quotes, and returned as strictly-shaped results through a pluggable transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod canonical;
pub mod client;
pub mod error;
pub mod http;
pub mod license;
pub mod obs;
pub mod response;
pub mod token;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::Mutex;
	// self
	use crate::{
		client::Client,
		http::{
			HttpRequest, HttpResponse, LicensingHttpClient, ReqwestHttpClient, TransportFuture,
		},
	};

	/// Shared secret used by every test client.
	pub const TEST_SECRET: &str =
		"64280b7c9897a66cd1062596518fdf2992361f6477300562dc41d6d108359de2";
	/// Organization identifier used by every test client.
	pub const TEST_ORG: &str = "org-abc";
	/// Agent label used by every test client.
	pub const TEST_AGENT: &str = "MyBot";
	/// Bot `User-Agent` every test client sends.
	pub const TEST_BOT_AGENT: &str = "Mozilla/5.0 (compatible; MyBot; +https://tollbit.com/bot)";

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestHttpClient>;
	/// Client type alias used by tests that script the transport.
	pub type ScriptedTestClient = Client<ScriptedHttpClient>;

	#[derive(Clone, Debug)]
	enum Script {
		Respond(HttpResponse),
		Fail,
		Hang,
	}

	/// Transport that records every request and answers from a fixed script.
	#[derive(Debug)]
	pub struct ScriptedHttpClient {
		script: Script,
		requests: Mutex<Vec<HttpRequest>>,
	}
	impl ScriptedHttpClient {
		/// Answers every request with `status` and `body`.
		pub fn responding(status: u16, body: &str) -> Self {
			Self::new(Script::Respond(HttpResponse::new(status, body)))
		}

		/// Fails every request with a connection-reset I/O error.
		pub fn failing() -> Self {
			Self::new(Script::Fail)
		}

		/// Never completes any request.
		pub fn hanging() -> Self {
			Self::new(Script::Hang)
		}

		/// Returns every request received so far.
		pub fn requests(&self) -> Vec<HttpRequest> {
			self.requests.lock().expect("Scripted transport lock should not be poisoned.").clone()
		}

		fn new(script: Script) -> Self {
			Self { script, requests: Mutex::new(Vec::new()) }
		}
	}
	impl LicensingHttpClient for ScriptedHttpClient {
		type TransportError = std::io::Error;

		fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
			self.requests
				.lock()
				.expect("Scripted transport lock should not be poisoned.")
				.push(request);

			let script = self.script.clone();

			Box::pin(async move {
				match script {
					Script::Respond(response) => Ok(response),
					Script::Fail => Err(std::io::Error::new(
						std::io::ErrorKind::ConnectionReset,
						"Scripted connection reset.",
					)),
					Script::Hang => std::future::pending().await,
				}
			})
		}
	}

	/// Builds a reqwest HTTP client suitable for talking to `httpmock` servers.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`Client`] whose API base points at `api_base` (typically an `httpmock`
	/// server URL plus the `/dev/v1/` prefix).
	pub fn build_reqwest_test_client(api_base: &str) -> ReqwestTestClient {
		let api_base = Url::parse(api_base).expect("Test API base should parse successfully.");

		ReqwestTestClient::with_http_client(
			TEST_SECRET,
			TEST_ORG,
			TEST_AGENT,
			test_reqwest_http_client(),
		)
		.expect("Test client credentials should be valid.")
		.with_api_base(api_base)
		.expect("Test API base should be accepted.")
	}

	/// Constructs a [`Client`] on the production API base that talks to `transport`.
	pub fn build_scripted_client(
		transport: impl Into<Arc<ScriptedHttpClient>>,
	) -> ScriptedTestClient {
		ScriptedTestClient::with_http_client(TEST_SECRET, TEST_ORG, TEST_AGENT, transport)
			.expect("Test client credentials should be valid.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
