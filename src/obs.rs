//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `tollbit.call` with the `call` (operation)
//!   and `stage` (call site) fields, plus `target` (canonical URL), `status` (HTTP status), and
//!   `failure` (see [`FailureReason`]) once they are known.
//! - Enable `metrics` to increment `tollbit_client_call_total` for every attempt/success/failure,
//!   labeled by `call` + `outcome` (+ `reason` on failures), and
//!   `tollbit_client_response_total` per response, labeled by `call` + `status`.
//!
//! With both features disabled every helper is a no-op and the client emits nothing.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{
	_prelude::*,
	error::{CryptoError, TransportError},
};

/// Client operations observed by the instrumentation hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Token generation (no network).
	GenerateToken,
	/// Licensed content fetch.
	Content,
	/// Rate quote fetch.
	Rate,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::GenerateToken => "generate_token",
			CallKind::Content => "content",
			CallKind::Rate => "rate",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Coarse failure classes used as span fields and metric labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureReason {
	/// Invalid construction input or endpoint target.
	Config,
	/// Token failed authentication (wrong secret or tampering).
	Authentication,
	/// Any other token codec failure.
	Crypto,
	/// Caller's cancellation signal won.
	Cancelled,
	/// Transport failed before a response arrived.
	Network,
	/// Well-formed response without a usable element.
	NotFound,
	/// Response body did not match the expected shape.
	Malformed,
	/// Licensing record could not be (de)serialized.
	Serialization,
}
impl FailureReason {
	/// Classifies a client error.
	pub fn from_error(error: &Error) -> Self {
		match error {
			Error::Config(_) => Self::Config,
			Error::Crypto(CryptoError::Authentication) => Self::Authentication,
			Error::Crypto(_) => Self::Crypto,
			Error::Transport(TransportError::Cancelled) => Self::Cancelled,
			Error::Transport(TransportError::Network { .. }) => Self::Network,
			Error::NotFound(_) => Self::NotFound,
			Error::MalformedResponse { .. } => Self::Malformed,
			Error::Serialization(_) => Self::Serialization,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureReason::Config => "config",
			FailureReason::Authentication => "authentication",
			FailureReason::Crypto => "crypto",
			FailureReason::Cancelled => "cancelled",
			FailureReason::Network => "network",
			FailureReason::NotFound => "not_found",
			FailureReason::Malformed => "malformed",
			FailureReason::Serialization => "serialization",
		}
	}
}
impl Display for FailureReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
