// self
use crate::{
	_prelude::*,
	obs::{CallKind, CallOutcome, FailureReason},
};

/// Counts a call attempt or success via the global metrics recorder (when enabled).
///
/// Failures go through [`record_call_result`] so they carry a `reason` label.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"tollbit_client_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records success, or failure labeled with its [`FailureReason`], for a finished call.
pub fn record_call_result<T>(kind: CallKind, result: &Result<T>) {
	let Err(e) = result else {
		return record_call_outcome(kind, CallOutcome::Success);
	};
	let reason = FailureReason::from_error(e);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"tollbit_client_call_total",
			"call" => kind.as_str(),
			"outcome" => CallOutcome::Failure.as_str(),
			"reason" => reason.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = reason;
	}
}

/// Counts a response received from the licensing API, labeled by HTTP status.
pub fn record_response_status(kind: CallKind, status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"tollbit_client_response_total",
			"call" => kind.as_str(),
			"status" => status.to_string()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, status);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::NotFoundError;

	#[test]
	fn recording_is_safe_without_a_recorder() {
		record_call_outcome(CallKind::Rate, CallOutcome::Attempt);
		record_response_status(CallKind::Rate, 200);
		record_call_result::<()>(CallKind::Content, &Ok(()));
		record_call_result::<()>(
			CallKind::Rate,
			&Err(NotFoundError::Rate { target: "site.com".into() }.into()),
		);
	}
}
