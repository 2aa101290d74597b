// self
use crate::{
	_prelude::*,
	obs::{CallKind, FailureReason},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapping one client operation.
///
/// `target`, `status`, and `failure` start empty and are filled in as the call learns them,
/// so a span closed early (cancellation, codec failure) shows exactly how far the call got.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"tollbit.call",
				call = kind.as_str(),
				stage,
				target = tracing::field::Empty,
				status = tracing::field::Empty,
				failure = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Records the canonical target the call addresses.
	pub fn record_target(&self, target: &str) {
		#[cfg(feature = "tracing")]
		self.span.record("target", target);
		#[cfg(not(feature = "tracing"))]
		let _ = target;
	}

	/// Records the HTTP status of the response.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		self.span.record("status", status);
		#[cfg(not(feature = "tracing"))]
		let _ = status;
	}

	/// Records the failure class of a finished call; successes leave the field empty.
	pub fn record_result<T>(&self, result: &Result<T>) {
		let Err(e) = result else { return };
		let reason = FailureReason::from_error(e);

		#[cfg(feature = "tracing")]
		{
			self.span.record("failure", reason.as_str());

			tracing::debug!(parent: &self.span, error = %e, "Licensing call failed.");
		}
		#[cfg(not(feature = "tracing"))]
		let _ = reason;
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> CallSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`CallSpan::entered`].
pub struct CallSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallSpanGuard(..)")
	}
}
