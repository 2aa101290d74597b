//! Price quote retrieval. No token is involved; only the bot `User-Agent` is sent.

// self
use crate::{
	_prelude::*,
	canonical,
	client::{Client, USER_AGENT_HEADER},
	error::NotFoundError,
	http::{HttpRequest, LicensingHttpClient},
	obs::{self, CallKind, CallOutcome, CallSpan},
	response::{self, RateResult},
};

const ENDPOINT: &str = "rate";

impl<C> Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	/// Fetches the current rate for `target_url`.
	///
	/// Returns the first element of the response array verbatim, or
	/// [`NotFoundError::Rate`] when the array is empty.
	pub async fn get_rate<S>(&self, cancel: S, target_url: &str) -> Result<RateResult>
	where
		S: Future<Output = ()>,
	{
		const KIND: CallKind = CallKind::Rate;

		let span = CallSpan::new(KIND, "get_rate");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let call_span = &span;
		let result: Result<RateResult> = span
			.instrument(async move {
				let target = canonical::canonicalize(target_url);

				call_span.record_target(target);

				let http_request = HttpRequest::get(self.endpoint(ENDPOINT, target)?)
					.header(USER_AGENT_HEADER, self.bot_user_agent());
				let response = self.send(cancel, http_request).await?;

				call_span.record_status(response.status);
				obs::record_response_status(KIND, response.status);

				response::first_element::<RateResult>(ENDPOINT, response.status, &response.body)?
					.ok_or_else(|| NotFoundError::Rate { target: target.to_owned() }.into())
			})
			.await;

		span.record_result(&result);
		obs::record_call_result(KIND, &result);

		result
	}
}
