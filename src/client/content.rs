//! Licensed content retrieval.
//!
//! The content request is driven entirely by the token: the client opens its own token to
//! recover the target URL and organization, so the token stays the only artifact that carries
//! request identity over the wire.

// self
use crate::{
	_prelude::*,
	canonical,
	client::{Client, ORG_HEADER, TOKEN_HEADER, USER_AGENT_HEADER},
	error::NotFoundError,
	http::{HttpRequest, LicensingHttpClient},
	license::TokenParams,
	obs::{self, CallKind, CallOutcome, CallSpan},
	response::{self, ContentResult},
	token::Token,
};

const ENDPOINT: &str = "content";

impl<C> Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	/// Fetches licensed content for a token previously produced by
	/// [`generate_token`](Client::generate_token).
	///
	/// Fails with [`NotFoundError::Content`] when the response array is empty or its first
	/// element has an empty `main` body. Resolving `cancel` before the response arrives aborts
	/// the request.
	pub async fn get_content_with_token<S>(
		&self,
		cancel: S,
		token: &Token,
	) -> Result<ContentResult>
	where
		S: Future<Output = ()>,
	{
		const KIND: CallKind = CallKind::Content;

		let span = CallSpan::new(KIND, "get_content_with_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let call_span = &span;
		let result: Result<ContentResult> = span
			.instrument(async move {
				let request = self.decode_token(token)?;
				let target = canonical::canonicalize(&request.url);

				call_span.record_target(target);

				let http_request = HttpRequest::get(self.endpoint(ENDPOINT, target)?)
					.header(ORG_HEADER, request.org_cuid.as_ref())
					.header(USER_AGENT_HEADER, self.bot_user_agent())
					.header(TOKEN_HEADER, token.as_str());
				let response = self.send(cancel, http_request).await?;

				call_span.record_status(response.status);
				obs::record_response_status(KIND, response.status);

				match response::first_element::<ContentResult>(
					ENDPOINT,
					response.status,
					&response.body,
				)? {
					Some(content) if content.has_main() => Ok(content),
					_ => Err(NotFoundError::Content { target: target.to_owned() }.into()),
				}
			})
			.await;

		span.record_result(&result);
		obs::record_call_result(KIND, &result);

		result
	}

	/// Generates a token for `params` and fetches the licensed content in one call.
	pub async fn get_content<S>(&self, cancel: S, params: TokenParams) -> Result<ContentResult>
	where
		S: Future<Output = ()>,
	{
		let token = self.generate_token(params)?;

		self.get_content_with_token(cancel, &token).await
	}
}
