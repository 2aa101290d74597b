//! Licensing API client.
//!
//! [`Client`] holds the read-only identity (organization, shared secret, agent label), the API
//! base, and an injected transport. Every operation performs at most one round trip with no
//! retry; network operations accept a caller-supplied cancellation future which, once resolved,
//! drops the in-flight request and surfaces [`TransportError::Cancelled`].

mod content;
mod rate;

// crates.io
use futures::future::{self, Either};
// self
use crate::{
	_prelude::*,
	auth::{OrganizationId, SecretKey},
	canonical,
	error::{ConfigError, TransportError},
	http::{HttpRequest, HttpResponse, LicensingHttpClient},
	license::{LicensingRequest, TokenParams},
	obs::{self, CallKind, CallOutcome, CallSpan},
	token::{self, Token},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Production API base every endpoint path is appended to.
pub const DEFAULT_API_BASE: &str = "https://api.tollbit.com/dev/v1/";

pub(crate) const ORG_HEADER: &str = "TollbitOrgCuid";
pub(crate) const TOKEN_HEADER: &str = "TollbitToken";
pub(crate) const USER_AGENT_HEADER: &str = "User-Agent";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestLicensingClient = Client<ReqwestHttpClient>;

/// Client for the content and rate endpoints of the licensing API.
///
/// Cloning is cheap: the transport sits behind an [`Arc`] and the identity fields never change
/// after construction, so clones can run calls concurrently whenever the transport allows it.
pub struct Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	http_client: Arc<C>,
	organization: OrganizationId,
	secret: SecretKey,
	user_agent: String,
	api_base: Url,
}
impl<C> Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	/// Creates a client that sends every request through the caller-provided transport.
	pub fn with_http_client(
		secret: impl Into<String>,
		organization: impl AsRef<str>,
		user_agent: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let secret = SecretKey::new(secret)?;
		let organization = OrganizationId::new(organization).map_err(ConfigError::from)?;
		let api_base = Url::parse(DEFAULT_API_BASE)
			.map_err(|_| ConfigError::InvalidApiBase { base: DEFAULT_API_BASE.into() })?;

		Ok(Self {
			http_client: http_client.into(),
			organization,
			secret,
			user_agent: user_agent.into(),
			api_base,
		})
	}

	/// Points the client at a different API base (a staging host or a mock server).
	///
	/// A trailing `/` is appended when missing so endpoint names extend the path instead of
	/// replacing its last segment.
	pub fn with_api_base(mut self, mut api_base: Url) -> Result<Self> {
		if api_base.cannot_be_a_base() {
			return Err(ConfigError::InvalidApiBase { base: api_base.to_string() }.into());
		}
		if !api_base.path().ends_with('/') {
			let path = format!("{}/", api_base.path());

			api_base.set_path(&path);
		}

		self.api_base = api_base;

		Ok(self)
	}

	/// Organization every token is issued for.
	pub fn organization(&self) -> &OrganizationId {
		&self.organization
	}

	/// Agent label embedded in tokens and the bot `User-Agent`.
	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	/// API base endpoint paths are appended to.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}

	/// Transport shared by every clone of this client.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Seals a licensing request for `params` into an opaque token.
	pub fn generate_token(&self, params: TokenParams) -> Result<Token> {
		const KIND: CallKind = CallKind::GenerateToken;

		let span = CallSpan::new(KIND, "generate_token");
		let _guard = span.clone().entered();

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		span.record_target(canonical::canonicalize(&params.url));

		let request = LicensingRequest::new(
			self.organization.clone(),
			self.secret.clone(),
			self.user_agent.clone(),
			params,
		);
		let result = token::encode(&request, &self.secret);

		span.record_result(&result);
		obs::record_call_result(KIND, &result);

		result
	}

	/// Opens a token issued under this client's secret.
	pub fn decode_token(&self, token: &Token) -> Result<LicensingRequest> {
		token::decode(token, &self.secret)
	}

	/// Bot `User-Agent` sent with every request.
	pub fn bot_user_agent(&self) -> String {
		format!("Mozilla/5.0 (compatible; {}; +https://tollbit.com/bot)", self.user_agent)
	}

	/// Builds `{api_base}{endpoint}/{target}`, keeping the target path as given.
	///
	/// Targets with dot segments are rejected; URL parsing would otherwise resolve them and the
	/// request could leave the endpoint prefix.
	pub(crate) fn endpoint(&self, endpoint: &'static str, target: &str) -> Result<Url> {
		let dot_segment_target = || ConfigError::DotSegmentTarget { target: target.to_owned() };

		if has_dot_segment(target) {
			return Err(dot_segment_target().into());
		}

		let prefix = format!("{}{endpoint}/", self.api_base);
		let url = Url::parse(&format!("{prefix}{target}")).map_err(|source| {
			ConfigError::InvalidEndpoint { target: target.to_owned(), source }
		})?;

		if !url.as_str().starts_with(&prefix) {
			return Err(dot_segment_target().into());
		}

		Ok(url)
	}

	/// Runs `request` unless `cancel` resolves first; a cancelled request is dropped mid-flight.
	pub(crate) async fn send<S>(&self, cancel: S, request: HttpRequest) -> Result<HttpResponse>
	where
		S: Future<Output = ()>,
	{
		let cancel = std::pin::pin!(cancel);
		let in_flight = self.http_client.execute(request);

		match future::select(cancel, in_flight).await {
			Either::Left(((), _aborted)) => Err(TransportError::Cancelled.into()),
			Either::Right((response, _)) =>
				response.map_err(|e| TransportError::network(e).into()),
		}
	}
}
// Dot segments in the path part, including the `%2e` spellings URL parsers also resolve.
fn has_dot_segment(target: &str) -> bool {
	let path = target.split(['?', '#']).next().unwrap_or_default();

	path.split(['/', '\\']).any(|segment| {
		let segment = segment.to_ascii_lowercase().replace("%2e", ".");

		segment == "." || segment == ".."
	})
}

#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(
		secret: impl Into<String>,
		organization: impl AsRef<str>,
		user_agent: impl Into<String>,
	) -> Result<Self> {
		Self::with_http_client(secret, organization, user_agent, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			organization: self.organization.clone(),
			secret: self.secret.clone(),
			user_agent: self.user_agent.clone(),
			api_base: self.api_base.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + LicensingHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("organization", &self.organization)
			.field("secret", &self.secret)
			.field("user_agent", &self.user_agent)
			.field("api_base", &self.api_base.as_str())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, error::CryptoError, license::LicenseType};

	#[test]
	fn construction_validates_credentials() {
		let empty_secret = ScriptedTestClient::with_http_client(
			"",
			TEST_ORG,
			TEST_AGENT,
			ScriptedHttpClient::hanging(),
		);
		let bad_org = ScriptedTestClient::with_http_client(
			TEST_SECRET,
			"org\nabc",
			TEST_AGENT,
			ScriptedHttpClient::hanging(),
		);
		let spaced_org = ScriptedTestClient::with_http_client(
			TEST_SECRET,
			"org abc",
			TEST_AGENT,
			ScriptedHttpClient::hanging(),
		)
		.expect("Organization with a space should be accepted.");

		assert!(matches!(empty_secret, Err(Error::Config(ConfigError::EmptySecret))));
		assert!(matches!(bad_org, Err(Error::Config(ConfigError::InvalidOrganization(_)))));
		assert_eq!(spaced_org.organization().as_ref(), "org abc");

		let token = spaced_org
			.generate_token(TokenParams::new("site.com", 1))
			.expect("Token generation should succeed.");
		let request = spaced_org.decode_token(&token).expect("Own token should decode.");

		assert_eq!(request.org_cuid.as_ref(), "org abc");
	}

	#[test]
	fn generated_token_carries_client_identity() {
		let client = build_scripted_client(ScriptedHttpClient::hanging());
		let token = client
			.generate_token(TokenParams::new("https://www.site.com/page", 500))
			.expect("Token generation should succeed.");

		assert!(!token.as_str().is_empty());

		let request = client.decode_token(&token).expect("Own token should decode.");

		assert_eq!(request.url, "https://www.site.com/page");
		assert_eq!(request.org_cuid.as_ref(), TEST_ORG);
		assert_eq!(request.key.expose(), TEST_SECRET);
		assert_eq!(request.user_agent, TEST_AGENT);
		assert_eq!(request.max_price_micros, 500);
		assert_eq!(request.currency, "USD");
		assert_eq!(request.license_type, LicenseType::OnDemand);
	}

	#[test]
	fn tokens_from_another_secret_are_rejected() {
		let client = build_scripted_client(ScriptedHttpClient::hanging());
		let other = ScriptedTestClient::with_http_client(
			"different-secret",
			TEST_ORG,
			TEST_AGENT,
			ScriptedHttpClient::hanging(),
		)
		.expect("Second client should build.");
		let token = other
			.generate_token(TokenParams::new("site.com", 1))
			.expect("Token generation should succeed.");
		let err = client.decode_token(&token).expect_err("Foreign token must not decode.");

		assert!(matches!(err, Error::Crypto(CryptoError::Authentication)));
	}

	#[test]
	fn api_base_gains_trailing_slash() {
		let client = build_scripted_client(ScriptedHttpClient::hanging())
			.with_api_base(Url::parse("http://127.0.0.1:9000/dev/v1").expect("Base should parse."))
			.expect("Base should be accepted.");

		assert_eq!(client.api_base().as_str(), "http://127.0.0.1:9000/dev/v1/");
		assert_eq!(
			client.endpoint("rate", "site.com/page").expect("Endpoint should build.").as_str(),
			"http://127.0.0.1:9000/dev/v1/rate/site.com/page"
		);
	}

	#[test]
	fn opaque_api_base_is_rejected() {
		let err = build_scripted_client(ScriptedHttpClient::hanging())
			.with_api_base(Url::parse("mailto:ops@example.com").expect("Base should parse."))
			.expect_err("Opaque base must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidApiBase { .. })));
	}

	#[test]
	fn default_endpoints_match_production_layout() {
		let client = build_scripted_client(ScriptedHttpClient::hanging());

		assert_eq!(
			client.endpoint("content", "site.com/page").expect("Endpoint should build.").as_str(),
			"https://api.tollbit.com/dev/v1/content/site.com/page"
		);
		assert_eq!(
			client.bot_user_agent(),
			"Mozilla/5.0 (compatible; MyBot; +https://tollbit.com/bot)"
		);
	}

	#[test]
	fn dot_segment_targets_cannot_leave_the_endpoint() {
		let client = build_scripted_client(ScriptedHttpClient::hanging());

		for target in [
			"site.com/../../../admin",
			"..",
			"site.com/./page",
			"site.com/%2E%2e/x",
			"a\\..\\b",
		] {
			let err = client.endpoint("rate", target).expect_err("Dot segments must be rejected.");

			assert!(
				matches!(err, Error::Config(ConfigError::DotSegmentTarget { .. })),
				"Unexpected error for {target}: {err:?}"
			);
		}

		assert_eq!(
			client
				.endpoint("rate", "site.com/a..b/.well-known?next=../x")
				.expect("Dots inside segment names are kept.")
				.as_str(),
			"https://api.tollbit.com/dev/v1/rate/site.com/a..b/.well-known?next=../x"
		);
	}

	#[test]
	fn debug_output_redacts_secret() {
		let client = build_scripted_client(ScriptedHttpClient::hanging());
		let rendered = format!("{client:?}");

		assert!(!rendered.contains(TEST_SECRET));
		assert!(rendered.contains("<redacted>"));
	}

	#[tokio::test]
	async fn ready_cancellation_wins_over_ready_transport() {
		let client = build_scripted_client(ScriptedHttpClient::responding(200, "[]"));
		let request = HttpRequest::get(
			client.endpoint("rate", "site.com").expect("Endpoint should build."),
		);
		let err = client.send(async {}, request).await.expect_err("Cancelled send must fail.");

		assert!(err.is_cancelled());
	}

	#[tokio::test]
	async fn transport_failures_are_network_errors() {
		let client = build_scripted_client(ScriptedHttpClient::failing());
		let request = HttpRequest::get(
			client.endpoint("rate", "site.com").expect("Endpoint should build."),
		);
		let err = client
			.send(std::future::pending(), request)
			.await
			.expect_err("Failing transport must surface an error.");

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}
}
