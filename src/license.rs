//! Licensing request model sealed inside every token.

// self
use crate::{
	_prelude::*,
	auth::{OrganizationId, SecretKey},
};

/// Currency code accepted by the licensing API today.
pub const USD: &str = "USD";

/// License kinds understood by the licensing API.
///
/// Unknown labels survive as [`LicenseType::Other`] so newer server-side variants round-trip
/// through tokens instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LicenseType {
	/// Pay-per-fetch license (`ON_DEMAND_LICENSE`).
	#[default]
	OnDemand,
	/// Any label this crate does not recognize yet.
	Other(String),
}
impl LicenseType {
	/// Returns the wire label for the license type.
	pub fn as_str(&self) -> &str {
		match self {
			LicenseType::OnDemand => "ON_DEMAND_LICENSE",
			LicenseType::Other(label) => label,
		}
	}
}
impl From<String> for LicenseType {
	fn from(value: String) -> Self {
		match value.as_str() {
			"ON_DEMAND_LICENSE" => Self::OnDemand,
			_ => Self::Other(value),
		}
	}
}
impl From<LicenseType> for String {
	fn from(value: LicenseType) -> Self {
		match value {
			LicenseType::OnDemand => "ON_DEMAND_LICENSE".into(),
			LicenseType::Other(label) => label,
		}
	}
}
impl Display for LicenseType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Call-specific inputs for [`Client::generate_token`](crate::client::Client::generate_token).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenParams {
	/// Target content URL, exactly as the caller knows it.
	pub url: String,
	/// Highest acceptable price in micro-units of `currency`.
	pub max_price_micros: i64,
	/// ISO currency code; only [`USD`] is accepted by the API.
	pub currency: String,
	/// Requested license kind.
	pub license_type: LicenseType,
}
impl TokenParams {
	/// Creates parameters for an on-demand USD license.
	pub fn new(url: impl Into<String>, max_price_micros: i64) -> Self {
		Self {
			url: url.into(),
			max_price_micros,
			currency: USD.into(),
			license_type: LicenseType::OnDemand,
		}
	}

	/// Overrides the currency code.
	pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
		self.currency = currency.into();

		self
	}

	/// Overrides the license type.
	pub fn with_license_type(mut self, license_type: LicenseType) -> Self {
		self.license_type = license_type;

		self
	}
}

/// Plaintext payload of a licensing token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensingRequest {
	/// Organization the request is billed to.
	pub org_cuid: OrganizationId,
	/// Shared secret; only ever present inside the encrypted token.
	pub key: SecretKey,
	/// Target content URL (not canonicalized).
	pub url: String,
	/// Caller's agent label.
	pub user_agent: String,
	/// Highest acceptable price in micro-units of `currency`.
	pub max_price_micros: i64,
	/// ISO currency code.
	pub currency: String,
	/// Requested license kind.
	pub license_type: LicenseType,
}
impl LicensingRequest {
	/// Combines client identity with call-specific parameters.
	pub fn new(
		org_cuid: OrganizationId,
		key: SecretKey,
		user_agent: impl Into<String>,
		params: TokenParams,
	) -> Self {
		let TokenParams { url, max_price_micros, currency, license_type } = params;

		Self {
			org_cuid,
			key,
			url,
			user_agent: user_agent.into(),
			max_price_micros,
			currency,
			license_type,
		}
	}
}
