//! Response shapes returned by the content and rate endpoints.
//!
//! Both endpoints answer with a JSON array. The contract is "first element, else fail": an
//! empty array stands in for "nothing available" and never decodes to an empty success.
//! Missing fields default to empty values so partially-populated elements still parse.

// self
use crate::_prelude::*;

/// Licensed content body split into its page regions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
	/// Page header region.
	pub header: String,
	/// Main body; an empty value means no content was licensed.
	pub main: String,
	/// Page footer region.
	pub footer: String,
}

/// Price quote for a target URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateResult {
	/// Price in micro-units of `currency`.
	pub price_micros: i64,
	/// ISO currency code.
	pub currency: String,
	/// License label the price applies to.
	pub license_type: String,
	/// Path of the license document.
	pub license_path: String,
	/// Server-side error message, if any.
	pub error: String,
}

/// Licensed content plus the rate it was charged at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentResult {
	/// Licensed content body.
	pub content: Content,
	/// Opaque metadata string attached by the publisher.
	pub metadata: String,
	/// Rate applied to this fetch.
	pub rate: RateResult,
}
impl ContentResult {
	/// Returns `true` when the main body carries content.
	pub fn has_main(&self) -> bool {
		!self.content.main.is_empty()
	}
}

/// Parses `body` as a JSON array of `T` and returns its first element, if any.
pub(crate) fn first_element<T>(
	endpoint: &'static str,
	status: u16,
	body: &[u8],
) -> Result<Option<T>>
where
	T: for<'de> Deserialize<'de>,
{
	let mut de = serde_json::Deserializer::from_slice(body);
	let elements: Vec<T> = serde_path_to_error::deserialize(&mut de)
		.map_err(|source| Error::MalformedResponse { endpoint, status, source })?;

	Ok(elements.into_iter().next())
}
