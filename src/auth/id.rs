//! Organization identifier carried in licensing tokens and the `TollbitOrgCuid` header.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Organization identifier cannot be empty.")]
	Empty,
	/// The identifier contains control characters, which a header value cannot carry.
	#[error("Organization identifier contains control characters.")]
	ContainsControl,
}

/// Organization CUID issued by Tollbit.
///
/// Any non-empty string is accepted as long as it fits in a request header, so control
/// characters are the only content rejected. Validation also runs on deserialization, so an
/// identifier recovered from a decrypted token is always safe to place in a header.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationId(String);
impl OrganizationId {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for OrganizationId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for OrganizationId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<OrganizationId> for String {
	fn from(value: OrganizationId) -> Self {
		value.0
	}
}
impl TryFrom<String> for OrganizationId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for OrganizationId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for OrganizationId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Organization({})", self.0)
	}
}
impl Display for OrganizationId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for OrganizationId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_control) {
		return Err(IdentifierError::ContainsControl);
	}

	Ok(())
}
