//! Shared secret wrapper that redacts sensitive material.

// self
use crate::{_prelude::*, error::ConfigError};

/// Redacted shared secret keeping the Tollbit API key out of logs.
///
/// The secret keys the token cipher and also rides inside the encrypted token payload; it is
/// never sent in clear.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretKey(String);
impl SecretKey {
	/// Wraps a new secret string, rejecting empty values.
	pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
		let value = value.into();

		if value.is_empty() {
			return Err(ConfigError::EmptySecret);
		}

		Ok(Self(value))
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl TryFrom<String> for SecretKey {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<SecretKey> for String {
	fn from(value: SecretKey) -> Self {
		value.0
	}
}
impl AsRef<str> for SecretKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SecretKey").field(&"<redacted>").finish()
	}
}
impl Display for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
