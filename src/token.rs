//! Licensing token codec.
//!
//! A token is the JSON-serialized [`LicensingRequest`] sealed with ChaCha20-Poly1305 under a
//! key derived from the shared secret, laid out as `nonce || ciphertext || tag` and encoded
//! with URL-safe, unpadded base64 so it fits in a header or a URL without escaping.
//!
//! Every encode draws a fresh random nonce, so encoding the same request twice yields two
//! different tokens; both decode to the same request. Tokens carry no issue time and this
//! layer does not prevent replay.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chacha20poly1305::{
	ChaCha20Poly1305, Key, Nonce,
	aead::{Aead, KeyInit},
};
use rand::RngCore;
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, auth::SecretKey, error::CryptoError, license::LicensingRequest};

/// Nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;
/// Poly1305 tag length in bytes.
pub const TAG_LEN: usize = 16;

const KEY_CONTEXT: &[u8] = b"tollbit-licensing-token.v1";

/// Opaque, encrypted licensing token.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);
impl Token {
	/// Returns the encoded token.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the encoded token.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for Token {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<String> for Token {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for Token {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl FromStr for Token {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from(s))
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Token({} chars)", self.0.len())
	}
}
impl Display for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Serializes and seals a licensing request under `secret`.
pub fn encode(request: &LicensingRequest, secret: &SecretKey) -> Result<Token> {
	let plaintext = serde_json::to_vec(request).map_err(Error::Serialization)?;

	encrypt(&plaintext, secret)
}

/// Opens a token sealed under `secret` and deserializes the licensing request inside.
pub fn decode(token: &Token, secret: &SecretKey) -> Result<LicensingRequest> {
	let plaintext = decrypt(token, secret)?;

	serde_json::from_slice(&plaintext).map_err(Error::Serialization)
}

/// Seals arbitrary bytes into a token.
pub fn encrypt(plaintext: &[u8], secret: &SecretKey) -> Result<Token> {
	let cipher = cipher_for(secret);
	let mut nonce = [0_u8; NONCE_LEN];

	rand::rng().fill_bytes(&mut nonce);

	let sealed = cipher
		.encrypt(Nonce::from_slice(&nonce), plaintext)
		.map_err(|_| CryptoError::Encryption)?;
	let mut raw = Vec::with_capacity(NONCE_LEN + sealed.len());

	raw.extend_from_slice(&nonce);
	raw.extend_from_slice(&sealed);

	Ok(Token(URL_SAFE_NO_PAD.encode(raw)))
}

/// Opens a token and returns the raw plaintext bytes.
pub fn decrypt(token: &Token, secret: &SecretKey) -> Result<Vec<u8>> {
	let raw = URL_SAFE_NO_PAD
		.decode(token.as_str())
		.map_err(|e| CryptoError::MalformedToken { reason: format!("invalid base64 ({e})") })?;

	if raw.len() < NONCE_LEN + TAG_LEN {
		return Err(CryptoError::MalformedToken {
			reason: format!("{} bytes is shorter than nonce and tag", raw.len()),
		}
		.into());
	}

	let (nonce, sealed) = raw.split_at(NONCE_LEN);
	let plaintext = cipher_for(secret)
		.decrypt(Nonce::from_slice(nonce), sealed)
		.map_err(|_| CryptoError::Authentication)?;

	Ok(plaintext)
}

fn cipher_for(secret: &SecretKey) -> ChaCha20Poly1305 {
	let mut hasher = Sha256::new();

	hasher.update(KEY_CONTEXT);
	hasher.update(secret.expose().as_bytes());

	let digest = hasher.finalize();

	ChaCha20Poly1305::new(Key::from_slice(digest.as_slice()))
}
