//! Target URL canonicalization for Tollbit endpoint paths.
//!
//! The licensing API addresses content by bare `host/path`, so callers' URLs lose one scheme
//! prefix and one `www.` label before being appended to an endpoint. No validation happens
//! here; anything that is not a recognized prefix passes through untouched.

/// Strips one leading `https://` (then one leading `http://`) and one leading `www.`.
///
/// Prefix matches are exact and case-sensitive.
///
/// ```
/// use tollbit_client::canonical::canonicalize;
///
/// assert_eq!(canonicalize("https://www.example.com/x"), "example.com/x");
/// assert_eq!(canonicalize("example.com/x"), "example.com/x");
/// ```
pub fn canonicalize(url: &str) -> &str {
	let bare = url.strip_prefix("https://").unwrap_or(url);
	let bare = bare.strip_prefix("http://").unwrap_or(bare);

	bare.strip_prefix("www.").unwrap_or(bare)
}
