// self
use tollbit_client::{
	_preludet::*,
	auth::SecretKey,
	client::Client,
	error::CryptoError,
	license::{LicenseType, TokenParams},
	token::{self, Token},
};

#[test]
fn generated_token_decodes_with_the_issuing_secret() {
	let client = Client::new("secret123-0123456789abcdef", TEST_ORG, TEST_AGENT)
		.expect("Client should build.");
	let params = TokenParams {
		url: "https://www.site.com/page".into(),
		max_price_micros: 500,
		currency: "USD".into(),
		license_type: LicenseType::OnDemand,
	};
	let token = client.generate_token(params).expect("Token generation should succeed.");

	assert!(!token.as_str().is_empty());

	let request = client.decode_token(&token).expect("Token should decode.");

	assert_eq!(request.url, "https://www.site.com/page");
	assert_eq!(request.org_cuid.as_ref(), TEST_ORG);
	assert_eq!(request.max_price_micros, 500);
}

#[test]
fn token_round_trips_through_its_string_form() {
	let client = Client::new("secret123-0123456789abcdef", TEST_ORG, TEST_AGENT)
		.expect("Client should build.");
	let token = client
		.generate_token(TokenParams::new("site.com/page", 1))
		.expect("Token generation should succeed.");
	let wire = token.to_string();
	let parsed: Token = wire.parse().expect("Token parsing is infallible.");

	assert_eq!(parsed, token);
	assert!(client.decode_token(&parsed).is_ok());
}

#[test]
fn other_secret_cannot_read_token() {
	let issuer = Client::new("secret-a", TEST_ORG, TEST_AGENT).expect("Issuer should build.");
	let reader = Client::new("secret-b", TEST_ORG, TEST_AGENT).expect("Reader should build.");
	let token = issuer
		.generate_token(TokenParams::new("site.com/page", 1))
		.expect("Token generation should succeed.");

	assert!(matches!(
		reader.decode_token(&token),
		Err(Error::Crypto(CryptoError::Authentication))
	));
}

#[test]
fn codec_handles_arbitrary_payloads() {
	let secret = SecretKey::new("k").expect("Secret should be valid.");
	let sealed = token::encrypt(b"hello world", &secret).expect("Encrypt should succeed.");

	assert_eq!(token::decrypt(&sealed, &secret).expect("Decrypt should succeed."), b"hello world");
}
