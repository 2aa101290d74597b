// crates.io
use httpmock::prelude::*;
// self
use tollbit_client::{_preludet::*, license::TokenParams};

fn api_base(server: &MockServer) -> String {
	server.url("/dev/v1/")
}

#[tokio::test]
async fn content_fetch_sends_token_headers_and_returns_first_element() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_base(&server));
	let token = client
		.generate_token(TokenParams::new("https://www.site.com/page", 500))
		.expect("Token generation should succeed.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/dev/v1/content/site.com/page")
				.header("TollbitOrgCuid", TEST_ORG)
				.header("TollbitToken", token.as_str())
				.header("User-Agent", TEST_BOT_AGENT);
			then.status(200).header("content-type", "application/json").body(
				r#"[
					{"content":{"header":"top","main":"hello","footer":"bottom"},"metadata":"{}","rate":{"priceMicros":500,"currency":"USD","licenseType":"ON_DEMAND_LICENSE","licensePath":"/l/1","error":""}},
					{"content":{"main":"ignored"}}
				]"#,
			);
		})
		.await;
	let content = client
		.get_content_with_token(std::future::pending(), &token)
		.await
		.expect("Content fetch should succeed.");

	assert_eq!(content.content.header, "top");
	assert_eq!(content.content.main, "hello");
	assert_eq!(content.content.footer, "bottom");
	assert_eq!(content.rate.license_path, "/l/1");

	mock.assert_async().await;
}

#[tokio::test]
async fn content_fetch_accepts_sparse_elements() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_base(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dev/v1/content/site.com/page").header_exists("TollbitToken");
			then.status(200).body(r#"[{"content":{"main":"hello"}}]"#);
		})
		.await;
	let content = client
		.get_content(std::future::pending(), TokenParams::new("http://site.com/page", 10))
		.await
		.expect("Sparse element with a main body should succeed.");

	assert_eq!(content.content.main, "hello");
	assert!(content.metadata.is_empty());

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_array_and_empty_main_are_not_found() {
	const EMPTY_MAIN: &str =
		r#"[{"content":{"header":"","main":"","footer":""},"metadata":"","rate":{}}]"#;

	for body in ["[]", EMPTY_MAIN] {
		let server = MockServer::start_async().await;
		let client = build_reqwest_test_client(&api_base(&server));
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/dev/v1/content/site.com/page");
				then.status(200).body(body);
			})
			.await;
		let err = client
			.get_content(std::future::pending(), TokenParams::new("https://www.site.com/page", 1))
			.await
			.expect_err("Missing content must fail.");

		assert!(err.is_not_found(), "Unexpected error for {body}: {err:?}");

		mock.assert_async().await;
	}
}

#[tokio::test]
async fn non_array_body_is_malformed() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&api_base(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dev/v1/content/site.com/page");
			then.status(402).body(r#"{"error":"insufficient balance"}"#);
		})
		.await;
	let err = client
		.get_content(std::future::pending(), TokenParams::new("site.com/page", 1))
		.await
		.expect_err("Object body must fail.");

	assert!(matches!(
		err,
		Error::MalformedResponse { endpoint: "content", status: 402, .. }
	));

	mock.assert_async().await;
}
