// crates.io
use httpmock::prelude::*;
// self
use tollbit_client::{_preludet::*, response::RateResult};

#[tokio::test]
async fn rate_fetch_returns_first_element_verbatim() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/dev/v1/"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/dev/v1/rate/site.com/page")
				.header("User-Agent", TEST_BOT_AGENT);
			then.status(200).header("content-type", "application/json").body(
				r#"[{"priceMicros":2500,"currency":"USD","licenseType":"ON_DEMAND_LICENSE","licensePath":"https://tollbit.com/l/7","error":""}]"#,
			);
		})
		.await;
	let rate = client
		.get_rate(std::future::pending(), "https://www.site.com/page")
		.await
		.expect("Rate fetch should succeed.");

	assert_eq!(
		rate,
		RateResult {
			price_micros: 2500,
			currency: "USD".into(),
			license_type: "ON_DEMAND_LICENSE".into(),
			license_path: "https://tollbit.com/l/7".into(),
			error: String::new(),
		}
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_rate_array_is_not_found() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.url("/dev/v1/"));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dev/v1/rate/site.com/page");
			then.status(200).body("[]");
		})
		.await;
	let err = client
		.get_rate(std::future::pending(), "site.com/page")
		.await
		.expect_err("Empty array must fail.");

	assert!(err.is_not_found());

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
	let client = build_reqwest_test_client("http://127.0.0.1:1/dev/v1/");
	let err = client
		.get_rate(std::future::pending(), "site.com/page")
		.await
		.expect_err("Closed port must fail.");

	assert!(matches!(err, Error::Transport(_)));
	assert!(!err.is_cancelled());
}
