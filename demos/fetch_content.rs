//! Demonstrates generating a licensing token, fetching licensed content, and quoting a rate with
//! the default reqwest transport against a local mock of the licensing API.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use tollbit_client::{client::Client, license::TokenParams, url::Url};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let content_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dev/v1/content/site.com/page").header_exists("TollbitToken");
			then.status(200).header("content-type", "application/json").body(
				r#"[{"content":{"header":"","main":"Licensed article body.","footer":""},"metadata":"","rate":{"priceMicros":500,"currency":"USD","licenseType":"ON_DEMAND_LICENSE","licensePath":"","error":""}}]"#,
			);
		})
		.await;
	let rate_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/dev/v1/rate/site.com/page");
			then.status(200).header("content-type", "application/json").body(
				r#"[{"priceMicros":500,"currency":"USD","licenseType":"ON_DEMAND_LICENSE","licensePath":"","error":""}]"#,
			);
		})
		.await;
	let client = Client::new("demo-secret", "org-demo", "DemoBot")?
		.with_api_base(Url::parse(&server.url("/dev/v1/"))?)?;
	let rate = client
		.get_rate(tokio::time::sleep(Duration::from_secs(5)), "https://www.site.com/page")
		.await?;

	println!(
		"Quoted {} micro-{} for a {} license.",
		rate.price_micros, rate.currency, rate.license_type
	);

	let content = client
		.get_content(
			tokio::time::sleep(Duration::from_secs(5)),
			TokenParams::new("https://www.site.com/page", rate.price_micros),
		)
		.await?;

	println!("Licensed content: {}", content.content.main);

	rate_mock.assert_async().await;
	content_mock.assert_async().await;

	Ok(())
}
