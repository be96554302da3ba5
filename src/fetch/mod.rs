mod basic;
mod client;
mod token;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use token::LoadToken;

use anyhow::{Context, Result};
use tracing::debug;

use crate::parser::parse_feed;
use crate::ranking::types::Dataset;
use crate::schema::FeedSchema;

pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    Ok(resp.bytes().await?.to_vec())
}

/// Performs one full feed load: fetch, parse, normalize through `schema`.
///
/// Returns `Ok(None)` when `token` was revoked while the load was in flight;
/// the caller keeps its prior dataset and the late result is dropped. There
/// is no retry policy; a failed load must be re-issued by the caller.
///
/// # Errors
///
/// Network and parse failures surface as a single user-facing load error;
/// neither is fatal to the caller.
pub async fn load_feed<C: HttpClient>(
    client: &C,
    url: &str,
    schema: &FeedSchema,
    token: &LoadToken,
) -> Result<Option<Dataset>> {
    let bytes = fetch_bytes(client, url)
        .await
        .context("failed to load data, retry shortly")?;
    debug!(bytes = bytes.len(), "feed bytes received, parsing");

    let dataset = parse_feed(&bytes, schema).context("failed to load data, retry shortly")?;

    if !token.is_live() {
        debug!(url, "load superseded, discarding result");
        return Ok(None);
    }

    Ok(Some(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Transport that answers every request with a fixed body, standing in
    /// for the remote feed.
    struct FixedBody(&'static [u8]);

    #[async_trait]
    impl HttpClient for FixedBody {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            Ok(http::Response::new(self.0.to_vec()).into())
        }
    }

    const FEED_BODY: &[u8] = br#"[
        {"Influencer ID": "influencer-0000-01", "1st_total": "40"},
        {"Influencer ID": "influencer-0000-02", "1st_total": 25}
    ]"#;

    #[tokio::test]
    async fn test_fetch_bytes_returns_body() {
        let client = FixedBody(b"hello");
        let bytes = fetch_bytes(&client, "http://feed.test/data").await.unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[tokio::test]
    async fn test_load_feed_commits_while_token_live() {
        let client = FixedBody(FEED_BODY);
        let token = LoadToken::new();

        let dataset = load_feed(&client, "http://feed.test/data", &FeedSchema::default(), &token)
            .await
            .unwrap()
            .expect("live token keeps the result");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].id, "influencer-0000-01");
        assert_eq!(dataset[0].metric("1st_total"), 40.0);
    }

    #[tokio::test]
    async fn test_load_feed_discards_superseded_result() {
        let client = FixedBody(FEED_BODY);
        let token = LoadToken::new();
        token.revoke();

        let result = load_feed(&client, "http://feed.test/data", &FeedSchema::default(), &token)
            .await
            .unwrap();

        // the load itself succeeded, but the view moved on
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_load_feed_parse_failure_surfaces_user_message() {
        let client = FixedBody(b"<html>not a feed</html>");
        let token = LoadToken::new();

        let err = load_feed(&client, "http://feed.test/data", &FeedSchema::default(), &token)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to load data, retry shortly"));
    }
}
