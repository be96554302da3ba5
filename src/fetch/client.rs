use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport used by [`super::load_feed`] to reach the feed source.
///
/// Feed loading only ever issues a single GET, so the seam is one method;
/// tests substitute a canned implementation instead of a live server.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
