use super::client::HttpClient;
use async_trait::async_trait;

/// The production [`HttpClient`]: a plain `reqwest::Client` with default
/// settings. Performance feeds are public, so no auth or special headers
/// are layered on.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
