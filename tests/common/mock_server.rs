//! Mock HTTP server serving palette files.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer with palette helpers
pub struct MockPaletteServer {
    pub server: MockServer,
}

impl MockPaletteServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Serve `body` as plain text on GET `endpoint`
    pub async fn mock_text(&self, endpoint: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "text/plain"),
            )
            .mount(&self.server)
            .await;
    }

    /// Respond with `status` on GET `endpoint`
    pub async fn mock_status(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
