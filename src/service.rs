//! Upstream endpoint configuration.
//!
//! URL construction for the teletext service. Credentials are explicit
//! construction-time configuration; nothing here reads the environment or
//! performs any fetching — the HTTP client is the caller's concern.

const DEFAULT_BASE_URL: &str = "https://external.api.yle.fi/v1/teletext";

/// Endpoint configuration for the upstream teletext service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    app_id: String,
    app_key: String,
}

impl ServiceConfig {
    /// Configuration against the default upstream service.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }

    /// Point at a different service root, e.g. a test stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the JSON document for `page`.
    pub fn page_url(&self, page: &str) -> String {
        format!(
            "{}/pages/{}.json?app_id={}&app_key={}",
            self.base_url, page, self.app_id, self.app_key
        )
    }

    /// URL of the rendered image for `page` at `sub_page` (1-based, `"1"`
    /// for pages without sub-page variants).
    pub fn image_url(&self, page: &str, sub_page: &str) -> String {
        format!(
            "{}/images/{}/{}.png?app_id={}&app_key={}",
            self.base_url, page, sub_page, self.app_id, self.app_key
        )
    }
}
