//! Top-level response type.

use super::Page;
use serde::{Deserialize, Serialize};

/// A normalized upstream response: one page plus passthrough metadata.
///
/// Built once per successful fetch and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Broadcasting network identifier, passed through untouched
    pub network: String,

    /// Upstream XML source reference, passed through untouched
    pub xml: String,

    /// The requested page
    pub page: Page,
}
