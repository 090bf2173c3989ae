//! # teksti
//!
//! Teletext page content library for Rust.
//!
//! This library normalizes the loosely-typed JSON documents of a teletext
//! content service into a strict page model, and derives everything a
//! client front-end needs from that model: the outgoing links of a page,
//! the tap regions those links occupy on the rendered image, and the
//! aspect-ratio-constrained height of the image itself.
//!
//! ## Quick Start
//!
//! ```
//! use teksti::{get_link_pages, parse_str};
//!
//! let json = r#"{ "teletext": { "network": "1", "xml": "100.xml", "page": {
//!     "number": "100", "name": "Start", "subpagecount": "1", "subpage": []
//! } } }"#;
//!
//! let response = parse_str(json).unwrap();
//!
//! // Links to show in the link bar for page 100, sub-page 1
//! let links = get_link_pages("100", "1", Some(&response));
//! assert_eq!(links, ["100", "200", "300", "400", "800"]);
//! ```
//!
//! ## Design
//!
//! - **Mapping**: singular-vs-array run ambiguity and string-vs-number
//!   scalars are resolved once, at the deserialization boundary
//! - **Totality**: sparse input maps to empty values, never to errors;
//!   only a document without its `teletext.page` nesting fails
//! - **Purity**: every function here is a synchronous computation over its
//!   arguments, safe to call from any render pass without memoization
//!
//! Fetching, caching, persisted settings, and screen composition are the
//! embedding client's concern.

pub mod error;
pub mod geometry;
pub mod links;
pub mod mapper;
pub mod model;
pub mod nav;
pub mod service;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{format_lines, link_regions, screen_height, LinkRegion, RunPosition, ScreenRatio};
pub use links::{get_link_pages, DEFAULT_LINK_PAGES};
pub use mapper::{map_document, RawDocument};
pub use model::{ContentType, Line, Page, Response, Run, SubPage, SubPageContent};
pub use nav::{is_blacklisted_page, is_valid_page, step_sub_page, Direction};
pub use service::ServiceConfig;

/// Parse an upstream JSON document from a string.
///
/// # Example
///
/// ```
/// let json = r#"{ "teletext": { "network": "1", "xml": "p.xml", "page": {
///     "number": "100", "name": "Start", "subpagecount": "1", "subpage": []
/// } } }"#;
///
/// let response = teksti::parse_str(json).unwrap();
/// assert_eq!(response.page.number, "100");
/// ```
pub fn parse_str(input: &str) -> Result<Response> {
    let raw: RawDocument = serde_json::from_str(input)?;
    map_document(raw)
}

/// Parse an upstream JSON document from bytes.
pub fn parse_bytes(input: &[u8]) -> Result<Response> {
    let raw: RawDocument = serde_json::from_slice(input)?;
    map_document(raw)
}

/// Parse an already-deserialized upstream JSON value.
pub fn parse_value(value: serde_json::Value) -> Result<Response> {
    let raw: RawDocument = serde_json::from_value(value)?;
    map_document(raw)
}
