//! Page-level types.

use serde::{Deserialize, Serialize};

/// A numbered teletext page with its sub-page variants.
///
/// `number` is canonically a 3-digit string such as `"100"`. Upstream
/// delivers most scalar fields as strings (including counts), so they are
/// kept verbatim here and parsed on demand by the typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number, canonically 3 digits (e.g. "100")
    pub number: String,

    /// Human-readable page name
    pub name: String,

    /// Publication timestamp, opaque upstream format
    pub time: String,

    /// Number of sub-pages, string-encoded
    pub sub_page_count: String,

    /// Next page number, absent at the upper range boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,

    /// Previous page number, absent at the lower range boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,

    /// Upstream page classification
    pub top_type: String,

    /// Whether the page carries animated content, string-encoded flag
    pub animated: String,

    /// Sub-pages in order; sub-page N sits at index N-1
    pub sub_pages: Vec<SubPage>,
}

impl Page {
    /// Parsed sub-page count, 0 when the field is not numeric.
    pub fn sub_page_count(&self) -> u32 {
        self.sub_page_count.parse().unwrap_or(0)
    }

    /// Look up a sub-page by its 1-based ordinal string.
    ///
    /// Lookup is positional: sub-page `"2"` is `sub_pages[1]`. Upstream is
    /// expected to keep `sub_pages[i].number == i + 1` but this is not
    /// relied on. Non-numeric or out-of-range ordinals return `None`.
    pub fn sub_page(&self, number: &str) -> Option<&SubPage> {
        let ordinal: usize = number.parse().ok()?;
        self.sub_pages.get(ordinal.checked_sub(1)?)
    }
}

/// One of the sequential variants of a page, cycled via vertical swipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPage {
    /// 1-based ordinal, string-encoded
    pub number: String,

    /// Publication timestamp, opaque upstream format
    pub time: String,

    /// One content entry per type variant the upstream returned
    pub content: Vec<SubPageContent>,
}

impl SubPage {
    /// The structured content variant, if the upstream returned one.
    ///
    /// Only structured content carries per-run link metadata; the link
    /// extractor and layout geometry consult nothing else.
    pub fn structured(&self) -> Option<&SubPageContent> {
        self.content
            .iter()
            .find(|c| c.content_type == ContentType::Structured)
    }
}

/// One content rendition of a sub-page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPageContent {
    /// Which rendition this entry is
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Lines in display order
    pub line: Vec<Line>,
}

impl SubPageContent {
    /// Number of lines in this rendition.
    pub fn line_count(&self) -> usize {
        self.line.len()
    }
}

/// Content rendition variants the upstream service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain text lines
    Text,
    /// Combined rendition
    All,
    /// Lines broken into styled runs with link metadata
    Structured,
    /// Anything the upstream adds that this model does not know about
    #[serde(other)]
    Other,
}

/// A single display line, either literal text or a run sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Line ordinal, string-encoded
    pub number: String,

    /// Literal text, present in the plain-text renditions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Styled runs in order; empty (never absent) when the line is plain
    #[serde(default)]
    pub run: Vec<Run>,
}

/// The smallest styled text unit inside a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Background color code
    pub background: String,

    /// Foreground color code
    pub foreground: String,

    /// Glyph character code, when the run is a drawing glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_code: Option<String>,

    /// Candidate page reference. Not guaranteed to be a valid 3-digit page
    /// number; validate with [`crate::nav::is_valid_page`] before use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Font size hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Width of this run in character cells, string-encoded
    pub length: String,

    /// Literal run text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Run {
    /// Width of this run in character cells, 0 when not numeric.
    pub fn cell_length(&self) -> u32 {
        self.length.parse().unwrap_or(0)
    }
}
