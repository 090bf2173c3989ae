//! Upstream document mapping.
//!
//! The upstream service delivers a loosely-typed JSON document: scalars may
//! arrive as strings or numbers, optional fields come and go, and a line
//! with a single run is collapsed to a bare object instead of a one-element
//! array. This module owns all of those coercions. The raw shape is
//! resolved exactly once here; nothing downstream ever re-checks it.

use crate::error::{Error, Result};
use crate::model::{ContentType, Line, Page, Response, Run, SubPage, SubPageContent};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The raw upstream document, pre-normalization.
///
/// Deserializes from `{ "teletext": { "network", "xml", "page": { ... } } }`.
/// Every field is optional at this stage; [`map_document`] decides what is
/// actually mandatory.
#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    teletext: Option<RawTeletext>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTeletext {
    #[serde(default, deserialize_with = "loose_string")]
    network: String,
    #[serde(default, deserialize_with = "loose_string")]
    xml: String,
    #[serde(default)]
    page: Option<RawPage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    #[serde(default, deserialize_with = "loose_string")]
    number: String,
    #[serde(default, deserialize_with = "loose_string")]
    name: String,
    #[serde(default, deserialize_with = "loose_string")]
    time: String,
    #[serde(default, rename = "subpagecount", deserialize_with = "loose_string")]
    sub_page_count: String,
    #[serde(default, rename = "nextpg", deserialize_with = "loose_opt_string")]
    next_page: Option<String>,
    #[serde(default, rename = "prevpg", deserialize_with = "loose_opt_string")]
    prev_page: Option<String>,
    #[serde(default, rename = "toptype", deserialize_with = "loose_string")]
    top_type: String,
    #[serde(default, deserialize_with = "loose_string")]
    animated: String,
    #[serde(default, rename = "subpage")]
    sub_pages: Vec<RawSubPage>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSubPage {
    #[serde(default, deserialize_with = "loose_string")]
    number: String,
    #[serde(default, deserialize_with = "loose_string")]
    time: String,
    #[serde(default)]
    content: Vec<RawContent>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContent {
    #[serde(default, rename = "type", deserialize_with = "loose_string")]
    content_type: String,
    #[serde(default)]
    line: Vec<RawLine>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLine {
    #[serde(default, deserialize_with = "loose_string")]
    number: String,
    #[serde(default, rename = "Text", deserialize_with = "loose_opt_string")]
    text: Option<String>,
    #[serde(default)]
    run: Option<RawRuns>,
}

/// Run payload of a line, disambiguated at the deserialization boundary.
///
/// The upstream serializer collapses a single-run line to a bare object
/// carrying `bg`/`fg` directly, instead of a one-element array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuns {
    Many(Vec<RawRun>),
    One(RawRun),
}

#[derive(Debug, Default, Deserialize)]
struct RawRun {
    #[serde(default, rename = "bg", deserialize_with = "loose_string")]
    background: String,
    #[serde(default, rename = "fg", deserialize_with = "loose_string")]
    foreground: String,
    #[serde(default, rename = "charcode", deserialize_with = "loose_opt_string")]
    char_code: Option<String>,
    #[serde(default, deserialize_with = "loose_opt_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "loose_opt_string")]
    size: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    length: String,
    #[serde(default, rename = "Text", deserialize_with = "loose_opt_string")]
    text: Option<String>,
}

/// Accept a string, number, bool, or null where a string is expected.
fn loose_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn loose_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

/// Map a raw upstream document to the normalized [`Response`].
///
/// Fails with [`Error::MissingPage`] only when the `teletext.page` nesting
/// is entirely absent. Sparse documents map to empty strings, `None`, and
/// empty sequences rather than errors. Sub-pages, content entries, and
/// lines are traversed positionally with order preserved; nothing is sorted
/// or de-duplicated at this stage.
pub fn map_document(raw: RawDocument) -> Result<Response> {
    let teletext = raw.teletext.ok_or(Error::MissingPage)?;
    let page = teletext.page.ok_or(Error::MissingPage)?;

    Ok(Response {
        network: teletext.network,
        xml: teletext.xml,
        page: map_page(page),
    })
}

fn map_page(page: RawPage) -> Page {
    Page {
        number: page.number,
        name: page.name,
        time: page.time,
        sub_page_count: page.sub_page_count,
        next_page: page.next_page,
        prev_page: page.prev_page,
        top_type: page.top_type,
        animated: page.animated,
        sub_pages: page.sub_pages.into_iter().map(map_sub_page).collect(),
    }
}

fn map_sub_page(sub_page: RawSubPage) -> SubPage {
    SubPage {
        number: sub_page.number,
        time: sub_page.time,
        content: sub_page.content.into_iter().map(map_content).collect(),
    }
}

fn map_content(content: RawContent) -> SubPageContent {
    let content_type = match content.content_type.as_str() {
        "text" => ContentType::Text,
        "all" => ContentType::All,
        "structured" => ContentType::Structured,
        other => {
            log::debug!("unknown content type {:?}", other);
            ContentType::Other
        }
    };

    SubPageContent {
        content_type,
        line: content.line.into_iter().map(map_line).collect(),
    }
}

fn map_line(line: RawLine) -> Line {
    Line {
        number: line.number,
        text: line.text,
        run: map_runs(line.run),
    }
}

/// Normalize the run payload to a sequence. A collapsed single run becomes
/// a one-element sequence; an absent payload becomes an empty one.
fn map_runs(runs: Option<RawRuns>) -> Vec<Run> {
    match runs {
        None => Vec::new(),
        Some(RawRuns::One(run)) => vec![map_run(run)],
        Some(RawRuns::Many(runs)) => runs.into_iter().map(map_run).collect(),
    }
}

fn map_run(run: RawRun) -> Run {
    Run {
        background: run.background,
        foreground: run.foreground,
        char_code: run.char_code,
        link: run.link,
        size: run.size,
        length: run.length,
        text: run.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_value(value: Value) -> Result<Response> {
        let raw: RawDocument = serde_json::from_value(value)?;
        map_document(raw)
    }

    #[test]
    fn test_missing_page_is_an_error() {
        assert!(matches!(map_value(json!({})), Err(Error::MissingPage)));
        assert!(matches!(
            map_value(json!({ "teletext": {} })),
            Err(Error::MissingPage)
        ));
    }

    #[test]
    fn test_empty_page_maps_without_error() {
        let response = map_value(json!({ "teletext": { "page": {} } })).unwrap();
        assert_eq!(response.page.number, "");
        assert!(response.page.sub_pages.is_empty());
        assert!(response.page.next_page.is_none());
    }

    #[test]
    fn test_field_renames() {
        let response = map_value(json!({
            "teletext": {
                "network": "1",
                "xml": "src.xml",
                "page": {
                    "number": "101",
                    "name": "News",
                    "time": "2024-01-01T10:00:00",
                    "subpagecount": "3",
                    "nextpg": "102",
                    "prevpg": "100",
                    "toptype": "page",
                    "animated": "N"
                }
            }
        }))
        .unwrap();

        let page = &response.page;
        assert_eq!(page.sub_page_count, "3");
        assert_eq!(page.next_page.as_deref(), Some("102"));
        assert_eq!(page.prev_page.as_deref(), Some("100"));
        assert_eq!(page.top_type, "page");
        assert_eq!(page.sub_page_count(), 3);
    }

    #[test]
    fn test_single_run_object_equals_one_element_array() {
        let run = json!({ "bg": "blue", "fg": "white", "length": "8", "Text": "UUTISET" });

        let collapsed = map_value(json!({
            "teletext": { "page": { "subpage": [
                { "number": "1", "content": [
                    { "type": "structured", "line": [ { "number": "0", "run": run } ] }
                ] }
            ] } }
        }))
        .unwrap();

        let explicit = map_value(json!({
            "teletext": { "page": { "subpage": [
                { "number": "1", "content": [
                    { "type": "structured", "line": [ { "number": "0", "run": [run] } ] }
                ] }
            ] } }
        }))
        .unwrap();

        assert_eq!(collapsed, explicit);
        let runs = &collapsed.page.sub_pages[0].content[0].line[0].run;
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].background, "blue");
        assert_eq!(runs[0].text.as_deref(), Some("UUTISET"));
    }

    #[test]
    fn test_absent_run_maps_to_empty_sequence() {
        let response = map_value(json!({
            "teletext": { "page": { "subpage": [
                { "number": "1", "content": [
                    { "type": "text", "line": [ { "number": "0", "Text": "plain" } ] }
                ] }
            ] } }
        }))
        .unwrap();

        let line = &response.page.sub_pages[0].content[0].line[0];
        assert_eq!(line.text.as_deref(), Some("plain"));
        assert!(line.run.is_empty());
    }

    #[test]
    fn test_numeric_upstream_scalars_coerce_to_strings() {
        let response = map_value(json!({
            "teletext": { "page": {
                "number": 100,
                "subpagecount": 1,
                "subpage": [ { "number": 1, "content": [
                    { "type": "structured", "line": [
                        { "number": 0, "run": { "bg": "blue", "fg": "white", "length": 12 } }
                    ] }
                ] } ]
            } }
        }))
        .unwrap();

        assert_eq!(response.page.number, "100");
        assert_eq!(response.page.sub_page_count, "1");
        let run = &response.page.sub_pages[0].content[0].line[0].run[0];
        assert_eq!(run.length, "12");
        assert_eq!(run.cell_length(), 12);
    }

    #[test]
    fn test_unknown_content_type_maps_to_other() {
        let response = map_value(json!({
            "teletext": { "page": { "subpage": [
                { "number": "1", "content": [ { "type": "fancy", "line": [] } ] }
            ] } }
        }))
        .unwrap();

        assert_eq!(
            response.page.sub_pages[0].content[0].content_type,
            ContentType::Other
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let response = map_value(json!({
            "teletext": { "page": { "subpage": [
                { "number": "1", "content": [ { "type": "structured", "line": [
                    { "number": "2", "run": [] },
                    { "number": "0", "run": [] },
                    { "number": "1", "run": [] }
                ] } ] }
            ] } }
        }))
        .unwrap();

        let numbers: Vec<&str> = response.page.sub_pages[0].content[0]
            .line
            .iter()
            .map(|l| l.number.as_str())
            .collect();
        assert_eq!(numbers, ["2", "0", "1"]);
    }
}
