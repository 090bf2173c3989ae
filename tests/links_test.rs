//! Integration tests for link extraction and overlay geometry, driven
//! end-to-end from upstream JSON.

use teksti::{
    get_link_pages, link_regions, parse_str, screen_height, ScreenRatio, DEFAULT_LINK_PAGES,
};

fn document_with_structured_lines(page: &str, lines_json: &str) -> String {
    format!(
        r#"{{ "teletext": {{ "network": "1", "xml": "x", "page": {{
            "number": "{page}", "name": "Test", "subpagecount": "1",
            "subpage": [ {{ "number": "1", "content": [
                {{ "type": "structured", "line": [{lines_json}] }}
            ] }} ]
        }} }} }}"#
    )
}

#[test]
fn test_links_extracted_across_lines() {
    // line 1 has no links, line 2 carries one run of length 10 linking to 200
    let json = document_with_structured_lines(
        "150",
        r#"{ "number": "0", "run": [ { "bg": "b", "fg": "w", "length": "40" } ] },
           { "number": "1", "run": [ { "bg": "b", "fg": "w", "length": "10", "link": "200" } ] }"#,
    );
    let response = parse_str(&json).unwrap();

    let links = get_link_pages("150", "1", Some(&response));
    assert!(links.contains(&"200".to_string()));
    assert!(links.contains(&"100".to_string()));
    assert!(!links.contains(&"150".to_string()));
}

#[test]
fn test_linkless_structured_content_returns_defaults() {
    let json = document_with_structured_lines(
        "150",
        r#"{ "number": "0", "run": [ { "bg": "b", "fg": "w", "length": "40" } ] }"#,
    );
    let response = parse_str(&json).unwrap();

    assert_eq!(
        get_link_pages("150", "1", Some(&response)),
        DEFAULT_LINK_PAGES
    );
}

#[test]
fn test_collapsed_run_links_are_extracted() {
    let json = document_with_structured_lines(
        "150",
        r#"{ "number": "0", "run": { "bg": "b", "fg": "w", "length": "3", "link": "321" } },
           { "number": "1", "run": [ { "bg": "b", "fg": "w", "length": "3", "link": "234" } ] }"#,
    );
    let response = parse_str(&json).unwrap();

    assert_eq!(
        get_link_pages("150", "1", Some(&response)),
        ["100", "234", "321"]
    );
}

#[test]
fn test_link_regions_align_with_screen_height() {
    let json = document_with_structured_lines(
        "150",
        r#"{ "number": "0", "run": [
               { "bg": "b", "fg": "w", "length": "10" },
               { "bg": "b", "fg": "w", "length": "5", "link": "200" },
               { "bg": "b", "fg": "w", "length": "25" }
           ] },
           { "number": "1", "run": [ { "bg": "b", "fg": "w", "length": "40" } ] }"#,
    );
    let response = parse_str(&json).unwrap();
    let structured = response.page.sub_pages[0].structured().unwrap();

    // the overlay must use the same constrained height as the image
    let view_width = 400.0;
    let height = screen_height(ScreenRatio::FourByThree, 1000.0, view_width, false);
    let regions = link_regions(structured, view_width, height);

    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert_eq!(region.page, "200");

    let row_height = height / 2.0;
    let link_width = view_width * 3.0 / 40.0;
    assert!((region.height - row_height).abs() < 1e-3);
    assert!((region.top - 0.0).abs() < 1e-3);
    assert!((region.width - link_width).abs() < 1e-3);
    // cursor after the linked run sits at cell 15
    assert!((region.left - (view_width * 15.0 / 40.0 - link_width)).abs() < 1e-3);
}

#[test]
fn test_blacklisted_page_skips_extraction_end_to_end() {
    let json = document_with_structured_lines(
        "174",
        r#"{ "number": "0", "run": [ { "bg": "b", "fg": "w", "length": "3", "link": "300" } ] }"#,
    );
    let response = parse_str(&json).unwrap();

    assert_eq!(
        get_link_pages("174", "1", Some(&response)),
        DEFAULT_LINK_PAGES
    );
}
