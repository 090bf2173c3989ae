//! Link extraction for the link bar.
//!
//! Derives the ordered, de-duplicated list of outgoing page numbers from a
//! sub-page's structured content. Whenever extraction cannot produce a
//! meaningful result the fixed default hub set is returned instead; the
//! link bar always has something to show.

use crate::model::Response;
use crate::nav::is_blacklisted_page;

/// The hub pages shown whenever extraction yields nothing usable.
pub const DEFAULT_LINK_PAGES: [&str; 5] = ["100", "200", "300", "400", "800"];

/// The home page, always reachable from every link bar.
const HOME_PAGE: &str = "100";

fn default_links() -> Vec<String> {
    DEFAULT_LINK_PAGES.iter().map(|p| p.to_string()).collect()
}

/// Collect the link pages to show for `page` at sub-page `sub_page_number`.
///
/// Walks the structured content's runs in line order then run order,
/// gathers their link targets, appends the home page, drops non-numeric
/// candidates, de-duplicates, sorts, and removes the current page.
///
/// The sort is lexicographic on the page-number strings rather than
/// numeric, for output parity with the upstream client.
///
/// Falls back to [`DEFAULT_LINK_PAGES`] when the page is blacklisted, the
/// response is absent, the sub-page or its structured content is missing,
/// or extraction leaves exactly one link (a single-link bar is treated as
/// a failure signal, not a result).
pub fn get_link_pages(
    page: &str,
    sub_page_number: &str,
    response: Option<&Response>,
) -> Vec<String> {
    if is_blacklisted_page(page) {
        return default_links();
    }

    let structured = response
        .and_then(|r| r.page.sub_page(sub_page_number))
        .and_then(|sub_page| sub_page.structured());

    let Some(structured) = structured else {
        return default_links();
    };

    let mut links: Vec<String> = structured
        .line
        .iter()
        .flat_map(|line| line.run.iter())
        .filter_map(|run| run.link.clone())
        .filter(|link| !link.is_empty())
        .collect();

    links.push(HOME_PAGE.to_string());
    links.retain(|link| link.parse::<f64>().is_ok());
    links.sort();
    links.dedup();
    links.retain(|link| link != page);

    if links.len() == 1 {
        log::debug!("degenerate link set for page {page}, using defaults");
        return default_links();
    }

    links
}
