//! Navigation rules.
//!
//! Pure predicates and stepping logic shared by the link extractor and the
//! surrounding page-handling code: page-number validity, the blacklist of
//! pages without usable structured content, and sub-page stepping with
//! wraparound.

/// Pages known to lack usable structured content upstream, beyond the
/// contiguous `176..=189` range.
const BLACKLISTED_PAGES: [&str; 3] = ["237", "173", "174"];

const BLACKLISTED_RANGE_START: u32 = 176;
const BLACKLISTED_RANGE_END: u32 = 190;

/// Whether `input` is a navigable page number.
///
/// True iff the input is exactly 3 ASCII digits with a value in
/// `[100, 900)`. This is the single gate applied before treating any
/// string as a page reference.
pub fn is_valid_page(input: &str) -> bool {
    if input.len() != 3 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    matches!(input.parse::<u32>(), Ok(100..=899))
}

/// Whether `page` is blacklisted for link extraction.
///
/// Consumers fall back to the default link set instead of attempting
/// extraction on these pages.
pub fn is_blacklisted_page(page: &str) -> bool {
    if BLACKLISTED_PAGES.contains(&page) {
        return true;
    }

    (BLACKLISTED_RANGE_START..BLACKLISTED_RANGE_END)
        .map(|n| n.to_string())
        .any(|candidate| candidate == page)
}

/// Direction of a sub-page step, matching the vertical swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the following sub-page
    Next,
    /// Return to the preceding sub-page
    Back,
}

/// Step a 1-based sub-page ordinal with wraparound.
///
/// `Next` wraps `max` to 1, `Back` wraps 1 to `max`. A `current` outside
/// `[1, max]` returns `None`, meaning the caller must leave its navigation
/// state untouched.
pub fn step_sub_page(current: u32, max: u32, direction: Direction) -> Option<u32> {
    if max == 0 {
        return None;
    }

    match direction {
        Direction::Next => {
            if current == max {
                Some(1)
            } else if (1..max).contains(&current) {
                Some(current + 1)
            } else {
                None
            }
        }
        Direction::Back => {
            if current == 1 {
                Some(max)
            } else if (2..=max).contains(&current) {
                Some(current - 1)
            } else {
                None
            }
        }
    }
}
