//! Layout geometry for the rendered page.
//!
//! Two independent pure computations: the horizontal hit-regions for link
//! runs on a rendered line, and the aspect-ratio-constrained height of the
//! page image. Both take viewport dimensions as plain parameters; neither
//! reads any ambient state.

use crate::model::{Run, SubPageContent};
use crate::nav::is_valid_page;
use serde::{Deserialize, Serialize};

/// Nominal width of a rendered line in character cells.
pub const LINE_CELLS: f32 = 40.0;

/// Width of a tappable link glyph, in character cells.
const LINK_CELLS: f32 = 3.0;

/// A link-carrying run and the horizontal cursor position after it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPosition<'a> {
    /// The run whose link passed page validation
    pub run: &'a Run,

    /// Cumulative cell width of this run and all runs before it on the line
    pub position_horizontal: u32,
}

/// Walk a line's runs and emit the position of every navigable link.
///
/// The cursor advances by every run's cell length whether or not that run
/// is emitted, so an emitted position always reflects the full width of
/// the line up to and including its run. Runs whose link fails page
/// validation are skipped; a link-like token is not necessarily a
/// navigable destination.
pub fn format_lines(runs: &[Run]) -> Vec<RunPosition<'_>> {
    let mut cursor = 0u32;

    runs.iter()
        .filter_map(|run| {
            cursor += run.cell_length();

            match run.link.as_deref() {
                Some(link) if is_valid_page(link) => Some(RunPosition {
                    run,
                    position_horizontal: cursor,
                }),
                _ => None,
            }
        })
        .collect()
}

/// A tappable rectangle over the rendered page image, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRegion {
    /// Destination page number
    pub page: String,

    /// Distance from the left edge of the rendered line
    pub left: f32,

    /// Distance from the top of the rendered content
    pub top: f32,

    /// Region width
    pub width: f32,

    /// Region height
    pub height: f32,
}

/// Compute the tap regions for every navigable link in `content`.
///
/// `view_width` is the rendered pixel width of a line and `content_height`
/// the rendered pixel height of the whole page image. The latter must be
/// the same value the image renderer used (see [`screen_height`]) or the
/// regions drift off the glyphs they cover. Each line is assumed to span
/// [`LINE_CELLS`] character cells; links are approximated as
/// three-cell-wide glyphs ending at their run's cursor position.
pub fn link_regions(
    content: &SubPageContent,
    view_width: f32,
    content_height: f32,
) -> Vec<LinkRegion> {
    let rows = content.line_count().max(1) as f32;
    let row_height = content_height / rows;
    let link_width = view_width * (LINK_CELLS / LINE_CELLS);

    content
        .line
        .iter()
        .enumerate()
        .flat_map(|(index, line)| {
            format_lines(&line.run)
                .into_iter()
                .map(move |position| LinkRegion {
                    page: position.run.link.clone().unwrap_or_default(),
                    left: view_width * (position.position_horizontal as f32 / LINE_CELLS)
                        - link_width,
                    top: row_height * index as f32,
                    width: link_width,
                    height: row_height,
                })
        })
        .collect()
}

/// Aspect ratio applied to the rendered page image in portrait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRatio {
    /// Fill the available height
    #[default]
    #[serde(rename = "full")]
    Full,
    /// Height is width times the golden ratio
    #[serde(rename = "goldenRatio")]
    GoldenRatio,
    #[serde(rename = "16:9")]
    SixteenByNine,
    #[serde(rename = "4:3")]
    FourByThree,
    #[serde(rename = "3:2")]
    ThreeByTwo,
    #[serde(rename = "1:1")]
    Square,
}

impl ScreenRatio {
    /// Parse a settings name, falling back to [`ScreenRatio::Full`] for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "goldenRatio" => Self::GoldenRatio,
            "16:9" => Self::SixteenByNine,
            "4:3" => Self::FourByThree,
            "3:2" => Self::ThreeByTwo,
            "1:1" => Self::Square,
            _ => Self::Full,
        }
    }

    /// Width-to-height multiplier, `None` for the unconstrained ratio.
    fn multiplier(self) -> Option<f32> {
        match self {
            Self::Full => None,
            Self::GoldenRatio => Some(1.618033),
            Self::SixteenByNine => Some(16.0 / 9.0),
            Self::FourByThree => Some(4.0 / 3.0),
            Self::ThreeByTwo => Some(3.0 / 2.0),
            Self::Square => Some(1.0),
        }
    }
}

/// Height of the rendered page image under the chosen aspect ratio.
///
/// Landscape and [`ScreenRatio::Full`] use the full `view_height`.
/// Otherwise the height is `width` times the ratio's multiplier, capped at
/// `view_height` so the image never exceeds the viewport.
pub fn screen_height(ratio: ScreenRatio, view_height: f32, width: f32, is_landscape: bool) -> f32 {
    if is_landscape {
        return view_height;
    }

    match ratio.multiplier() {
        Some(multiplier) => {
            let constrained = width * multiplier;
            if constrained < view_height {
                constrained
            } else {
                view_height
            }
        }
        None => view_height,
    }
}
