//! Page geometry, palette and font scale shared by every slide.
//!
//! All positions are EMUs on the 13.333" × 7.5" widescreen page.

use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::{Frame, WIDESCREEN_WIDTH};

/// Left and right page margin (0.5").
pub const MARGIN: i64 = 457_200;
/// Usable width between the margins.
pub const CONTENT_WIDTH: i64 = WIDESCREEN_WIDTH - 2 * MARGIN;
/// Top of the header band (0.35").
pub const HEADER_TOP: i64 = 320_040;
/// Height of the header band: title plus subtitle (1.0").
pub const HEADER_HEIGHT: i64 = 914_400;
/// First usable y below the header band (0.2" clearance).
pub const BODY_TOP: i64 = HEADER_TOP + HEADER_HEIGHT + 182_880;
/// Lowest usable y above the footer strip (7.1").
pub const BODY_BOTTOM: i64 = 6_492_240;
/// Gap between cards in a row (0.25").
pub const GAP: i64 = 228_600;
/// Inner padding of cards (0.15").
pub const CARD_PADDING: i64 = 137_160;

/// Character budget of a roadmap highlight bullet, ellipsis included.
pub const HIGHLIGHT_BUDGET: usize = 48;
/// Highlight bullets shown per roadmap card.
pub const MAX_HIGHLIGHTS: usize = 3;

/// Colour palette as hex RGB.
pub mod palette {
    pub const NAVY: &str = "0F172A";
    pub const INDIGO: &str = "1E3A8A";
    pub const PRIMARY: &str = "2563EB";
    pub const ACCENT: &str = "7C3AED";
    pub const SUCCESS: &str = "16A34A";
    pub const DANGER: &str = "DC2626";
    pub const WARNING: &str = "F59E0B";
    pub const TEAL: &str = "0891B2";
    pub const TEXT: &str = "1E293B";
    pub const MUTED: &str = "64748B";
    pub const SURFACE: &str = "F1F5F9";
    pub const BORDER: &str = "E2E8F0";
    pub const WHITE: &str = "FFFFFF";
    pub const ON_DARK_MUTED: &str = "CBD5E1";

    pub const TABLE_HEADER: &str = INDIGO;
    pub const STRIPE_EVEN: &str = WHITE;
    pub const STRIPE_ODD: &str = "F8FAFC";

    /// Series and slice colours, cycled in order.
    pub const SERIES: [&str; 6] = [PRIMARY, ACCENT, SUCCESS, WARNING, TEAL, DANGER];
}

/// Font scale in points.
pub mod font {
    pub const FACE: &str = "Calibri";
    pub const HERO: f64 = 48.0;
    pub const TITLE: f64 = 28.0;
    pub const SUBTITLE: f64 = 14.0;
    pub const METRIC: f64 = 24.0;
    pub const HEADING: f64 = 15.0;
    pub const BODY: f64 = 12.0;
    pub const SMALL: f64 = 10.5;
    pub const CAPTION: f64 = 9.0;
    pub const TABLE: f64 = 11.0;
}

/// Split `total` EMUs into `n` equal widths separated by `gap`.
///
/// Returns `(offset, width)` pairs relative to the start of the span. The
/// widths plus gaps fall short of `total` by less than one EMU per item.
///
/// # Examples
///
/// ```
/// use scaleup_deck::deck::layout::distribute;
///
/// let cells = distribute(3, 1000, 50);
/// assert_eq!(cells, vec![(0, 300), (350, 300), (700, 300)]);
/// ```
pub fn distribute(n: usize, total: i64, gap: i64) -> Vec<(i64, i64)> {
    if n == 0 {
        return Vec::new();
    }
    let count = n as i64;
    let width = ((total - gap * (count - 1)) / count).max(0);
    (0..count).map(|i| (i * (width + gap), width)).collect()
}

/// A row of `n` equal frames spanning the content width.
pub fn card_row(n: usize, top: i64, height: i64) -> Vec<Frame> {
    distribute(n, CONTENT_WIDTH, GAP)
        .into_iter()
        .map(|(offset, width)| Frame::new(MARGIN + offset, top, width, height))
        .collect()
}

/// Two side-by-side frames splitting the content width at `fraction`.
pub fn split_columns(fraction: f64, top: i64, height: i64) -> (Frame, Frame) {
    let left_width = ((CONTENT_WIDTH - GAP) as f64 * fraction.clamp(0.0, 1.0)).round() as i64;
    let right_width = CONTENT_WIDTH - GAP - left_width;
    (
        Frame::new(MARGIN, top, left_width, height),
        Frame::new(MARGIN + left_width + GAP, top, right_width, height),
    )
}

/// Frame from inches, for fixed decorations.
#[inline]
pub fn at_inches(x: f64, y: f64, width: f64, height: f64) -> Frame {
    Frame::new(
        inches_to_emu(x),
        inches_to_emu(y),
        inches_to_emu(width),
        inches_to_emu(height),
    )
}

/// Shorten `text` to at most `budget` characters.
///
/// Longer text keeps `budget - 1` characters followed by `…`.
///
/// # Examples
///
/// ```
/// use scaleup_deck::deck::layout::truncate;
///
/// assert_eq!(truncate("Launch in 20 cities", 10), "Launch in…");
/// assert_eq!(truncate("Short", 10), "Short");
/// ```
pub fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(budget - 1).collect();
    out.push('…');
    out
}
