//! Page Layout Engine — owns the vertical write cursor on a fixed A4 canvas
//! and turns letter zones into an ordered list of draw operations.
//!
//! The cursor only ever moves downward. Body lines that would cross the
//! bottom margin are dropped and the composed page is flagged truncated;
//! there is no multi-page overflow handling.

use crate::layout::sections::LetterZones;
use crate::layout::wrap::WrappedLines;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (PDF points, A4)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_PT: f32 = 595.0;
pub const PAGE_HEIGHT_PT: f32 = 842.0;

/// Left/right text margin.
pub const MARGIN_X_PT: f32 = 50.0;
/// The cursor starts this far below the top edge, clearing the letterhead art.
const TOP_OFFSET_PT: f32 = 120.0;
/// Body content stops once the cursor crosses this height.
pub const BOTTOM_MARGIN_PT: f32 = 100.0;

/// Character limit for wrapped body lines.
pub const BODY_LINE_CHARS: usize = 95;

const TEXT_SIZE_PT: f32 = 12.0;
const LINE_SPACING_PT: f32 = 18.0;
const SIGNATURE_SPACING_PT: f32 = 14.0;
const SIGNATURE_GAP_PT: f32 = 50.0;
const SIGNATURE_RIGHT_X_PT: f32 = 350.0;

// ────────────────────────────────────────────────────────────────────────────
// Draw operations
// ────────────────────────────────────────────────────────────────────────────

/// One drawing primitive for the document renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Full-bleed letterhead background; always the first op.
    Background,
    /// Horizontal separator rule from `x1` to `x2` at height `y`.
    Rule { x1: f32, x2: f32, y: f32 },
    /// A line of text with its baseline at `(x, y)`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
    },
}

/// The fully composed page: ordered draw operations plus the overflow flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    pub ops: Vec<DrawOp>,
    /// True when body lines were dropped for lack of vertical space.
    pub truncated: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

struct PageComposer {
    ops: Vec<DrawOp>,
    /// Vertical write cursor, measured up from the page bottom.
    /// Monotonically non-increasing for the lifetime of the composer.
    cursor: f32,
    truncated: bool,
}

impl PageComposer {
    fn new() -> Self {
        Self {
            ops: vec![DrawOp::Background],
            cursor: PAGE_HEIGHT_PT - TOP_OFFSET_PT,
            truncated: false,
        }
    }

    /// Emits a zone separator and advances the cursor past it.
    fn rule(&mut self) {
        self.cursor -= 8.0;
        self.ops.push(DrawOp::Rule {
            x1: MARGIN_X_PT,
            x2: PAGE_WIDTH_PT - MARGIN_X_PT,
            y: self.cursor,
        });
        self.cursor -= 12.0;
    }

    /// Emits one line of text at the cursor, then steps down by `spacing`.
    fn text(&mut self, text: &str, size: f32, indent: f32, spacing: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x: indent,
            y: self.cursor,
            size,
        });
        self.cursor -= spacing;
    }

    fn line(&mut self, text: &str) {
        self.text(text, TEXT_SIZE_PT, MARGIN_X_PT, LINE_SPACING_PT);
    }

    /// Wraps and draws body paragraphs until the bottom margin is reached.
    /// Remaining lines are dropped and the page is flagged truncated.
    fn body(&mut self, paragraphs: &[String]) {
        for paragraph in paragraphs {
            for line in WrappedLines::new(paragraph, BODY_LINE_CHARS) {
                if self.cursor < BOTTOM_MARGIN_PT {
                    self.truncated = true;
                    return;
                }
                self.line(&line);
            }
        }
    }

    fn signature(&mut self, label: &str, x: f32) {
        self.cursor -= SIGNATURE_GAP_PT;
        self.rule();
        self.text(label, TEXT_SIZE_PT, x, SIGNATURE_SPACING_PT);
    }
}

/// Composes the four letter zones into a single page.
///
/// Pure function of the zones: identical input always produces an identical
/// op list, so rendering the same letter twice is byte-stable.
pub fn compose(zones: &LetterZones) -> ComposedPage {
    let mut page = PageComposer::new();

    for line in &zones.recipient {
        page.line(line);
    }
    page.rule();

    for line in &zones.sender {
        page.line(line);
    }
    page.rule();

    for line in &zones.subject {
        page.line(line);
    }
    page.rule();

    page.body(&zones.body);

    page.signature("Signature of Director 1", MARGIN_X_PT);
    page.signature("Signature of Director 2", SIGNATURE_RIGHT_X_PT);

    ComposedPage {
        ops: page.ops,
        truncated: page.truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sections::split_zones;

    fn op_heights(page: &ComposedPage) -> Vec<f32> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Background => None,
                DrawOp::Rule { y, .. } => Some(*y),
                DrawOp::Text { y, .. } => Some(*y),
            })
            .collect()
    }

    fn body_text_heights(page: &ComposedPage) -> Vec<f32> {
        // Body text is everything at the default indent that is not a
        // signature label.
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, y, .. } if !text.starts_with("Signature of") => Some(*y),
                _ => None,
            })
            .collect()
    }

    fn stub_zones() -> crate::layout::sections::LetterZones {
        split_zones(
            "L1\nL2\nL3\nL4\nL5\nL6\nL7\nL8\nL9\nSubject: Dinner\nBody para one.\nBody para two.",
        )
    }

    #[test]
    fn test_background_is_first_op() {
        let page = compose(&stub_zones());
        assert_eq!(page.ops.first(), Some(&DrawOp::Background));
    }

    #[test]
    fn test_cursor_is_monotonically_non_increasing() {
        let heights = op_heights(&compose(&stub_zones()));
        for pair in heights.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "cursor moved upward: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_stub_content_draws_two_signature_lines() {
        let page = compose(&stub_zones());
        let signatures: Vec<&DrawOp> = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { text, .. } if text.starts_with("Signature of")))
            .collect();
        assert_eq!(signatures.len(), 2);
        assert!(matches!(
            signatures[0],
            DrawOp::Text { x, .. } if *x == MARGIN_X_PT
        ));
        assert!(matches!(
            signatures[1],
            DrawOp::Text { x, .. } if *x == SIGNATURE_RIGHT_X_PT
        ));
    }

    #[test]
    fn test_stub_content_draws_all_zone_lines() {
        let page = compose(&stub_zones());
        let texts: Vec<&str> = page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        for expected in [
            "L1",
            "L5",
            "L6",
            "L9",
            "Subject: Dinner",
            "Body para one.",
            "Body para two.",
        ] {
            assert!(texts.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_long_body_is_truncated_at_bottom_margin() {
        let mut zones = stub_zones();
        zones.body = (0..80).map(|i| format!("Paragraph number {i}.")).collect();
        let page = compose(&zones);

        assert!(page.truncated, "80 paragraphs must overflow one page");
        for y in body_text_heights(&page) {
            assert!(
                y >= BOTTOM_MARGIN_PT,
                "body line emitted below the bottom margin at y={y}"
            );
        }
    }

    #[test]
    fn test_short_body_is_not_truncated() {
        let page = compose(&stub_zones());
        assert!(!page.truncated);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let zones = stub_zones();
        assert_eq!(compose(&zones), compose(&zones));
    }

    #[test]
    fn test_empty_zones_still_render_separators_and_signatures() {
        let page = compose(&crate::layout::sections::LetterZones::default());
        let rules = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
            .count();
        // Three zone separators plus one per signature block.
        assert_eq!(rules, 5);
        assert!(!page.truncated);
    }
}
