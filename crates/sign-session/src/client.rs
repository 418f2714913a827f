//! Collaborators outside the core: the host text client and the candidate
//! display.

use std::ops::Range;

use sign_core::catalog::SignEntry;
use sign_core::ledger::DocumentReader;

use crate::types::{Point, Rect};

/// The text-input client owning the document. Offsets and ranges are in
/// UTF-16 code units; `None` for a range means "not available" (or, as a
/// replacement range, "the current selection").
pub trait TextClient: DocumentReader {
    /// Commit `text`, replacing `replace`.
    fn insert_text(&mut self, text: &str, replace: Option<Range<usize>>);

    /// Update the uncommitted composition display. Empty `text` removes it.
    fn set_marked_text(
        &mut self,
        text: &str,
        selection: Option<Range<usize>>,
        replace: Option<Range<usize>>,
    );

    fn marked_range(&self) -> Option<Range<usize>>;

    fn selected_range(&self) -> Option<Range<usize>>;

    /// Line rectangle at the start of the document, used to place the
    /// candidate display.
    fn line_rect(&self) -> Option<Rect> {
        None
    }
}

/// Surface listing candidates to the user. Picks are reported back through
/// [`crate::InputSession::candidate_chosen`].
pub trait CandidateDisplay {
    fn show_candidates(&mut self, page: &[SignEntry], highlighted: usize, origin: Option<Point>);

    fn hide_candidates(&mut self);
}

/// Below the line, with a small gap.
pub(crate) fn origin_hint(client: &dyn TextClient) -> Option<Point> {
    const GAP: f64 = 4.0;
    client.line_rect().map(|rect| Point {
        x: rect.x,
        y: rect.y - GAP,
    })
}
