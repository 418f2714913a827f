//! Paging and selection bookkeeping for the candidate display.

use std::ops::Range;

/// Page size used when settings are not consulted.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The slice of candidates currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Index of the first candidate on the page.
    pub page_start: usize,
    /// Candidate indices shown, `page_start..min(page_start + page_size, N)`.
    pub range: Range<usize>,
    /// Row of the selected candidate within the page.
    pub highlighted: usize,
}

/// Page containing `selected` among `count` candidates.
pub fn visible_page(selected: usize, page_size: usize, count: usize) -> PageView {
    let page_size = page_size.max(1);
    let page_start = selected / page_size * page_size;
    PageView {
        page_start,
        range: page_start..(page_start + page_size).min(count),
        highlighted: selected - page_start,
    }
}

/// Apply a navigation delta, clamping to `[0, count)`. Absent selections
/// stay absent.
pub fn move_selection(selected: Option<usize>, delta: isize, count: usize) -> Option<usize> {
    let selected = selected?;
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let moved = if delta < 0 {
        selected.saturating_sub(delta.unsigned_abs())
    } else {
        selected.saturating_add(delta.unsigned_abs())
    };
    Some(moved.min(last))
}

/// Selection after a fresh ranking: the first candidate, if any.
pub fn initial_selection(count: usize) -> Option<usize> {
    (count > 0).then_some(0)
}

/// Navigation keys and their deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    PageUp,
    PageDown,
}

impl Navigation {
    pub fn delta(self, page_size: usize) -> isize {
        let page = page_size.max(1) as isize;
        match self {
            Self::Previous => -1,
            Self::Next => 1,
            Self::PageUp => -page,
            Self::PageDown => page,
        }
    }
}
