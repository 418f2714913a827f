//! In-memory host for headless replay: a UTF-16 document with a caret,
//! marked text, and a candidate display that remembers the visible page.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use sign_core::catalog::SignEntry;
use sign_core::ledger::DocumentReader;
use sign_session::{CandidateDisplay, Point, Rect, TextClient};

/// Height of one line in the replay "window".
const LINE_HEIGHT: f64 = 16.0;

#[derive(Debug, Default)]
pub struct BufferClient {
    units: Vec<u16>,
    marked: Option<Range<usize>>,
    selection: Range<usize>,
}

impl BufferClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole document as a string.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Document with the marked range bracketed and the caret shown as `|`.
    pub fn render(&self) -> String {
        let slice = |r: Range<usize>| String::from_utf16_lossy(&self.units[r]);
        let caret = self.selection.end.min(self.units.len());
        match &self.marked {
            Some(m) => format!(
                "{}[{}]{}",
                slice(0..m.start),
                slice(m.clone()),
                slice(m.end..self.units.len())
            ),
            None => format!(
                "{}|{}",
                slice(0..caret),
                slice(caret..self.units.len())
            ),
        }
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Range<usize> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        let new: Vec<u16> = text.encode_utf16().collect();
        let len = new.len();
        self.units.splice(start..end, new);
        start..start + len
    }

    /// Default backspace of a text view: delete the selection, or the
    /// grapheme before the caret.
    pub fn native_backspace(&mut self) {
        if !self.selection.is_empty() {
            let removed = self.replace(self.selection.clone(), "");
            self.selection = removed;
            return;
        }
        let cursor = self.selection.start.min(self.units.len());
        let before = String::from_utf16_lossy(&self.units[..cursor]);
        if let Some(last) = before.graphemes(true).next_back() {
            let start = cursor - last.encode_utf16().count();
            self.replace(start..cursor, "");
            self.selection = start..start;
        }
    }
}

impl DocumentReader for BufferClient {
    fn substring(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.units.len() {
            return None;
        }
        // Never split a surrogate pair.
        let mut start = range.start;
        if start > 0 && start < self.units.len() && (0xDC00..0xE000).contains(&self.units[start]) {
            start -= 1;
        }
        String::from_utf16(&self.units[start..range.end]).ok()
    }

    fn perceived_length(&self, text: &str) -> usize {
        text.graphemes(true).count()
    }
}

impl TextClient for BufferClient {
    fn insert_text(&mut self, text: &str, replace: Option<Range<usize>>) {
        let range = replace
            .or_else(|| self.marked.clone())
            .unwrap_or_else(|| self.selection.clone());
        let inserted = self.replace(range, text);
        self.marked = None;
        self.selection = inserted.end..inserted.end;
    }

    fn set_marked_text(
        &mut self,
        text: &str,
        _selection: Option<Range<usize>>,
        replace: Option<Range<usize>>,
    ) {
        let range = replace
            .or_else(|| self.marked.clone())
            .unwrap_or_else(|| self.selection.clone());
        let inserted = self.replace(range, text);
        self.marked = (!inserted.is_empty()).then(|| inserted.clone());
        self.selection = inserted.end..inserted.end;
    }

    fn marked_range(&self) -> Option<Range<usize>> {
        self.marked.clone()
    }

    fn selected_range(&self) -> Option<Range<usize>> {
        Some(self.selection.clone())
    }

    fn line_rect(&self) -> Option<Rect> {
        Some(Rect {
            x: 0.0,
            y: LINE_HEIGHT,
            width: 0.0,
            height: LINE_HEIGHT,
        })
    }
}

/// Candidate display that keeps the last page shown.
#[derive(Debug, Default)]
pub struct PageDisplay {
    pub page: Option<(Vec<SignEntry>, usize)>,
}

impl CandidateDisplay for PageDisplay {
    fn show_candidates(&mut self, page: &[SignEntry], highlighted: usize, _origin: Option<Point>) {
        self.page = Some((page.to_vec(), highlighted));
    }

    fn hide_candidates(&mut self) {
        self.page = None;
    }
}
