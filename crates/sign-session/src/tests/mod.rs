mod backspace;

use std::ops::Range;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use sign_core::catalog::{SignCatalog, SignEntry};
use sign_core::ledger::DocumentReader;

use super::{CandidateDisplay, InputSession, KeyEvent, KeyResponse, Point, Rect, TextClient};

pub(super) const SIGN_LIST: &str = r#""ṣa"="𒊓"
"ṣa3"="𒍝"
"ṣab"="𒂟"
"ṣaḫ"="𒄩"
"ṣaḫ5"="𒄭"
"an"="𒀭"
"ŋeštug"="𒄑𒉿𒆠"
"ŋeš"="𒄑"
"xabzl1"="𒀸"
"#;

/// Catalog with a few real values plus `ba`, `ba1` … `ba24` for paging.
pub(super) fn make_test_catalog() -> Arc<SignCatalog> {
    let mut content = SIGN_LIST.to_string();
    content.push_str("\"ba\"=\"𒁀\"\n");
    for i in 1..25 {
        content.push_str(&format!("\"ba{i}\"=\"𒁀\"\n"));
    }
    Arc::new(SignCatalog::parse(&content))
}

pub(super) fn make_session() -> InputSession<RecordingDisplay> {
    InputSession::with_limits(make_test_catalog(), RecordingDisplay::default(), 10, 128)
}

/// Display double remembering what is on screen.
#[derive(Debug, Default)]
pub(super) struct RecordingDisplay {
    pub visible: Option<(Vec<SignEntry>, usize)>,
    pub origin: Option<Point>,
    pub show_count: usize,
}

impl CandidateDisplay for RecordingDisplay {
    fn show_candidates(&mut self, page: &[SignEntry], highlighted: usize, origin: Option<Point>) {
        self.visible = Some((page.to_vec(), highlighted));
        self.origin = origin;
        self.show_count += 1;
    }

    fn hide_candidates(&mut self) {
        self.visible = None;
    }
}

/// Host double: a UTF-16 document with marked text and a caret selection.
/// Characters are counted as extended grapheme clusters.
pub(super) struct MockClient {
    units: Vec<u16>,
    marked: Option<Range<usize>>,
    selection: Range<usize>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Document holding `text` with the caret at its end.
    pub fn with_text(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        let end = units.len();
        Self {
            units,
            marked: None,
            selection: end..end,
        }
    }

    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn cursor(&self) -> usize {
        self.selection.start
    }

    pub fn select(&mut self, range: Range<usize>) {
        self.selection = range;
    }

    /// Replace `range` with `text`, returning the range now holding `text`.
    fn replace(&mut self, range: Range<usize>, text: &str) -> Range<usize> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        let new: Vec<u16> = text.encode_utf16().collect();
        let len = new.len();
        self.units.splice(start..end, new);
        start..start + len
    }

    /// An edit the session does not make itself, e.g. a paste.
    pub fn insert_external(&mut self, point: usize, text: &str) {
        let inserted = self.replace(point..point, text);
        self.selection = inserted.end..inserted.end;
    }

    /// Host default backspace: delete the selection, or the character
    /// before the caret.
    pub fn native_backspace(&mut self) {
        if !self.selection.is_empty() {
            let removed = self.replace(self.selection.clone(), "");
            self.selection = removed.clone();
            return;
        }
        let cursor = self.cursor();
        let before = String::from_utf16_lossy(&self.units[..cursor]);
        let Some(last) = before.graphemes(true).next_back() else {
            return;
        };
        let start = cursor - last.encode_utf16().count();
        self.replace(start..cursor, "");
        self.selection = start..start;
    }
}

impl DocumentReader for MockClient {
    fn substring(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.units.len() {
            return None;
        }
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

impl TextClient for MockClient {
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
            x: 10.0,
            y: 100.0,
            width: 200.0,
            height: 16.0,
        })
    }
}

/// Simulate typing a string one character at a time.
pub(super) fn type_string(
    session: &mut InputSession<RecordingDisplay>,
    client: &mut MockClient,
    s: &str,
) -> Vec<KeyResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let resp = session.handle_key(KeyEvent::text(&ch.to_string()), client);
        responses.push(resp);
    }
    responses
}

/// Backspace as the host sees it: the session first, then the native
/// delete when the key is handed back.
pub(super) fn press_backspace(
    session: &mut InputSession<RecordingDisplay>,
    client: &mut MockClient,
) -> KeyResponse {
    let resp = session.handle_key(KeyEvent::Backspace, client);
    if !resp.consumed {
        client.native_backspace();
    }
    resp
}

pub(super) fn compositions(entries: &[SignEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.composition.as_str()).collect()
}
