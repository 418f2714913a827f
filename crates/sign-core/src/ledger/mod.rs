//! Edit ledger: document ranges of inserted multi-scalar signs.
//!
//! The host document is shared with other editors, so a tracked range is
//! only a hint. Before a range is trusted for an atomic delete its live text
//! is read back and compared with the recorded text.
//!
//! Offsets are UTF-16 code units, as reported by the host.


use std::collections::VecDeque;
use std::ops::Range;

use tracing::debug;

use crate::unicode::{all_but_last_scalar, scalar_count, utf16_len};

/// Number of sequences tracked when settings are not consulted.
pub const DEFAULT_MAX_TRACKED: usize = 128;

/// Read access to the live document.
pub trait DocumentReader {
    /// Text at `range`, or `None` if the host cannot provide it. A host may
    /// widen the range to whole characters.
    fn substring(&self, range: Range<usize>) -> Option<String>;

    /// Number of user-perceived characters in `text`, as the host counts them.
    fn perceived_length(&self, text: &str) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedSequence {
    pub range: Range<usize>,
    pub text: String,
}

/// What a backspace request resolved to. Every replacement ends in a space
/// that the host's native backspace is expected to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackspaceOutcome {
    /// Leave the key to the host.
    NotHandled,
    /// A whole tracked sign at `range` is to be replaced with a single space.
    SignReplaced { range: Range<usize> },
    /// The character before the cursor at `range` is to be replaced with all
    /// but its last scalar followed by a space.
    ClusterShrunk {
        range: Range<usize>,
        replacement: String,
    },
}

impl BackspaceOutcome {
    /// Document edit the caller must apply: replace `range` with the text.
    pub fn edit(&self) -> Option<(Range<usize>, &str)> {
        match self {
            Self::NotHandled => None,
            Self::SignReplaced { range } => Some((range.clone(), " ")),
            Self::ClusterShrunk { range, replacement } => Some((range.clone(), replacement)),
        }
    }

    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::NotHandled)
    }
}

#[derive(Debug, Clone)]
pub struct EditLedger {
    sequences: VecDeque<EmittedSequence>,
    capacity: usize,
}

impl Default for EditLedger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRACKED)
    }
}

impl EditLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            sequences: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Tracked sequences, oldest first.
    pub fn sequences(&self) -> impl Iterator<Item = &EmittedSequence> {
        self.sequences.iter()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn clear(&mut self) {
        self.sequences.clear();
    }

    /// Account for `inserted` having been placed at `point`.
    ///
    /// A sequence whose end lies after the point grows by the inserted
    /// length; one whose (possibly updated) start lies at or after the point
    /// then has its start moved too, so a sequence entirely after the point
    /// shifts as a whole. An insertion of more than one scalar is tracked
    /// as a new sequence.
    pub fn record_insertion(&mut self, point: usize, inserted: &str) {
        let len = utf16_len(inserted);
        for s in self.sequences.iter_mut() {
            if s.range.end > point {
                s.range.end += len;
            }
            if s.range.start >= point {
                s.range.start += len;
                s.range.end = s.range.end.max(s.range.start);
            }
        }
        if scalar_count(inserted) > 1 {
            if self.sequences.len() >= self.capacity {
                self.sequences.pop_front();
            }
            self.sequences.push_back(EmittedSequence {
                range: point..point + len,
                text: inserted.to_string(),
            });
            debug!(?point, len, "tracking emitted sequence");
        }
    }

    /// Account for `removed` having been deleted from the document.
    ///
    /// Sequences at or after the removed range move back; sequences that
    /// overlap it can no longer match their text and are dropped.
    pub fn record_deletion(&mut self, removed: Range<usize>) {
        let len = removed.len();
        if len == 0 {
            return;
        }
        self.sequences.retain_mut(|s| {
            if s.range.start >= removed.end {
                s.range.start -= len;
                s.range.end -= len;
                true
            } else {
                s.range.end <= removed.start
            }
        });
    }

    /// Decide what a backspace at `cursor` should do.
    ///
    /// Only called with no marked composition; with a selection the host
    /// handles the key. A tracked sequence ending at the cursor whose live
    /// text still matches is replaced whole. Otherwise the last
    /// user-perceived character before the cursor loses its final scalar.
    /// The ledger is updated for the net deletion, i.e. after the host's
    /// native backspace has removed the trailing space.
    pub fn resolve_backspace<R: DocumentReader + ?Sized>(
        &mut self,
        cursor: usize,
        has_selection: bool,
        doc: &R,
    ) -> BackspaceOutcome {
        if has_selection {
            return BackspaceOutcome::NotHandled;
        }

        if let Some(range) = self.take_matching_sequence(cursor, doc) {
            debug!(?range, "replacing tracked sign");
            self.record_deletion(range.clone());
            return BackspaceOutcome::SignReplaced { range };
        }

        let Some((range, kept)) = probe_last_character(cursor, doc) else {
            return BackspaceOutcome::NotHandled;
        };
        let kept_len = utf16_len(&kept);
        self.record_deletion(range.start + kept_len..range.end);
        debug!(?range, kept_len, "shrinking character before cursor");
        let mut replacement = kept;
        replacement.push(' ');
        BackspaceOutcome::ClusterShrunk { range, replacement }
    }

    /// Remove and return the first sequence ending at `cursor` whose live
    /// text matches. Stale sequences met on the way are dropped.
    fn take_matching_sequence<R: DocumentReader + ?Sized>(
        &mut self,
        cursor: usize,
        doc: &R,
    ) -> Option<Range<usize>> {
        let mut i = 0;
        while i < self.sequences.len() {
            let s = &self.sequences[i];
            if s.range.end != cursor {
                i += 1;
                continue;
            }
            let live = doc.substring(s.range.clone());
            if live.as_deref() == Some(s.text.as_str()) {
                return self.sequences.remove(i).map(|s| s.range);
            }
            debug!(range = ?s.range, ?live, "dropping stale sequence");
            self.sequences.remove(i);
        }
        None
    }
}

/// Find the widest span ending at `cursor` that the host still counts as one
/// character. Returns the span and the text to keep from it.
fn probe_last_character<R: DocumentReader + ?Sized>(
    cursor: usize,
    doc: &R,
) -> Option<(Range<usize>, String)> {
    let mut best = None;
    let mut len = 1;
    while len <= cursor {
        let Some(text) = doc.substring(cursor - len..cursor) else {
            break;
        };
        if text.is_empty() || doc.perceived_length(&text) != 1 {
            break;
        }
        // The host may widen the span to a whole character.
        let text_len = utf16_len(&text);
        let next = text_len + 1;
        best = Some((
            cursor - text_len.min(cursor)..cursor,
            all_but_last_scalar(&text).to_string(),
        ));
        if next <= len {
            break;
        }
        len = next;
    }
    best
}
