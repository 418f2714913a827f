use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::types::KeyResponse;
use super::{CandidateDisplay, InputSession, TextClient};

impl<D: CandidateDisplay> InputSession<D> {
    /// Remove the last typed character (a whole grapheme cluster); an
    /// emptied composition ends.
    pub(super) fn handle_composing_backspace(&mut self, client: &mut dyn TextClient) -> KeyResponse {
        let text = &mut self.comp().text;
        let last = text.grapheme_indices(true).next_back().map_or(0, |(i, _)| i);
        text.truncate(last);
        if self.comp().text.is_empty() {
            return self.cancel(client);
        }
        self.make_marked_text_and_candidates_response(client)
    }

    /// Backspace over committed text.
    ///
    /// The ledger decides whether a whole sign or part of a character goes;
    /// its replacement ends in a space, and the key is always handed back
    /// so that the host's own backspace removes that space (or, when the
    /// ledger declines, does an ordinary delete).
    pub(super) fn handle_idle_backspace(&mut self, client: &mut dyn TextClient) -> KeyResponse {
        let Some(selection) = client.selected_range() else {
            return KeyResponse::not_consumed();
        };
        let outcome = self
            .ledger
            .resolve_backspace(selection.start, !selection.is_empty(), &*client);
        if !selection.is_empty() {
            // The host deletes the selection itself.
            self.ledger.record_deletion(selection);
        }
        if let Some((range, text)) = outcome.edit() {
            debug!(?range, text, "replacing before native backspace");
            client.insert_text(text, Some(range));
        }
        let mut resp = KeyResponse::not_consumed();
        resp.backspace = Some(outcome);
        resp
    }
}
