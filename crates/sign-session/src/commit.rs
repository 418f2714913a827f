use tracing::{debug, warn};

use sign_core::pager::visible_page;

use super::types::{CandidateAction, KeyResponse, MarkedText, SessionState};
use super::{CandidateDisplay, InputSession, TextClient};

impl<D: CandidateDisplay> InputSession<D> {
    /// Commit the selected candidate in place of the marked text.
    ///
    /// With no candidates the composition stays as it is.
    pub(super) fn commit_selected(&mut self, client: &mut dyn TextClient) -> KeyResponse {
        let SessionState::Composing(ref c) = self.state else {
            return KeyResponse::not_consumed();
        };
        let Some(entry) = c.selected_entry().cloned() else {
            return KeyResponse::consumed();
        };

        let marked = client.marked_range();
        let point = marked
            .clone()
            .or_else(|| client.selected_range())
            .map(|r| r.start);
        client.insert_text(&entry.text, marked);
        match point {
            Some(point) => self.ledger.record_insertion(point, &entry.text),
            None => warn!(text = %entry.text, "no insertion point, sign not tracked"),
        }
        debug!(composition = %entry.composition, text = %entry.text, "committed");

        self.reset_state();
        self.display.hide_candidates();
        let mut resp = KeyResponse::consumed();
        resp.commit = Some(entry.text);
        resp.candidates = CandidateAction::Hide;
        resp
    }

    /// The display reports that the user picked row `index` of the page
    /// currently shown. Rows outside the page are ignored.
    pub fn candidate_chosen(&mut self, index: usize, client: &mut dyn TextClient) -> KeyResponse {
        let page_size = self.page_size;
        let SessionState::Composing(ref mut c) = self.state else {
            return KeyResponse::not_consumed();
        };
        let Some(selected) = c.selected else {
            return KeyResponse::not_consumed();
        };
        let view = visible_page(selected, page_size, c.candidates.len());
        let chosen = view.page_start + index;
        if !view.range.contains(&chosen) {
            return KeyResponse::not_consumed();
        }
        c.selected = Some(chosen);
        self.commit_selected(client)
    }

    /// Drop the composition without committing anything.
    pub(super) fn cancel(&mut self, client: &mut dyn TextClient) -> KeyResponse {
        let replace = client.marked_range();
        client.set_marked_text("", None, replace);
        self.reset_state();
        self.display.hide_candidates();
        let mut resp = KeyResponse::consumed();
        resp.marked = Some(MarkedText {
            text: String::new(),
        });
        resp.candidates = CandidateAction::Hide;
        resp
    }
}
