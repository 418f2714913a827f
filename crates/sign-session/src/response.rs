use sign_core::pager::visible_page;

use super::client::origin_hint;
use super::types::{CandidateAction, KeyResponse, MarkedText, SessionState};
use super::{CandidateDisplay, InputSession, TextClient};

impl<D: CandidateDisplay> InputSession<D> {
    /// Push the page holding the selection to the display, or hide it when
    /// there is nothing to select.
    pub(super) fn show_current_page(&mut self, client: &dyn TextClient) -> CandidateAction {
        let SessionState::Composing(ref c) = self.state else {
            self.display.hide_candidates();
            return CandidateAction::Hide;
        };
        let Some(selected) = c.selected else {
            self.display.hide_candidates();
            return CandidateAction::Hide;
        };
        let view = visible_page(selected, self.page_size, c.candidates.len());
        let page = c.candidates.entries()[view.range].to_vec();
        self.display
            .show_candidates(&page, view.highlighted, origin_hint(client));
        CandidateAction::Show {
            page,
            page_start: view.page_start,
            highlighted: view.highlighted,
        }
    }

    /// Marked text plus a fresh ranking, after the composition changed.
    pub(super) fn make_marked_text_and_candidates_response(
        &mut self,
        client: &mut dyn TextClient,
    ) -> KeyResponse {
        let text = self.comp().text.clone();
        let replace = client.marked_range();
        client.set_marked_text(&text, None, replace);
        let mut resp = KeyResponse::consumed();
        resp.candidates = self.update_candidates(client);
        resp.marked = Some(MarkedText { text });
        resp
    }
}
