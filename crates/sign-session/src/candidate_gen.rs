use sign_core::pager::initial_selection;
use sign_core::ranker::rank;

use super::types::CandidateAction;
use super::{CandidateDisplay, InputSession, TextClient};

impl<D: CandidateDisplay> InputSession<D> {
    /// Re-rank for the current composition and show the first page.
    pub(super) fn update_candidates(&mut self, client: &dyn TextClient) -> CandidateAction {
        let query = self.comp().text.clone();
        let candidates = rank(&self.catalog, &query);
        let c = self.comp();
        c.selected = initial_selection(candidates.len());
        c.candidates = candidates;
        self.show_current_page(client)
    }
}
