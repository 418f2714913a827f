use tracing::debug_span;

use sign_core::pager::{move_selection, Navigation};
use sign_core::unicode::has_control_or_private_use;

use super::types::{Composition, KeyEvent, KeyResponse, Modifiers, SessionState};
use super::{CandidateDisplay, InputSession, TextClient};

impl<D: CandidateDisplay> InputSession<D> {
    /// Process a key event against `client`. Returns a KeyResponse describing
    /// what was done; `consumed == false` hands the key back to the host.
    pub fn handle_key(&mut self, event: KeyEvent, client: &mut dyn TextClient) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::ArrowUp if self.is_composing() => self.navigate(Navigation::Previous, client),
            KeyEvent::ArrowDown if self.is_composing() => self.navigate(Navigation::Next, client),
            KeyEvent::PageUp if self.is_composing() => self.navigate(Navigation::PageUp, client),
            KeyEvent::PageDown if self.is_composing() => self.navigate(Navigation::PageDown, client),

            KeyEvent::Enter | KeyEvent::Space if self.is_composing() => {
                self.commit_selected(client)
            }

            KeyEvent::Backspace if self.is_composing() => self.handle_composing_backspace(client),
            KeyEvent::Backspace => self.handle_idle_backspace(client),

            KeyEvent::Escape if self.is_composing() => self.cancel(client),

            KeyEvent::Text {
                ref text,
                modifiers,
            } => self.handle_text(text, modifiers, client),

            // Other special keys in idle: not consumed
            _ => KeyResponse::not_consumed(),
        }
    }

    fn handle_text(
        &mut self,
        text: &str,
        modifiers: Modifiers,
        client: &mut dyn TextClient,
    ) -> KeyResponse {
        if modifiers.any() || text.is_empty() || has_control_or_private_use(text) {
            return KeyResponse::not_consumed();
        }
        if !self.is_composing() {
            self.state = SessionState::Composing(Composition::new());
        }
        self.comp().text.push_str(text);
        self.make_marked_text_and_candidates_response(client)
    }

    /// Move the selection and redraw. Without a selection the redraw simply
    /// hides the empty panel.
    fn navigate(&mut self, nav: Navigation, client: &mut dyn TextClient) -> KeyResponse {
        let delta = nav.delta(self.page_size);
        let c = self.comp();
        c.selected = move_selection(c.selected, delta, c.candidates.len());
        let mut resp = KeyResponse::consumed();
        resp.candidates = self.show_current_page(client);
        resp
    }
}
