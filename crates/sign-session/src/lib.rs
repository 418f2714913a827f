//! Stateful composition session for the sign input method.
//!
//! `InputSession` owns the current composition and the edit ledger, and
//! processes each keystroke against a host [`TextClient`], pushing pages of
//! ranked candidates to its [`CandidateDisplay`].

pub(crate) mod types;

mod backspace;
mod candidate_gen;
mod client;
mod commit;
mod key_handlers;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use sign_core::catalog::{SignCatalog, SignEntry};
use sign_core::ledger::EditLedger;
use sign_core::settings::settings;

pub use client::{CandidateDisplay, TextClient};
pub use types::{CandidateAction, KeyEvent, KeyResponse, MarkedText, Modifiers, Point, Rect};

use types::{Composition, SessionState};

/// Stateful input session encapsulating all keystroke processing.
pub struct InputSession<D> {
    catalog: Arc<SignCatalog>,
    display: D,
    ledger: EditLedger,
    state: SessionState,
    page_size: usize,
}

impl<D: CandidateDisplay> InputSession<D> {
    /// Session with page size and ledger capacity taken from settings.
    pub fn new(catalog: Arc<SignCatalog>, display: D) -> Self {
        let s = settings();
        Self::with_limits(catalog, display, s.candidates.page_size, s.ledger.max_tracked)
    }

    pub fn with_limits(
        catalog: Arc<SignCatalog>,
        display: D,
        page_size: usize,
        max_tracked: usize,
    ) -> Self {
        Self {
            catalog,
            display,
            ledger: EditLedger::new(max_tracked),
            state: SessionState::Idle,
            page_size: page_size.max(1),
        }
    }

    /// The input method became active for a client: start afresh.
    pub fn activate(&mut self) {
        self.ledger.clear();
        self.reset_state();
    }

    /// The input method lost its client.
    pub fn deactivate(&mut self) {
        self.reset_state();
        self.display.hide_candidates();
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    /// Current composition, empty when idle.
    pub fn composition(&self) -> &str {
        match &self.state {
            SessionState::Composing(c) => &c.text,
            SessionState::Idle => "",
        }
    }

    /// Ranked candidates for the current composition.
    pub fn candidates(&self) -> &[SignEntry] {
        match &self.state {
            SessionState::Composing(c) => c.candidates.entries(),
            SessionState::Idle => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.state {
            SessionState::Composing(c) => c.selected,
            SessionState::Idle => None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn ledger(&self) -> &EditLedger {
        &self.ledger
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Tell the ledger about an edit the host made at `point`.
    pub fn note_insertion(&mut self, point: usize, text: &str) {
        self.ledger.record_insertion(point, text);
    }

    /// Mutable reference to the composing state. Panics if Idle.
    fn comp(&mut self) -> &mut Composition {
        match &mut self.state {
            SessionState::Composing(ref mut c) => c,
            SessionState::Idle => unreachable!("comp() called in Idle state"),
        }
    }

    pub(crate) fn reset_state(&mut self) {
        self.state = SessionState::Idle;
    }
}
