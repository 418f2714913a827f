use sign_core::catalog::SignEntry;
use sign_core::ledger::BackspaceOutcome;
use sign_core::ranker::RankedCandidates;

/// Modifier keys held during a keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub caps_lock: bool,
    pub command: bool,
    pub control: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.caps_lock || self.command || self.control
    }
}

/// A keystroke as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Text { text: String, modifiers: Modifiers },
    /// Return or keypad Enter.
    Enter,
    Space,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

impl KeyEvent {
    /// Unmodified text input.
    pub fn text(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
            modifiers: Modifiers::default(),
        }
    }
}

/// Marked (composing) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedText {
    pub text: String,
}

/// Candidate panel action: exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the panel with one page of candidates.
    Show {
        page: Vec<SignEntry>,
        page_start: usize,
        highlighted: usize,
    },
    /// Hide the panel.
    Hide,
}

/// Outcome of one keystroke. The session has already applied these effects
/// to the host client and the display; the response mirrors them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// False lets the host run its own handling of the key.
    pub consumed: bool,
    pub commit: Option<String>,
    pub marked: Option<MarkedText>,
    pub candidates: CandidateAction,
    pub backspace: Option<BackspaceOutcome>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            marked: None,
            candidates: CandidateAction::Keep,
            backspace: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

/// Screen point, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Line rectangle reported by the host for the insertion point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub(crate) enum SessionState {
    Idle,
    Composing(Composition),
}

pub(crate) struct Composition {
    pub(crate) text: String,
    pub(crate) candidates: RankedCandidates,
    /// Always within `0..candidates.len()` when present.
    pub(crate) selected: Option<usize>,
}

impl Composition {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            candidates: RankedCandidates::default(),
            selected: None,
        }
    }

    pub(crate) fn selected_entry(&self) -> Option<&SignEntry> {
        self.selected.and_then(|i| self.candidates.get(i))
    }
}
