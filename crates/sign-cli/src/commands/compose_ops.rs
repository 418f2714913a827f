//! Headless replay of keystrokes against an in-memory host.
//!
//! Key scripts are plain text: every character is typed as-is, except
//! that a space commits, `<` is backspace, and `{name}` spells out a
//! special key (`{enter}`, `{space}`, `{bs}`, `{esc}`, `{up}`, `{down}`,
//! `{pgup}`, `{pgdn}`, `{choose:N}`).

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use sign_session::{InputSession, KeyEvent, KeyResponse};

use super::load_catalog;
use crate::host::{BufferClient, PageDisplay};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("unknown key {{{0}}}")]
    UnknownKey(String),
    #[error("unterminated {{ at offset {0}")]
    Unterminated(usize),
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptKey {
    Key(KeyEvent),
    /// Click on row N of the visible candidate page.
    Choose(usize),
}

impl ScriptKey {
    fn label(&self) -> String {
        match self {
            Self::Key(KeyEvent::Text { text, .. }) => text.clone(),
            Self::Key(KeyEvent::Enter) => "{enter}".into(),
            Self::Key(KeyEvent::Space) => "{space}".into(),
            Self::Key(KeyEvent::Backspace) => "{bs}".into(),
            Self::Key(KeyEvent::Escape) => "{esc}".into(),
            Self::Key(KeyEvent::ArrowUp) => "{up}".into(),
            Self::Key(KeyEvent::ArrowDown) => "{down}".into(),
            Self::Key(KeyEvent::PageUp) => "{pgup}".into(),
            Self::Key(KeyEvent::PageDown) => "{pgdn}".into(),
            Self::Choose(n) => format!("{{choose:{n}}}"),
        }
    }
}

fn named_key(name: &str) -> Result<ScriptKey, KeyScriptError> {
    let key = match name {
        "enter" | "return" => KeyEvent::Enter,
        "space" => KeyEvent::Space,
        "bs" | "backspace" => KeyEvent::Backspace,
        "esc" | "escape" => KeyEvent::Escape,
        "up" => KeyEvent::ArrowUp,
        "down" => KeyEvent::ArrowDown,
        "pgup" => KeyEvent::PageUp,
        "pgdn" => KeyEvent::PageDown,
        _ => {
            return name
                .strip_prefix("choose:")
                .and_then(|n| n.parse().ok())
                .map(ScriptKey::Choose)
                .ok_or_else(|| KeyScriptError::UnknownKey(name.to_string()))
        }
    };
    Ok(ScriptKey::Key(key))
}

pub fn parse_keys(script: &str) -> Result<Vec<ScriptKey>, KeyScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.char_indices();
    while let Some((offset, c)) = chars.next() {
        let key = match c {
            ' ' => ScriptKey::Key(KeyEvent::Space),
            '<' => ScriptKey::Key(KeyEvent::Backspace),
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(KeyScriptError::Unterminated(offset)),
                    }
                }
                named_key(&name)?
            }
            c => ScriptKey::Key(KeyEvent::text(&c.to_string())),
        };
        keys.push(key);
    }
    Ok(keys)
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub key: String,
    pub consumed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    pub document: String,
    pub candidates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<usize>,
}

/// Run `keys` through a fresh session, letting the host's own backspace run
/// whenever the session hands the key back.
pub fn replay(session: &mut InputSession<PageDisplay>, keys: &[ScriptKey]) -> (Vec<Step>, BufferClient) {
    let mut client = BufferClient::new();
    session.activate();
    let mut steps = Vec::with_capacity(keys.len());
    for key in keys {
        let resp: KeyResponse = match key {
            ScriptKey::Key(event) => session.handle_key(event.clone(), &mut client),
            ScriptKey::Choose(row) => session.candidate_chosen(*row, &mut client),
        };
        if !resp.consumed && matches!(key, ScriptKey::Key(KeyEvent::Backspace)) {
            client.native_backspace();
        }
        let (candidates, highlighted) = match &session.display().page {
            Some((page, h)) => (
                page.iter()
                    .map(|e| format!("{} {}", e.composition, e.text))
                    .collect(),
                Some(*h),
            ),
            None => (Vec::new(), None),
        };
        steps.push(Step {
            key: key.label(),
            consumed: resp.consumed,
            commit: resp.commit,
            document: client.render(),
            candidates,
            highlighted,
        });
    }
    (steps, client)
}

pub fn compose(catalog_file: &str, script: &str, json: bool) {
    let catalog = Arc::new(load_catalog(catalog_file));
    let keys = die!(parse_keys(script), "Error: {}");
    let mut session = InputSession::new(catalog, PageDisplay::default());
    let (steps, client) = replay(&mut session, &keys);

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&steps), "Error: {}")
        );
        return;
    }

    for step in &steps {
        let flag = if step.consumed { ' ' } else { '*' };
        println!("{flag} {:<10} {}", step.key, step.document);
        if let Some(text) = &step.commit {
            println!("             commit {text}");
        }
        for (i, c) in step.candidates.iter().enumerate() {
            let marker = if Some(i) == step.highlighted { '>' } else { ' ' };
            println!("           {marker} {c}");
        }
    }
    println!("{}", client.text());
}
