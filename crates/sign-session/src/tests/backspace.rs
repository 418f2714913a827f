use super::*;
use sign_core::ledger::BackspaceOutcome;

fn commit(session: &mut InputSession<RecordingDisplay>, client: &mut MockClient, composition: &str) {
    type_string(session, client, composition);
    let resp = session.handle_key(KeyEvent::Enter, client);
    assert!(resp.commit.is_some(), "nothing committed for {composition}");
}

#[test]
fn test_backspace_removes_whole_sign() {
    let mut session = make_session();
    let mut client = MockClient::new();

    commit(&mut session, &mut client, "ŋeštug");
    assert_eq!(client.text(), "𒄑𒉿𒆠");

    let resp = press_backspace(&mut session, &mut client);
    assert!(!resp.consumed);
    assert_eq!(resp.backspace, Some(BackspaceOutcome::SignReplaced { range: 0..6 }));
    assert_eq!(client.text(), "");
    assert!(session.ledger().is_empty());
}

#[test]
fn test_backspace_after_host_insertion() {
    let mut session = make_session();
    let mut client = MockClient::with_text("abcde");

    commit(&mut session, &mut client, "ŋeštug");
    assert_eq!(client.text(), "abcde𒄑𒉿𒆠");

    client.insert_external(0, "xyz");
    session.note_insertion(0, "xyz");
    let ranges: Vec<_> = session.ledger().sequences().map(|s| s.range.clone()).collect();
    assert_eq!(ranges, vec![8..14, 0..3]);

    client.select(14..14);
    let resp = press_backspace(&mut session, &mut client);
    assert_eq!(resp.backspace, Some(BackspaceOutcome::SignReplaced { range: 8..14 }));
    assert_eq!(client.text(), "xyzabcde");
}

#[test]
fn test_commit_before_tracked_sign_shifts_it() {
    let mut session = make_session();
    let mut client = MockClient::new();

    commit(&mut session, &mut client, "ŋeštug");
    client.select(0..0);
    commit(&mut session, &mut client, "an");
    assert_eq!(client.text(), "𒀭𒄑𒉿𒆠");
    let ranges: Vec<_> = session.ledger().sequences().map(|s| s.range.clone()).collect();
    assert_eq!(ranges, vec![2..8]);

    client.select(8..8);
    let resp = press_backspace(&mut session, &mut client);
    assert_eq!(resp.backspace, Some(BackspaceOutcome::SignReplaced { range: 2..8 }));
    assert_eq!(client.text(), "𒀭");
}

#[test]
fn test_backspace_single_scalar_sign() {
    let mut session = make_session();
    let mut client = MockClient::with_text("ab");

    commit(&mut session, &mut client, "ṣa");
    assert_eq!(client.text(), "ab𒊓");

    let resp = press_backspace(&mut session, &mut client);
    assert_eq!(
        resp.backspace,
        Some(BackspaceOutcome::ClusterShrunk {
            range: 2..4,
            replacement: " ".to_string(),
        })
    );
    assert_eq!(client.text(), "ab");
    assert_eq!(client.cursor(), 2);
}

#[test]
fn test_stale_sequence_falls_back() {
    let mut session = make_session();
    let mut client = MockClient::new();

    commit(&mut session, &mut client, "ŋeštug");
    // Edited behind the session's back
    client.replace(0..2, "𒀭");
    assert_eq!(client.text(), "𒀭𒉿𒆠");

    let resp = press_backspace(&mut session, &mut client);
    assert_eq!(
        resp.backspace,
        Some(BackspaceOutcome::ClusterShrunk {
            range: 4..6,
            replacement: " ".to_string(),
        })
    );
    assert_eq!(client.text(), "𒀭𒉿");
    assert!(session.ledger().is_empty());
}

#[test]
fn test_backspace_with_selection() {
    let mut session = make_session();
    let mut client = MockClient::with_text("ab");

    commit(&mut session, &mut client, "ŋeštug");
    client.select(1..8);
    let resp = press_backspace(&mut session, &mut client);
    assert!(!resp.consumed);
    assert_eq!(resp.backspace, Some(BackspaceOutcome::NotHandled));
    assert_eq!(client.text(), "a");
    assert!(session.ledger().is_empty());
}

#[test]
fn test_backspace_strips_combining_mark() {
    let mut session = make_session();
    let mut client = MockClient::with_text("e\u{301}");

    let resp = press_backspace(&mut session, &mut client);
    assert_eq!(
        resp.backspace,
        Some(BackspaceOutcome::ClusterShrunk {
            range: 0..2,
            replacement: "e ".to_string(),
        })
    );
    assert_eq!(client.text(), "e");
}

#[test]
fn test_backspace_at_document_start() {
    let mut session = make_session();
    let mut client = MockClient::with_text("ab");
    client.select(0..0);

    let resp = press_backspace(&mut session, &mut client);
    assert!(!resp.consumed);
    assert_eq!(resp.backspace, Some(BackspaceOutcome::NotHandled));
    assert_eq!(client.text(), "ab");
}

#[test]
fn test_repeated_backspace_clears_signs() {
    let mut session = make_session();
    let mut client = MockClient::new();

    commit(&mut session, &mut client, "ṣa");
    commit(&mut session, &mut client, "ŋeštug");
    commit(&mut session, &mut client, "an");
    assert_eq!(client.text(), "𒊓𒄑𒉿𒆠𒀭");

    press_backspace(&mut session, &mut client);
    assert_eq!(client.text(), "𒊓𒄑𒉿𒆠");
    press_backspace(&mut session, &mut client);
    assert_eq!(client.text(), "𒊓");
    press_backspace(&mut session, &mut client);
    assert_eq!(client.text(), "");
}
