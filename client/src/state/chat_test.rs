use super::*;

#[test]
fn default_transcript_seeds_the_welcome_message() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert!(!state.messages[0].is_user);
    assert!(state.messages[0].content.starts_with("Hello!"));
}

#[test]
fn user_and_bot_constructors_set_authorship() {
    assert!(ChatMessage::user("hi").is_user);
    assert!(!ChatMessage::bot("hi").is_user);
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::user("same content");
    let b = ChatMessage::user("same content");
    assert_ne!(a.id, b.id);
}
