// Conversation tests

use crate::chat::conversation::WELCOME_MESSAGE;
use crate::chat::message::WELCOME_ID;
use crate::chat::{Conversation, MessageIdGenerator, Role};

#[test]
fn test_conversation_starts_with_welcome() {
    let conversation = Conversation::new();

    assert_eq!(conversation.len(), 1);
    assert!(!conversation.is_empty());
    assert!(conversation.is_seed_only());

    let welcome = &conversation.messages()[0];
    assert_eq!(welcome.id, WELCOME_ID);
    assert_eq!(welcome.role, Role::Assistant);
    assert_eq!(welcome.content, WELCOME_MESSAGE);
}

#[test]
fn test_push_appends_in_order() {
    let mut conversation = Conversation::new();
    let mut ids = MessageIdGenerator::new();

    conversation.push(ids.create(Role::User, "first"));
    conversation.push(ids.create(Role::Assistant, "second"));

    assert_eq!(conversation.len(), 3);
    assert!(!conversation.is_seed_only());
    let contents: Vec<&str> = conversation.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents[1..], ["first", "second"]);
    assert_eq!(conversation.last().content, "second");
}
