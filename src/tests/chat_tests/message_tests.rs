// Message and id generator tests

use crate::chat::{Message, MessageIdGenerator, Role};

#[test]
fn test_id_generator_format() {
    let mut ids = MessageIdGenerator::new();
    assert_eq!(ids.next_id(1_718_000_000_000), "1718000000000-1");
    assert_eq!(ids.next_id(1_718_000_000_000), "1718000000000-2");
}

#[test]
fn test_ids_distinct_within_same_millisecond() {
    let mut ids = MessageIdGenerator::new();
    let first = ids.create(Role::User, "one");
    let second = ids.create(Role::Assistant, "two");

    assert_ne!(first.id, second.id, "Ids must differ even when timestamps match");
    assert!(second.timestamp >= first.timestamp);
}

#[test]
fn test_create_sets_role_and_content() {
    let mut ids = MessageIdGenerator::new();
    let msg = ids.create(Role::User, "Tell me about drones");

    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Tell me about drones");
    assert!(!msg.is_assistant());
    assert!(msg.timestamp > 0);
}

#[test]
fn test_role_labels() {
    assert_eq!(Role::User.label(), "You");
    assert_eq!(Role::Assistant.label(), "Assistant");
}

#[test]
fn test_role_serializes_lowercase() {
    let msg = Message::new("1-1".to_string(), Role::Assistant, "hi".to_string(), 0);
    let json = serde_json::to_string(&msg).expect("Failed to serialize");
    assert!(json.contains("\"role\":\"assistant\""), "got {}", json);

    let parsed: Message = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(parsed, msg);
}
