use crate::common::types::{Conversation, ConversationKind, LastMessage, User};

use super::users;

fn participants(ids: &[u64]) -> Vec<User> {
    let all = users::users();
    ids.iter()
        .filter_map(|id| all.iter().find(|user| user.id == *id).cloned())
        .collect()
}

fn last_message(content: &str, timestamp: &str, sender_id: u64) -> LastMessage {
    LastMessage {
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        sender_id,
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            name: None,
            kind: ConversationKind::Direct,
            participants: participants(&[1, 2]),
            last_message: last_message(
                "I've sent you the files you requested, let me know if you need anything else!",
                "12:42 PM",
                2,
            ),
            unread_count: 0,
        },
        Conversation {
            id: 2,
            name: Some("Design Team".to_string()),
            kind: ConversationKind::Group,
            participants: participants(&[1, 2, 3, 5, 6]),
            last_message: last_message(
                "Meeting at 2pm to discuss the new project requirements",
                "Yesterday",
                5,
            ),
            unread_count: 0,
        },
        Conversation {
            id: 3,
            name: None,
            kind: ConversationKind::Direct,
            participants: participants(&[1, 3]),
            last_message: last_message(
                "Hey, are you free this weekend for the conference?",
                "Yesterday",
                3,
            ),
            unread_count: 0,
        },
        Conversation {
            id: 4,
            name: Some("Marketing Department".to_string()),
            kind: ConversationKind::Group,
            participants: participants(&[1, 4, 6]),
            last_message: last_message(
                "The new campaign assets are ready for review",
                "Tuesday",
                6,
            ),
            unread_count: 0,
        },
        Conversation {
            id: 5,
            name: None,
            kind: ConversationKind::Direct,
            participants: participants(&[1, 4]),
            last_message: last_message("Thanks for your help with the project!", "Monday", 4),
            unread_count: 0,
        },
    ]
}
