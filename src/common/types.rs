use egui::Color32;

use super::palette;

/// Presence shown next to a user's avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Away,
}

/// A user snapshot. Messages embed the sender rather than referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub full_name: Option<String>,
    pub status: Presence,
    pub initials: String,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    Direct,
    Group,
}

/// Denormalized summary shown in the conversation list.
#[derive(Debug, Clone)]
pub struct LastMessage {
    pub content: String,
    pub timestamp: String,
    pub sender_id: u64,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: u64,
    /// Set for groups; direct conversations derive their name.
    pub name: Option<String>,
    pub kind: ConversationKind,
    pub participants: Vec<User>,
    pub last_message: LastMessage,
    pub unread_count: u32,
}

impl Conversation {
    /// Explicit name if set, otherwise the other participant's full name.
    pub fn display_name(&self, current_user_id: u64) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.other_participant(current_user_id)
            .and_then(|user| user.full_name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// The non-current participant of a direct conversation.
    pub fn other_participant(&self, current_user_id: u64) -> Option<&User> {
        match self.kind {
            ConversationKind::Direct => self
                .participants
                .iter()
                .find(|user| user.id != current_user_id),
            ConversationKind::Group => None,
        }
    }

    pub fn participant_label(&self) -> String {
        let count = self.participants.len();
        if count == 1 {
            "1 participant".to_string()
        } else {
            format!("{count} participants")
        }
    }

    /// Avatar initials and color for list rows and the chat header.
    pub fn avatar(&self, current_user_id: u64) -> (String, Color32) {
        match self.other_participant(current_user_id) {
            Some(user) => (user.initials.clone(), user.color),
            None => {
                let initials = self
                    .name
                    .as_deref()
                    .map(|name| name.chars().take(2).collect())
                    .unwrap_or_else(|| "GR".to_string());
                (initials, palette::PURPLE)
            }
        }
    }
}

/// Attachment metadata carried by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAttachment {
    Image { url: String },
    File { name: String, size: String },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: u64,
    pub conversation_id: u64,
    pub sender: User,
    pub content: String,
    /// Display time, e.g. "10:30 AM".
    pub timestamp: String,
    /// Calendar-day label used for grouping, e.g. "Yesterday".
    pub day_label: String,
    pub media: Option<MediaAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Missed,
}

#[derive(Debug, Clone)]
pub struct CallEntry {
    pub id: u64,
    pub contact_name: String,
    pub contact_initials: String,
    pub contact_color: Color32,
    pub direction: CallDirection,
    pub day_label: String,
    pub time: String,
    /// Missed calls have no duration.
    pub duration: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Community {
    pub id: u64,
    pub name: String,
    pub member_count: u32,
    pub initials: String,
    pub color: Color32,
    pub description: String,
    pub unread_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedKind {
    Message,
    File,
    Link,
    Image,
}

#[derive(Debug, Clone)]
pub struct SavedItem {
    pub id: u64,
    pub kind: SavedKind,
    pub title: String,
    pub description: String,
    /// Relative date label, e.g. "2 days ago".
    pub date: String,
    pub sender: Option<String>,
    pub thumbnail: Option<String>,
}
