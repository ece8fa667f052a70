use std::collections::HashMap;

use chrono::Local;

use crate::common::SimulatorEvent;
use crate::common::types::{
    CallEntry, Community, Conversation, Message, SavedItem, SavedKind, User,
};
use crate::config::Preferences;
use crate::data;

/// The conversation shown on first launch (the Design Team group).
pub const INITIAL_CONVERSATION: u64 = 2;

/// Main views reachable from the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Messages,
    Communities,
    Calls,
    Saved,
}

/// Local UI state. Everything here mutates synchronously in response to a
/// click, a keystroke, or a simulator event.
pub struct AppState {
    pub current_user: User,
    pub conversations: Vec<Conversation>,
    pub calls: Vec<CallEntry>,
    pub communities: Vec<Community>,
    pub saved_items: Vec<SavedItem>,

    pub active_tab: Tab,
    pub active_conversation_id: Option<u64>,
    pub conversation_search: String,
    pub call_search: String,
    pub community_search: String,
    pub saved_search: String,
    pub input_text: String,

    /// Conversations the user has opened, with locally sent messages
    /// appended. Resets on restart.
    loaded: HashMap<u64, Vec<Message>>,
    next_message_id: u64,

    /// Conversation currently showing the simulated typing pill.
    pub typing_in: Option<u64>,
    /// URL of the enlarged media item; `Some` means the lightbox is open.
    pub lightbox: Option<String>,
    pub active_community: Option<u64>,
    pub saved_filter: Option<SavedKind>,
    pub settings_open: bool,
    pub preferences: Preferences,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        // Seed ids are unique across conversations; keep it that way for
        // locally sent messages by counting from the global max.
        let next_message_id = data::messages::messages()
            .iter()
            .map(|message| message.id)
            .max()
            .unwrap_or(0)
            + 1;

        let mut state = Self {
            current_user: data::users::current_user(),
            conversations: data::conversations::conversations(),
            calls: data::calls::calls(),
            communities: data::communities::communities(),
            saved_items: data::saved::saved_items(),
            active_tab: Tab::Messages,
            active_conversation_id: None,
            conversation_search: String::new(),
            call_search: String::new(),
            community_search: String::new(),
            saved_search: String::new(),
            input_text: String::new(),
            loaded: HashMap::new(),
            next_message_id,
            typing_in: None,
            lightbox: None,
            active_community: None,
            saved_filter: None,
            settings_open: false,
            preferences,
        };
        state.open_conversation(INITIAL_CONVERSATION);
        state
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab != Tab::Messages {
            self.active_conversation_id = None;
        }
    }

    /// Marks the conversation active and lazily loads its seed messages.
    /// Already-loaded conversations keep their locally sent messages.
    pub fn open_conversation(&mut self, id: u64) {
        self.active_conversation_id = Some(id);
        self.loaded
            .entry(id)
            .or_insert_with(|| data::messages::messages_for(id));
    }

    pub fn conversation(&self, id: u64) -> Option<&Conversation> {
        self.conversations
            .iter()
            .find(|conversation| conversation.id == id)
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.active_conversation_id.and_then(|id| self.conversation(id))
    }

    pub fn messages(&self, conversation_id: u64) -> &[Message] {
        self.loaded
            .get(&conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends a message from the current user to the active conversation.
    /// Whitespace-only drafts are ignored.
    pub fn send_message(&mut self, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        let Some(conversation_id) = self.active_conversation_id else {
            return false;
        };

        let message = Message {
            id: self.next_message_id,
            conversation_id,
            sender: self.current_user.clone(),
            content: content.to_string(),
            timestamp: Local::now().format("%-I:%M %p").to_string(),
            day_label: "Today".to_string(),
            media: None,
        };
        self.next_message_id += 1;
        self.loaded
            .entry(conversation_id)
            .or_insert_with(|| data::messages::messages_for(conversation_id))
            .push(message);
        true
    }

    pub fn apply_simulator_event(&mut self, event: SimulatorEvent) {
        match event {
            SimulatorEvent::TypingStarted { conversation_id } => {
                self.typing_in = Some(conversation_id);
            }
            SimulatorEvent::TypingStopped { conversation_id } => {
                if self.typing_in == Some(conversation_id) {
                    self.typing_in = None;
                }
            }
        }
    }

    /// Hides the pill immediately; the simulator catches up via LocalTyping.
    pub fn clear_typing(&mut self) {
        self.typing_in = None;
    }

    pub fn toggle_saved_filter(&mut self, kind: SavedKind) {
        self.saved_filter = if self.saved_filter == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
