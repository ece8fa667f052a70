//! Pure list transformations behind the search fields and the chat view.
//! Recomputed on every frame; the lists are small enough that nothing is
//! memoized.

use crate::common::types::{CallEntry, Community, Conversation, Message, SavedItem, SavedKind};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive substring match on the derived display name.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    query: &str,
    current_user_id: u64,
) -> Vec<&'a Conversation> {
    conversations
        .iter()
        .filter(|conversation| matches(&conversation.display_name(current_user_id), query))
        .collect()
}

pub fn filter_calls<'a>(calls: &'a [CallEntry], query: &str) -> Vec<&'a CallEntry> {
    calls
        .iter()
        .filter(|call| matches(&call.contact_name, query))
        .collect()
}

pub fn filter_communities<'a>(communities: &'a [Community], query: &str) -> Vec<&'a Community> {
    communities
        .iter()
        .filter(|community| {
            matches(&community.name, query) || matches(&community.description, query)
        })
        .collect()
}

/// Text search over title and description, AND-combined with the kind chip.
pub fn filter_saved<'a>(
    items: &'a [SavedItem],
    query: &str,
    kind: Option<SavedKind>,
) -> Vec<&'a SavedItem> {
    items
        .iter()
        .filter(|item| {
            let matches_search = matches(&item.title, query) || matches(&item.description, query);
            let matches_kind = kind.is_none_or(|kind| item.kind == kind);
            matches_search && matches_kind
        })
        .collect()
}

/// Messages of one calendar day, in insertion order.
pub struct DayGroup<'a> {
    pub label: &'a str,
    pub messages: Vec<&'a Message>,
}

/// Partitions by day label. Group order follows first occurrence; the total
/// message count is preserved across groups.
pub fn group_by_day(messages: &[Message]) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    for message in messages {
        match groups
            .iter_mut()
            .find(|group| group.label == message.day_label)
        {
            Some(group) => group.messages.push(message),
            None => groups.push(DayGroup {
                label: &message.day_label,
                messages: vec![message],
            }),
        }
    }
    groups
}

/// A bubble carries the sender avatar and name only at the start of a run of
/// messages from the same sender.
pub fn show_sender_header(index: usize, messages: &[&Message]) -> bool {
    index == 0 || messages[index - 1].sender.id != messages[index].sender.id
}

/// Char-safe truncation for list summaries.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{prefix}…")
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
