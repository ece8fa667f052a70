use super::*;
use crate::common::palette;
use crate::common::types::{Message, Presence, SavedKind, User};
use crate::data::{calls, communities, conversations, messages, saved, users};

fn test_user(id: u64, name: &str) -> User {
    User {
        id,
        username: name.to_lowercase(),
        full_name: Some(name.to_string()),
        status: Presence::Online,
        initials: "XX".to_string(),
        color: palette::GRAY,
    }
}

fn test_message(id: u64, day: &str, sender_id: u64) -> Message {
    Message {
        id,
        conversation_id: 1,
        sender: test_user(sender_id, "Someone"),
        content: format!("message {id}"),
        timestamp: "9:00 AM".to_string(),
        day_label: day.to_string(),
        media: None,
    }
}

#[test]
fn conversation_filter_is_case_insensitive() {
    let all = conversations::conversations();
    let lower = filter_conversations(&all, "sarah", users::CURRENT_USER_ID);
    let upper = filter_conversations(&all, "SARAH", users::CURRENT_USER_ID);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower.len(), upper.len());
    assert_eq!(lower[0].id, 1);
}

#[test]
fn empty_query_returns_everything() {
    let all = conversations::conversations();
    assert_eq!(
        filter_conversations(&all, "", users::CURRENT_USER_ID).len(),
        all.len()
    );
}

#[test]
fn narrowing_the_query_never_grows_the_result() {
    let all = conversations::conversations();
    let full = "design team";
    let mut previous = all.len();
    for end in 1..=full.len() {
        let count = filter_conversations(&all, &full[..end], users::CURRENT_USER_ID).len();
        assert!(
            count <= previous,
            "query {:?} produced {count} results, more than {previous}",
            &full[..end]
        );
        previous = count;
    }
}

#[test]
fn conversation_filter_matches_the_derived_name() {
    // Direct conversations have no explicit name; the filter still finds
    // them through the other participant.
    let all = conversations::conversations();
    let hits = filter_conversations(&all, "thomas", users::CURRENT_USER_ID);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 5);
}

#[test]
fn community_filter_also_matches_descriptions() {
    let all = communities::communities();
    let hits = filter_communities(&all, "coding");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Developer Network");
}

#[test]
fn call_filter_matches_contact_names() {
    let all = calls::calls();
    assert_eq!(filter_calls(&all, "sarah").len(), 2);
    assert_eq!(filter_calls(&all, "nobody").len(), 0);
}

#[test]
fn saved_filter_combines_search_and_kind() {
    let all = saved::saved_items();
    assert_eq!(filter_saved(&all, "", None).len(), all.len());

    let files = filter_saved(&all, "report", Some(SavedKind::File));
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, 2);

    // Search hit of the wrong kind is excluded.
    assert!(filter_saved(&all, "timeline", Some(SavedKind::Link)).is_empty());
}

#[test]
fn grouping_follows_first_occurrence_order() {
    let messages = vec![
        test_message(1, "Yesterday", 2),
        test_message(2, "Today", 2),
        test_message(3, "Yesterday", 3),
    ];
    let groups = group_by_day(&messages);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Yesterday");
    assert_eq!(groups[1].label, "Today");
    let first_ids: Vec<u64> = groups[0].messages.iter().map(|message| message.id).collect();
    assert_eq!(first_ids, vec![1, 3]);
}

#[test]
fn grouping_preserves_total_message_count() {
    let seed = messages::messages_for(2);
    let groups = group_by_day(&seed);
    let grouped: usize = groups.iter().map(|group| group.messages.len()).sum();
    assert_eq!(grouped, seed.len());
    assert_eq!(groups[0].label, "Yesterday");
    assert_eq!(groups[1].label, "Today");
}

#[test]
fn sender_header_marks_the_start_of_each_run() {
    let messages = vec![
        test_message(1, "Today", 2),
        test_message(2, "Today", 2),
        test_message(3, "Today", 3),
    ];
    let refs: Vec<&Message> = messages.iter().collect();
    assert!(show_sender_header(0, &refs));
    assert!(!show_sender_header(1, &refs));
    assert!(show_sender_header(2, &refs));
}

#[test]
fn truncate_is_char_safe() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdef", 3), "abc…");
    assert_eq!(truncate("héllo wörld", 4), "héll…");
}
