use std::collections::HashSet;

use super::{calls, communities, conversations, messages, saved, users};
use crate::common::types::ConversationKind;

#[test]
fn direct_conversations_have_exactly_two_participants() {
    for conversation in conversations::conversations() {
        if conversation.kind == ConversationKind::Direct {
            assert_eq!(
                conversation.participants.len(),
                2,
                "conversation {} is direct but has {} participants",
                conversation.id,
                conversation.participants.len()
            );
        }
    }
}

#[test]
fn every_conversation_includes_the_current_user() {
    for conversation in conversations::conversations() {
        assert!(
            conversation
                .participants
                .iter()
                .any(|user| user.id == users::CURRENT_USER_ID),
            "conversation {} does not include the current user",
            conversation.id
        );
    }
}

#[test]
fn every_message_references_a_seeded_conversation() {
    let conversation_ids: HashSet<u64> = conversations::conversations()
        .iter()
        .map(|conversation| conversation.id)
        .collect();
    for message in messages::messages() {
        assert!(
            conversation_ids.contains(&message.conversation_id),
            "message {} points at unknown conversation {}",
            message.id,
            message.conversation_id
        );
    }
}

#[test]
fn seed_message_ids_are_unique() {
    let all = messages::messages();
    let ids: HashSet<u64> = all.iter().map(|message| message.id).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn messages_for_partitions_the_seed_table() {
    let total = messages::messages().len();
    let per_conversation: usize = conversations::conversations()
        .iter()
        .map(|conversation| messages::messages_for(conversation.id).len())
        .sum();
    assert_eq!(per_conversation, total);
}

#[test]
fn messages_for_preserves_insertion_order() {
    let all = messages::messages();
    for conversation in conversations::conversations() {
        let expected: Vec<u64> = all
            .iter()
            .filter(|message| message.conversation_id == conversation.id)
            .map(|message| message.id)
            .collect();
        let got: Vec<u64> = messages::messages_for(conversation.id)
            .iter()
            .map(|message| message.id)
            .collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn display_name_prefers_explicit_name() {
    let all = conversations::conversations();
    let group = all
        .iter()
        .find(|conversation| conversation.kind == ConversationKind::Group)
        .unwrap();
    assert_eq!(
        group.display_name(users::CURRENT_USER_ID),
        group.name.clone().unwrap()
    );
}

#[test]
fn display_name_falls_back_to_other_participant() {
    let all = conversations::conversations();
    let direct = all
        .iter()
        .find(|conversation| conversation.id == 1)
        .unwrap();
    assert_eq!(direct.display_name(users::CURRENT_USER_ID), "Sarah Chen");
    // Viewed from the other side, the derived name flips.
    assert_eq!(direct.display_name(2), "Current User");
}

#[test]
fn display_name_unknown_when_no_other_participant() {
    let mut direct = conversations::conversations().remove(0);
    direct.participants.retain(|user| user.id == users::CURRENT_USER_ID);
    assert_eq!(direct.display_name(users::CURRENT_USER_ID), "Unknown");
}

#[test]
fn participant_label_pluralizes() {
    let all = conversations::conversations();
    let group = all.iter().find(|conversation| conversation.id == 2).unwrap();
    assert_eq!(group.participant_label(), "5 participants");

    let mut lone = all[0].clone();
    lone.participants.truncate(1);
    assert_eq!(lone.participant_label(), "1 participant");
}

#[test]
fn group_avatar_uses_name_prefix() {
    let all = conversations::conversations();
    let group = all.iter().find(|conversation| conversation.id == 2).unwrap();
    let (initials, _) = group.avatar(users::CURRENT_USER_ID);
    assert_eq!(initials, "De");
}

#[test]
fn other_seed_tables_are_populated() {
    assert_eq!(users::users().len(), 6);
    assert_eq!(calls::calls().len(), 6);
    assert_eq!(communities::communities().len(), 5);
    assert_eq!(saved::saved_items().len(), 5);
}
