use super::*;
use crate::common::SimulatorEvent;
use crate::common::types::SavedKind;
use crate::config::Preferences;

fn state() -> AppState {
    AppState::new(Preferences::default())
}

#[test]
fn starts_on_the_design_team_conversation() {
    let state = state();
    assert_eq!(state.active_tab, Tab::Messages);
    assert_eq!(state.active_conversation_id, Some(INITIAL_CONVERSATION));
    assert_eq!(state.messages(INITIAL_CONVERSATION).len(), 7);
}

#[test]
fn leaving_the_messages_tab_clears_the_selection() {
    let mut state = state();
    state.select_tab(Tab::Calls);
    assert_eq!(state.active_conversation_id, None);
    // Coming back does not restore it.
    state.select_tab(Tab::Messages);
    assert_eq!(state.active_conversation_id, None);
}

#[test]
fn reopening_a_conversation_keeps_locally_sent_messages() {
    let mut state = state();
    state.open_conversation(1);
    let seeded = state.messages(1).len();

    assert!(state.send_message("hello there"));
    assert_eq!(state.messages(1).len(), seeded + 1);

    state.open_conversation(3);
    state.open_conversation(1);
    assert_eq!(state.messages(1).len(), seeded + 1);
}

#[test]
fn blank_drafts_are_ignored() {
    let mut state = state();
    let before = state.messages(INITIAL_CONVERSATION).len();
    assert!(!state.send_message(""));
    assert!(!state.send_message("   \t"));
    assert_eq!(state.messages(INITIAL_CONVERSATION).len(), before);
}

#[test]
fn sending_without_a_conversation_does_nothing() {
    let mut state = state();
    state.select_tab(Tab::Saved);
    assert!(!state.send_message("lost words"));
}

#[test]
fn sent_messages_come_from_the_current_user_today() {
    let mut state = state();
    assert!(state.send_message("  trimmed content  "));
    let sent = state.messages(INITIAL_CONVERSATION).last().cloned().unwrap();
    assert_eq!(sent.sender.id, state.current_user.id);
    assert_eq!(sent.content, "trimmed content");
    assert_eq!(sent.day_label, "Today");
    assert!(sent.media.is_none());
    assert!(!sent.timestamp.is_empty());
}

#[test]
fn message_ids_stay_unique_across_conversations() {
    let mut state = state();
    let seed_max = crate::data::messages::messages()
        .iter()
        .map(|message| message.id)
        .max()
        .unwrap();

    assert!(state.send_message("first"));
    let first = state.messages(INITIAL_CONVERSATION).last().unwrap().id;
    assert!(first > seed_max);

    state.open_conversation(1);
    assert!(state.send_message("second"));
    let second = state.messages(1).last().unwrap().id;
    assert_eq!(second, first + 1);
}

#[test]
fn typing_events_only_clear_their_own_conversation() {
    let mut state = state();
    state.apply_simulator_event(SimulatorEvent::TypingStarted { conversation_id: 2 });
    assert_eq!(state.typing_in, Some(2));

    state.apply_simulator_event(SimulatorEvent::TypingStopped { conversation_id: 1 });
    assert_eq!(state.typing_in, Some(2));

    state.apply_simulator_event(SimulatorEvent::TypingStopped { conversation_id: 2 });
    assert_eq!(state.typing_in, None);
}

#[test]
fn clear_typing_hides_the_pill_immediately() {
    let mut state = state();
    state.apply_simulator_event(SimulatorEvent::TypingStarted { conversation_id: 2 });
    state.clear_typing();
    assert_eq!(state.typing_in, None);
}

#[test]
fn saved_filter_chips_toggle() {
    let mut state = state();
    state.toggle_saved_filter(SavedKind::File);
    assert_eq!(state.saved_filter, Some(SavedKind::File));
    state.toggle_saved_filter(SavedKind::Link);
    assert_eq!(state.saved_filter, Some(SavedKind::Link));
    state.toggle_saved_filter(SavedKind::Link);
    assert_eq!(state.saved_filter, None);
}
