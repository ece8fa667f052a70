use eframe::egui;

use crate::common::types::Presence;
use crate::ui::query;
use crate::ui::state::AppState;

use super::{input_bar, message_bubble, status_badge};

#[derive(Default)]
pub struct ChatAreaActions {
    /// Draft the user sent this frame.
    pub send: Option<String>,
    /// Image attachment the user clicked, to be opened in the lightbox.
    pub preview_image: Option<String>,
    /// The draft just went from empty to non-empty.
    pub local_typing: bool,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> ChatAreaActions {
    let mut actions = ChatAreaActions::default();

    let Some(conversation) = state.active_conversation().cloned() else {
        ui.centered_and_justified(|ui| {
            ui.weak("Select a conversation to start messaging");
        });
        return actions;
    };

    let current_user_id = state.current_user.id;

    // Header
    ui.horizontal(|ui| {
        let (initials, color) = conversation.avatar(current_user_id);
        ui.colored_label(color, &initials);
        ui.vertical(|ui| {
            ui.strong(conversation.display_name(current_user_id));
            match conversation.other_participant(current_user_id) {
                Some(other) => {
                    ui.horizontal(|ui| {
                        status_badge::render(ui, other.status);
                        // Away collapses to Offline in the header, as in the
                        // conversation list.
                        ui.weak(if other.status == Presence::Online {
                            "Online"
                        } else {
                            "Offline"
                        });
                    });
                }
                None => {
                    ui.weak(conversation.participant_label());
                }
            }
        });
    });
    ui.separator();

    let typing_here = state.typing_in == Some(conversation.id);
    let messages = state.messages(conversation.id);

    egui::ScrollArea::vertical()
        .id_salt("chat_messages")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            for group in query::group_by_day(messages) {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(group.label).weak().small());
                });
                for (index, message) in group.messages.iter().enumerate() {
                    let show_header = query::show_sender_header(index, &group.messages);
                    if let Some(url) =
                        message_bubble::render(ui, message, current_user_id, show_header)
                    {
                        actions.preview_image = Some(url);
                    }
                    ui.add_space(4.0);
                }
            }
            if typing_here {
                status_badge::render_typing_pill(ui);
            }
        });

    ui.separator();
    let was_empty = state.input_text.is_empty();
    if let Some(content) = input_bar::render(ui, &mut state.input_text) {
        actions.send = Some(content);
    }
    if was_empty && !state.input_text.is_empty() {
        actions.local_typing = true;
    }

    actions
}
