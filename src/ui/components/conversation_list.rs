use eframe::egui;

use crate::common::palette;
use crate::sound::{self, SoundCue};
use crate::ui::query;
use crate::ui::state::AppState;

use super::status_badge;

/// Searchable conversation list. Returns the conversation the user clicked.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<u64> {
    let mut selected = None;

    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.conversation_search)
            .hint_text("Search messages")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let current_user_id = state.current_user.id;
    let filtered = query::filter_conversations(
        &state.conversations,
        &state.conversation_search,
        current_user_id,
    );
    let active_id = state.active_conversation_id;

    egui::ScrollArea::vertical()
        .id_salt("conversation_rows")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.weak("No conversations match");
                return;
            }
            for conversation in filtered {
                let is_active = active_id == Some(conversation.id);
                let name = conversation.display_name(current_user_id);
                let (initials, color) = conversation.avatar(current_user_id);

                ui.horizontal(|ui| {
                    ui.colored_label(color, &initials);
                    if let Some(other) = conversation.other_participant(current_user_id) {
                        status_badge::render(ui, other.status);
                    }
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            if ui
                                .selectable_label(is_active, egui::RichText::new(&name).strong())
                                .clicked()
                            {
                                selected = Some(conversation.id);
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(&conversation.last_message.timestamp);
                                },
                            );
                        });
                        ui.label(
                            egui::RichText::new(query::truncate(
                                &conversation.last_message.content,
                                48,
                            ))
                            .weak(),
                        );
                        if conversation.unread_count > 0 {
                            ui.colored_label(
                                palette::PRIMARY,
                                format!("{} unread", conversation.unread_count),
                            );
                        }
                    });
                });
                ui.separator();
            }
        });

    ui.separator();
    if ui.button("＋ New Message").clicked() {
        sound::play(SoundCue::Notification, &state.preferences);
        log::info!("New-message dialog is not part of the prototype");
    }

    selected
}
