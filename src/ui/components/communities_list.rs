use eframe::egui;

use crate::common::palette;
use crate::common::types::Community;
use crate::ui::query;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(id) = state.active_community {
        let community = state
            .communities
            .iter()
            .find(|community| community.id == id)
            .cloned();
        match community {
            Some(community) => {
                if render_detail(ui, &community) {
                    state.active_community = None;
                }
                return;
            }
            None => state.active_community = None,
        }
    }

    ui.heading("Communities");
    ui.weak("Groups you might be interested in");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.community_search)
            .hint_text("Search communities")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let filtered = query::filter_communities(&state.communities, &state.community_search);
    let mut opened = None;

    egui::ScrollArea::vertical()
        .id_salt("community_rows")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.weak("No communities match");
                return;
            }
            for community in filtered {
                ui.horizontal(|ui| {
                    ui.colored_label(community.color, &community.initials);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            if ui
                                .selectable_label(
                                    false,
                                    egui::RichText::new(&community.name).strong(),
                                )
                                .clicked()
                            {
                                opened = Some(community.id);
                            }
                            if community.unread_count > 0 {
                                ui.colored_label(
                                    palette::PRIMARY,
                                    format!("{} new", community.unread_count),
                                );
                            }
                        });
                        ui.weak(&community.description);
                        ui.weak(format!("{} members", community.member_count));
                    });
                });
                ui.separator();
            }
        });

    if let Some(id) = opened {
        state.active_community = Some(id);
    }
}

/// Community detail view. Returns true when the back button is clicked.
fn render_detail(ui: &mut egui::Ui, community: &Community) -> bool {
    let mut back = false;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            back = true;
        }
        ui.colored_label(community.color, &community.initials);
        ui.vertical(|ui| {
            ui.heading(&community.name);
            ui.weak(format!("{} members", community.member_count));
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("community_detail")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.strong("About this community");
            ui.label(&community.description);
            ui.add_space(8.0);

            ui.strong("Popular discussions");
            for index in 1..=3 {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.strong(format!("Discussion topic {index}"));
                    ui.weak("Placeholder thread content for the prototype.");
                    ui.horizontal(|ui| {
                        ui.weak("23 replies");
                        ui.weak("2 hours ago");
                    });
                });
            }
            ui.add_space(8.0);

            ui.strong("Active members");
            for index in 1..=4 {
                ui.horizontal(|ui| {
                    ui.label(format!("User {index}"));
                    ui.weak("Active now");
                });
            }
        });

    ui.separator();
    if ui.button("＋ New Discussion").clicked() {
        log::info!("Discussions are not part of the prototype");
    }

    back
}
