use eframe::egui;

use crate::common::palette;
use crate::common::types::CallDirection;
use crate::ui::query;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Calls");
    ui.weak("Recent call history");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.call_search)
            .hint_text("Search calls")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let filtered = query::filter_calls(&state.calls, &state.call_search);

    egui::ScrollArea::vertical()
        .id_salt("call_rows")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.weak("No calls match");
                return;
            }
            for call in filtered {
                ui.horizontal(|ui| {
                    ui.colored_label(call.contact_color, &call.contact_initials);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(&call.contact_name);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(&call.time);
                                },
                            );
                        });
                        ui.horizontal(|ui| {
                            let (glyph, color, label) = direction_badge(call.direction);
                            ui.colored_label(color, glyph);
                            ui.label(label);
                            if let Some(duration) = &call.duration {
                                ui.weak(format!("({duration})"));
                            }
                        });
                        ui.weak(&call.day_label);
                    });
                });
                ui.separator();
            }
        });

    ui.separator();
    if ui.button("📞 New Call").clicked() {
        log::info!("Dialer is not part of the prototype");
    }
}

fn direction_badge(direction: CallDirection) -> (&'static str, egui::Color32, &'static str) {
    match direction {
        CallDirection::Incoming => ("⬇", palette::GREEN, "Incoming call"),
        CallDirection::Outgoing => ("⬆", palette::PRIMARY, "Outgoing call"),
        CallDirection::Missed => ("✕", palette::RED, "Missed call"),
    }
}
