use eframe::egui;

use crate::common::types::SavedKind;
use crate::ui::query;
use crate::ui::state::AppState;

const FILTER_CHIPS: [(SavedKind, &str); 4] = [
    (SavedKind::Message, "Messages"),
    (SavedKind::File, "Files"),
    (SavedKind::Link, "Links"),
    (SavedKind::Image, "Images"),
];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Saved Items");
    ui.weak("Your bookmarked content");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.saved_search)
            .hint_text("Search saved items")
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.saved_filter.is_none(), "All")
            .clicked()
        {
            state.saved_filter = None;
        }
        for (kind, label) in FILTER_CHIPS {
            if ui
                .selectable_label(state.saved_filter == Some(kind), label)
                .clicked()
            {
                state.toggle_saved_filter(kind);
            }
        }
    });
    ui.separator();

    let filtered = query::filter_saved(&state.saved_items, &state.saved_search, state.saved_filter);

    egui::ScrollArea::vertical()
        .id_salt("saved_rows")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.weak("No saved items match");
                return;
            }
            for item in filtered {
                ui.horizontal(|ui| {
                    ui.label(kind_glyph(item.kind));
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(&item.title);
                            if item.thumbnail.is_some() {
                                ui.weak("(thumbnail)");
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(&item.date);
                                },
                            );
                        });
                        ui.label(egui::RichText::new(query::truncate(&item.description, 72)).weak());
                        if let Some(sender) = &item.sender {
                            ui.weak(format!("From {sender}"));
                        }
                    });
                });
                ui.separator();
            }
        });
}

fn kind_glyph(kind: SavedKind) -> &'static str {
    match kind {
        SavedKind::Message => "💬",
        SavedKind::File => "📄",
        SavedKind::Link => "🔗",
        SavedKind::Image => "🖼",
    }
}
