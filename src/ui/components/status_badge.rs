use eframe::egui;

use crate::common::palette;
use crate::common::types::Presence;

pub fn presence_color(status: Presence) -> egui::Color32 {
    match status {
        Presence::Online => palette::GREEN,
        Presence::Offline => palette::GRAY,
        Presence::Away => palette::AMBER,
    }
}

/// Small presence dot next to an avatar.
pub fn render(ui: &mut egui::Ui, status: Presence) {
    ui.colored_label(presence_color(status), "●");
}

/// The "typing" pill shown under the message list.
pub fn render_typing_pill(ui: &mut egui::Ui) {
    let dots = match (ui.input(|i| i.time) * 2.0) as usize % 3 {
        0 => ".",
        1 => "..",
        _ => "...",
    };
    ui.horizontal(|ui| {
        ui.colored_label(palette::PRIMARY, "●");
        ui.label(
            egui::RichText::new(format!("typing{dots}"))
                .weak()
                .italics(),
        );
    });
}
