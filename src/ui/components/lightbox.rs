use eframe::egui;

/// Full-window overlay showing the enlarged media item. Returns true when it
/// should close: Escape, the Close button, or a click on the backdrop.
pub fn render(ctx: &egui::Context, url: &str) -> bool {
    let mut close = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Area::new(egui::Id::new("lightbox_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            ui.painter()
                .rect_filled(
                    screen,
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_black_alpha(220),
                );
            if ui
                .allocate_rect(screen, egui::Sense::click())
                .clicked()
            {
                close = true;
            }
        });

    egui::Window::new("Media preview")
        .order(egui::Order::Tooltip)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("🖼").size(48.0));
                ui.monospace(url);
                ui.weak("Remote image assets are not fetched in the prototype");
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

    close
}
