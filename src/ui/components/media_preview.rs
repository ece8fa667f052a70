use eframe::egui;

/// Clickable image thumbnail. Remote assets are not fetched; the bubble shows
/// a placeholder carrying the file name. Returns true on click.
pub fn image_preview(ui: &mut egui::Ui, url: &str) -> bool {
    ui.add(egui::Button::new(format!("🖼 {}", short_name(url))))
        .on_hover_text("Open preview")
        .clicked()
}

/// File attachment row with a download affordance.
pub fn file_preview(ui: &mut egui::Ui, name: &str, size: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("📄 {name}"));
        ui.weak(size);
        if ui.small_button("Download").clicked() {
            // No backend to fetch from.
            log::info!("Download requested for {name}");
        }
    });
}

/// Last path segment of a URL, without the query string.
fn short_name(url: &str) -> &str {
    let base = url.split('?').next().unwrap_or(url);
    base.rsplit('/').next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::short_name;

    #[test]
    fn short_name_strips_path_and_query() {
        assert_eq!(
            short_name("https://images.example.com/photo-123?w=500"),
            "photo-123"
        );
        assert_eq!(short_name("photo.png"), "photo.png");
    }
}
