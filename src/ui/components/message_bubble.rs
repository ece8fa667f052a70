use eframe::egui;

use crate::common::palette;
use crate::common::types::{MediaAttachment, Message};

use super::media_preview;

/// One chat bubble, aligned by sender. Returns the image URL when the user
/// clicks an image attachment.
pub fn render(
    ui: &mut egui::Ui,
    message: &Message,
    current_user_id: u64,
    show_header: bool,
) -> Option<String> {
    let mut clicked_image = None;
    let is_current_user = message.sender.id == current_user_id;

    let layout = if is_current_user {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        if !is_current_user && show_header {
            ui.colored_label(message.sender.color, &message.sender.initials);
        }

        ui.vertical(|ui| {
            ui.set_max_width(320.0);

            if is_current_user {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&message.timestamp);
                });
            } else if show_header {
                ui.horizontal(|ui| {
                    if let Some(name) = &message.sender.full_name {
                        ui.small(name);
                    }
                    ui.weak(&message.timestamp);
                });
            }

            let fill = if is_current_user {
                palette::PRIMARY
            } else {
                ui.visuals().extreme_bg_color
            };
            egui::Frame::group(ui.style())
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    let text = if is_current_user {
                        egui::RichText::new(&message.content).color(egui::Color32::WHITE)
                    } else {
                        egui::RichText::new(&message.content)
                    };
                    ui.label(text);

                    if let Some(media) = &message.media {
                        match media {
                            MediaAttachment::Image { url } => {
                                if media_preview::image_preview(ui, url) {
                                    clicked_image = Some(url.clone());
                                }
                            }
                            MediaAttachment::File { name, size } => {
                                media_preview::file_preview(ui, name, size);
                            }
                        }
                    }
                });
        });
    });

    clicked_image
}
