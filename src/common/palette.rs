//! Accent colors shared by seed data and components.

use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const AMBER: Color32 = Color32::from_rgb(245, 158, 11);
pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const GRAY: Color32 = Color32::from_rgb(156, 163, 175);
