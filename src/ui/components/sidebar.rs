use eframe::egui;

use crate::ui::state::{AppState, Tab};

#[derive(Default)]
pub struct SidebarActions {
    pub selected_tab: Option<Tab>,
    pub preferences_changed: bool,
}

const TABS: [(Tab, &str); 4] = [
    (Tab::Messages, "💬 Chats"),
    (Tab::Communities, "👥 Groups"),
    (Tab::Calls, "📞 Calls"),
    (Tab::Saved, "🔖 Saved"),
];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> SidebarActions {
    let mut actions = SidebarActions::default();

    ui.add_space(8.0);
    ui.vertical_centered_justified(|ui| {
        ui.colored_label(
            state.current_user.color,
            egui::RichText::new(&state.current_user.initials).strong(),
        );
        ui.separator();

        for (tab, label) in TABS {
            let selected = state.active_tab == tab;
            if ui.selectable_label(selected, label).clicked() && !selected {
                actions.selected_tab = Some(tab);
            }
        }

        ui.separator();
        if ui
            .selectable_label(state.settings_open, "⚙ Settings")
            .clicked()
        {
            state.settings_open = !state.settings_open;
        }
        if state.settings_open {
            if ui
                .checkbox(&mut state.preferences.dark_mode, "Dark mode")
                .changed()
            {
                actions.preferences_changed = true;
            }
            if ui
                .checkbox(&mut state.preferences.sound_cues, "Sound cues")
                .changed()
            {
                actions.preferences_changed = true;
            }
        }
    });

    actions
}
