use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{SimulatorCommand, SimulatorEvent};
use crate::config::{self, Preferences};
use crate::sound::{self, SoundCue};

use super::components::{
    calls_list,
    chat_area::{self, ChatAreaActions},
    communities_list, conversation_list, lightbox, saved_items_list,
    sidebar::{self, SidebarActions},
};
use super::state::{AppState, Tab};

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<SimulatorCommand>,
    event_receiver: mpsc::Receiver<SimulatorEvent>,
    preferences_path: String,
}

impl ChatApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<SimulatorCommand>,
        event_receiver: mpsc::Receiver<SimulatorEvent>,
        preferences: Preferences,
        preferences_path: String,
    ) -> Self {
        let state = AppState::new(preferences);
        apply_theme(&cc.egui_ctx, state.preferences.dark_mode);

        let app = Self {
            state,
            command_sender,
            event_receiver,
            preferences_path,
        };
        // Start the typing cycle for the initially selected conversation.
        if let Some(id) = app.state.active_conversation_id {
            app.send_command(SimulatorCommand::Watch { conversation_id: id });
        }
        app
    }

    fn handle_simulator_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_simulator_event(event);
        }
    }

    fn send_command(&self, command: SimulatorCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to typing simulator: {err}");
        }
    }

    fn open_conversation(&mut self, id: u64) {
        if self.state.active_conversation_id == Some(id) {
            return;
        }
        sound::play(SoundCue::SelectConversation, &self.state.preferences);
        self.state.open_conversation(id);
        self.send_command(SimulatorCommand::Watch { conversation_id: id });
    }

    fn apply_chat_actions(&mut self, actions: ChatAreaActions) {
        if actions.local_typing {
            self.state.clear_typing();
            self.send_command(SimulatorCommand::LocalTyping);
        }
        if let Some(content) = actions.send {
            if self.state.send_message(&content) {
                sound::play(SoundCue::MessageSent, &self.state.preferences);
            }
        }
        if let Some(url) = actions.preview_image {
            sound::play(SoundCue::MediaPreview, &self.state.preferences);
            self.state.lightbox = Some(url);
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_simulator_events();

        egui::SidePanel::left("nav_sidebar")
            .resizable(false)
            .exact_width(88.0)
            .show(ctx, |ui| {
                let actions: SidebarActions = sidebar::render(ui, &mut self.state);
                if let Some(tab) = actions.selected_tab {
                    self.state.select_tab(tab);
                }
                if actions.preferences_changed {
                    apply_theme(ctx, self.state.preferences.dark_mode);
                    config::persist_preferences(&self.preferences_path, &self.state.preferences);
                }
            });

        match self.state.active_tab {
            Tab::Messages => {
                egui::SidePanel::left("conversation_list")
                    .resizable(true)
                    .default_width(280.0)
                    .show(ctx, |ui| {
                        if let Some(id) = conversation_list::render(ui, &mut self.state) {
                            self.open_conversation(id);
                        }
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    let actions = chat_area::render(ui, &mut self.state);
                    self.apply_chat_actions(actions);
                });
            }
            Tab::Communities => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    communities_list::render(ui, &mut self.state);
                });
            }
            Tab::Calls => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    calls_list::render(ui, &mut self.state);
                });
            }
            Tab::Saved => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    saved_items_list::render(ui, &mut self.state);
                });
            }
        }

        if let Some(url) = self.state.lightbox.clone() {
            if lightbox::render(ctx, &url) {
                self.state.lightbox = None;
            }
        }

        // Simulator events arrive without a wake-up hook; poll for them.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
