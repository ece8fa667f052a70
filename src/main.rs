mod common;
mod config;
mod data;
mod sound;
mod typing;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use typing::TypingSimulator;
use ui::ChatApp;

#[derive(Parser)]
#[command(name = "flow-chat", version, about = "Desktop chat client prototype")]
struct Cli {
    /// Path to the JSON preferences file
    #[arg(long, default_value = config::DEFAULT_PREFERENCES_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let preferences = config::load_preferences(&cli.config);

    // UI -> simulator
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Simulator -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // The typing indicator runs as an explicit delayed task beside the UI.
    // Dropping the command sender on exit shuts it down.
    tokio::spawn(async move {
        TypingSimulator::new(event_tx, cmd_rx).run().await;
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let preferences_path = cli.config.clone();

    eframe::run_native(
        "Flow Chat",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Flow Chat started (preferences: {preferences_path})");

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                preferences.clone(),
                preferences_path.clone(),
            )))
        }),
    )
}
