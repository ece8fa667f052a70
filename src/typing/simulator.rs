use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::common::{SimulatorCommand, SimulatorEvent};

/// Window for the random wait before the remote side "starts typing".
const DELAY_MIN: Duration = Duration::from_secs(3);
const DELAY_MAX: Duration = Duration::from_secs(13);
/// How long the typing pill stays visible before it goes away on its own.
const VISIBLE_FOR: Duration = Duration::from_secs(4);

/// Cycle state: one watched conversation at a time.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Waiting { conversation_id: u64 },
    Showing { conversation_id: u64 },
}

/// Background task simulating the other side of the active conversation
/// typing. The UI drives it over the command channel; every command cancels
/// whatever the task was waiting on, so a stale pill can never fire for a
/// conversation the user has already left.
pub struct TypingSimulator {
    event_sender: mpsc::Sender<SimulatorEvent>,
    command_receiver: mpsc::Receiver<SimulatorCommand>,
    delay_min: Duration,
    delay_max: Duration,
    visible_for: Duration,
}

impl TypingSimulator {
    pub fn new(
        event_sender: mpsc::Sender<SimulatorEvent>,
        command_receiver: mpsc::Receiver<SimulatorCommand>,
    ) -> Self {
        Self::with_timing(event_sender, command_receiver, DELAY_MIN, DELAY_MAX, VISIBLE_FOR)
    }

    /// Constructor with explicit timing, used by tests to shrink the windows.
    pub fn with_timing(
        event_sender: mpsc::Sender<SimulatorEvent>,
        command_receiver: mpsc::Receiver<SimulatorCommand>,
        delay_min: Duration,
        delay_max: Duration,
        visible_for: Duration,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            delay_min,
            delay_max,
            visible_for,
        }
    }

    /// Runs until the command channel closes.
    pub async fn run(mut self) {
        log::info!("Typing simulator started");
        let mut phase = Phase::Idle;

        loop {
            phase = match phase {
                Phase::Idle => match self.command_receiver.recv().await {
                    Some(command) => apply_command(command),
                    None => break,
                },
                Phase::Waiting { conversation_id } => {
                    let delay = random_delay(self.delay_min, self.delay_max);
                    tokio::select! {
                        () = sleep(delay) => {
                            emit(
                                &self.event_sender,
                                SimulatorEvent::TypingStarted { conversation_id },
                            )
                            .await;
                            Phase::Showing { conversation_id }
                        }
                        command = self.command_receiver.recv() => match command {
                            Some(command) => apply_command(command),
                            None => break,
                        },
                    }
                }
                Phase::Showing { conversation_id } => {
                    tokio::select! {
                        () = sleep(self.visible_for) => {
                            emit(
                                &self.event_sender,
                                SimulatorEvent::TypingStopped { conversation_id },
                            )
                            .await;
                            Phase::Idle
                        }
                        command = self.command_receiver.recv() => match command {
                            Some(command) => {
                                // The pill is visible; take it down before
                                // acting on the command.
                                emit(
                                    &self.event_sender,
                                    SimulatorEvent::TypingStopped { conversation_id },
                                )
                                .await;
                                apply_command(command)
                            }
                            None => break,
                        },
                    }
                }
            };
        }

        log::info!("Typing simulator stopped");
    }
}

fn apply_command(command: SimulatorCommand) -> Phase {
    match command {
        SimulatorCommand::Watch { conversation_id } => Phase::Waiting { conversation_id },
        SimulatorCommand::LocalTyping => Phase::Idle,
    }
}

fn random_delay(min: Duration, max: Duration) -> Duration {
    let min_ms = min.as_millis() as u64;
    let max_ms = max.as_millis() as u64;
    if max_ms <= min_ms {
        return min;
    }
    Duration::from_millis(rand::thread_rng().gen_range(min_ms..max_ms))
}

async fn emit(sender: &mpsc::Sender<SimulatorEvent>, event: SimulatorEvent) {
    if let Err(err) = sender.send(event).await {
        log::warn!("Failed to deliver simulator event: {err}");
    }
}

#[cfg(test)]
#[path = "simulator_test.rs"]
mod tests;
