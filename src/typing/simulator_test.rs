use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use super::TypingSimulator;
use crate::common::{SimulatorCommand, SimulatorEvent};

fn spawn_simulator(
    delay: Duration,
    visible_for: Duration,
) -> (
    mpsc::Sender<SimulatorCommand>,
    mpsc::Receiver<SimulatorEvent>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = mpsc::channel(8);
    // delay_min == delay_max pins the random window for determinism.
    tokio::spawn(TypingSimulator::with_timing(event_tx, cmd_rx, delay, delay, visible_for).run());
    (cmd_tx, event_rx)
}

async fn next_event(rx: &mut mpsc::Receiver<SimulatorEvent>) -> SimulatorEvent {
    timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("event receive timed out")
        .expect("event channel closed")
}

async fn assert_no_event(rx: &mut mpsc::Receiver<SimulatorEvent>) {
    assert!(
        timeout(Duration::from_millis(80), rx.recv()).await.is_err(),
        "expected no simulator event"
    );
}

#[tokio::test]
async fn watch_emits_started_then_stopped() {
    let (cmd_tx, mut event_rx) =
        spawn_simulator(Duration::from_millis(10), Duration::from_millis(20));

    cmd_tx
        .send(SimulatorCommand::Watch { conversation_id: 7 })
        .await
        .unwrap();

    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStarted { conversation_id: 7 }
    );
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStopped { conversation_id: 7 }
    );
}

#[tokio::test]
async fn local_typing_cancels_a_pending_cycle() {
    let (cmd_tx, mut event_rx) =
        spawn_simulator(Duration::from_secs(5), Duration::from_secs(5));

    cmd_tx
        .send(SimulatorCommand::Watch { conversation_id: 1 })
        .await
        .unwrap();
    cmd_tx.send(SimulatorCommand::LocalTyping).await.unwrap();

    assert_no_event(&mut event_rx).await;
}

#[tokio::test]
async fn local_typing_takes_down_a_visible_pill() {
    let (cmd_tx, mut event_rx) =
        spawn_simulator(Duration::from_millis(10), Duration::from_secs(10));

    cmd_tx
        .send(SimulatorCommand::Watch { conversation_id: 3 })
        .await
        .unwrap();
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStarted { conversation_id: 3 }
    );

    cmd_tx.send(SimulatorCommand::LocalTyping).await.unwrap();
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStopped { conversation_id: 3 }
    );
    assert_no_event(&mut event_rx).await;
}

#[tokio::test]
async fn a_new_watch_supersedes_the_previous_conversation() {
    let (cmd_tx, mut event_rx) =
        spawn_simulator(Duration::from_millis(10), Duration::from_secs(10));

    cmd_tx
        .send(SimulatorCommand::Watch { conversation_id: 1 })
        .await
        .unwrap();
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStarted { conversation_id: 1 }
    );

    cmd_tx
        .send(SimulatorCommand::Watch { conversation_id: 2 })
        .await
        .unwrap();

    // The old pill is retracted before the new cycle produces anything.
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStopped { conversation_id: 1 }
    );
    assert_eq!(
        next_event(&mut event_rx).await,
        SimulatorEvent::TypingStarted { conversation_id: 2 }
    );
}

#[tokio::test]
async fn task_stops_when_the_command_channel_closes() {
    let (cmd_tx, mut event_rx) =
        spawn_simulator(Duration::from_millis(10), Duration::from_millis(10));

    drop(cmd_tx);

    let closed = timeout(Duration::from_millis(500), event_rx.recv())
        .await
        .expect("simulator did not shut down");
    assert!(closed.is_none());
}
