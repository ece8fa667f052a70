/// Events the typing simulator sends up to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorEvent {
    TypingStarted { conversation_id: u64 },
    TypingStopped { conversation_id: u64 },
}
