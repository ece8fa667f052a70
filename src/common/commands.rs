/// Commands the UI sends down to the typing simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorCommand {
    /// The user opened a conversation; start a fresh typing cycle for it.
    /// Supersedes any cycle that is pending or visible.
    Watch { conversation_id: u64 },
    /// The local user started typing; cancel the pending or visible indicator.
    LocalTyping,
}
