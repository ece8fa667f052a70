pub mod commands;
pub mod events;
pub mod palette;
pub mod types;

pub use commands::SimulatorCommand;
pub use events::SimulatorEvent;
