mod simulator;

pub use simulator::TypingSimulator;
