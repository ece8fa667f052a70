//! Static seed tables for the prototype. Everything is built at startup and
//! lives in memory; locally sent messages append to copies held by the UI
//! state and reset on restart.

pub mod calls;
pub mod communities;
pub mod conversations;
pub mod messages;
pub mod saved;
pub mod users;

#[cfg(test)]
#[path = "data_test.rs"]
mod tests;
