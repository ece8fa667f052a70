pub mod app;
pub mod components;
pub mod query;
pub mod state;

pub use app::ChatApp;
