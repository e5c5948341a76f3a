//! Application state module

mod app_state;
mod auth;
pub mod forms;

pub use app_state::*;
pub use auth::*;
