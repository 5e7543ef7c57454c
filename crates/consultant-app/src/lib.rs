//! consultant-app - Application state and orchestration for Stock Consultant
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the session and theme containers, the route guard, per-screen
//! view state, the async service traits with their mock backends, and the
//! action executor that runs simulated latency on tokio tasks.

pub mod actions;
pub mod config;
pub mod downloads;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod screens;
pub mod services;
pub mod session;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use router::{RouteEvent, Router, Screen};
pub use screens::{ActiveView, ViewId};
pub use services::{MockServices, Services};
pub use session::SessionState;
pub use state::AppState;
pub use theme::ThemeState;
