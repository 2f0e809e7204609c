//! Interactions HTTP endpoint and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod server;
pub mod signature;

// Re-export the main entry points for convenience
pub use handler::handle_interaction;
pub use server::{AppState, build_router, serve};
