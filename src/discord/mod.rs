//! All Discord-specific functionality

pub mod client;
pub mod models;
pub mod response_builder;

// Re-export main types for convenience
pub use client::{DiscordClient, HISTORY_PAGE_LIMIT};
pub use models::{DiscordMessage, DiscordUser, Interaction, InteractionType};
