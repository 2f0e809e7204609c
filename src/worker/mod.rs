//! Background summary job: fetch, condense, complete, deliver

pub mod deliver;
pub mod handler;
pub mod summarize;

use std::fmt;

use thiserror::Error;

use crate::errors::BotError;

// Re-export the entry points for convenience
pub use handler::{process_task, spawn_task};

/// Pipeline step a task failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchHistory,
    GenerateSummary,
    Deliver,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FetchHistory => "fetch_history",
            Stage::GenerateSummary => "generate_summary",
            Stage::Deliver => "deliver",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct TaskError {
    pub stage: Stage,
    #[source]
    pub source: BotError,
}

impl TaskError {
    #[must_use]
    pub fn new(stage: Stage, source: BotError) -> Self {
        Self { stage, source }
    }
}
