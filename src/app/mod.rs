pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod studio;

pub use context::AppContext;
pub use crate::ports::CopyStatus;
pub use studio::{EventOutcome, Studio};
