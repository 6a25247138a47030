pub mod configuration;
pub mod error;
pub mod formatter;
pub mod library;
pub mod prompt;
pub mod request;
pub mod result;
pub mod schema;
pub mod session;
pub mod style;

pub use configuration::{AppConfig, GeminiApiConfig, StudioConfig};
pub use error::AppError;
pub use formatter::{Segment, SegmentKind, render_full_script, render_terminal, split_annotated};
pub use prompt::{Prompt, build_prompt};
pub use request::GenerationRequest;
pub use result::{GenerationResult, LyricSuggestion};
pub use schema::response_schema;
pub use session::{GenerateBlocked, PendingGeneration, Phase, SessionEvent, SessionState};
pub use style::{StyleId, StyleInfo, StyleSet, list_styles};
