//! Single-threaded driver coupling the session with the generator.
//!
//! Events are handled one at a time; the generation call is the only suspension point
//! and runs to completion before the next event is taken.

use tracing::info;

use crate::domain::{
    GenerateBlocked, GenerationResult, SessionEvent, SessionState, StyleId, render_full_script,
};
use crate::ports::{ClipboardWriter, CopyStatus, GenerationClient};
use crate::services::Generator;

/// What happened in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State updated.
    Applied,
    /// Event dropped without changing state.
    Ignored,
    /// Generate refused; state unchanged.
    Blocked(GenerateBlocked),
    /// Generation finished in `Success`.
    Generated,
    /// Generation finished in `Failure` with this user-facing message.
    Failed(String),
}

pub struct Studio<C: GenerationClient> {
    session: SessionState,
    generator: Generator<C>,
}

impl<C: GenerationClient> Studio<C> {
    pub fn new(generator: Generator<C>, default_style: StyleId) -> Self {
        Self { session: SessionState::new(default_style), generator }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn handle(&mut self, event: SessionEvent) -> EventOutcome {
        match event {
            SessionEvent::LyricsEdited(text) => {
                self.session.edit_lyrics(text);
                EventOutcome::Applied
            }
            SessionEvent::StyleToggled(style) => {
                if self.session.toggle_style(style) {
                    EventOutcome::Applied
                } else {
                    EventOutcome::Ignored
                }
            }
            SessionEvent::GenerateRequested => self.generate(),
            SessionEvent::ResetRequested => {
                self.session.reset();
                EventOutcome::Applied
            }
        }
    }

    fn generate(&mut self) -> EventOutcome {
        let pending = match self.session.begin_generate() {
            Ok(pending) => pending,
            Err(blocked) => return EventOutcome::Blocked(blocked),
        };

        let outcome = self.generator.generate_request(pending.request());
        self.session.complete_generate(&pending, outcome);

        match (self.session.result(), self.session.error()) {
            (Some(_), _) => {
                info!(styles = %pending.request().styles().labels(), "ad-libs generated");
                EventOutcome::Generated
            }
            (None, Some(message)) => EventOutcome::Failed(message.to_string()),
            (None, None) => EventOutcome::Ignored,
        }
    }

    /// Copy the full recording script of the current result.
    pub fn copy_script(&self, clipboard: &mut dyn ClipboardWriter) -> CopyStatus {
        match self.session.result() {
            Some(result) => clipboard.copy(&render_full_script(result)),
            None => CopyStatus::NothingToCopy,
        }
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.session.result()
    }
}
