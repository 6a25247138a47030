//! Session state machine.
//!
//! Phases: `Idle -> Loading -> Success | Failure`, cyclic for the life of the process.
//! At most one generation is outstanding: `begin_generate` refuses while `Loading`.
//! Every issued call carries a ticket; `complete_generate` drops completions whose
//! ticket is no longer current, so a `reset` during `Loading` cannot be overwritten
//! by a late result.

use tracing::{debug, warn};

use crate::domain::{AppError, GenerationRequest, GenerationResult, StyleId, StyleSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success(GenerationResult),
    Failure(String),
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Success(_) => "success",
            Phase::Failure(_) => "failure",
        }
    }
}

/// Why a generate action was refused. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateBlocked {
    /// A call is already outstanding.
    InFlight,
    EmptyLyrics,
    NoStyles,
}

impl std::fmt::Display for GenerateBlocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateBlocked::InFlight => write!(f, "a generation is already in progress"),
            GenerateBlocked::EmptyLyrics => write!(f, "enter some lyrics first"),
            GenerateBlocked::NoStyles => write!(f, "select at least one style"),
        }
    }
}

/// Handle for an issued generation call.
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    ticket: u64,
    request: GenerationRequest,
}

impl PendingGeneration {
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

/// User-triggered events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LyricsEdited(String),
    StyleToggled(StyleId),
    GenerateRequested,
    ResetRequested,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    lyrics: String,
    styles: StyleSet,
    default_style: StyleId,
    phase: Phase,
    ticket: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(StyleId::DEFAULT)
    }
}

impl SessionState {
    /// Idle session with empty lyrics and `default_style` selected.
    pub fn new(default_style: StyleId) -> Self {
        Self {
            lyrics: String::new(),
            styles: StyleSet::single(default_style),
            default_style,
            phase: Phase::Idle,
            ticket: 0,
        }
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    pub fn default_style(&self) -> StyleId {
        self.default_style
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the lyrics. The phase is unchanged, including any stale error.
    pub fn edit_lyrics(&mut self, text: impl Into<String>) {
        self.lyrics = text.into();
    }

    /// Toggle `style`. Ignored while loading; returns whether the set changed.
    pub fn toggle_style(&mut self, style: StyleId) -> bool {
        if self.is_loading() {
            warn!(style = style.as_str(), "style toggle ignored while a generation is in flight");
            return false;
        }
        let selected = self.styles.toggle(style);
        debug!(style = style.as_str(), selected, "style toggled");
        true
    }

    /// Check whether a generate action would be accepted.
    pub fn can_generate(&self) -> Result<(), GenerateBlocked> {
        if self.is_loading() {
            return Err(GenerateBlocked::InFlight);
        }
        if self.lyrics.trim().is_empty() {
            return Err(GenerateBlocked::EmptyLyrics);
        }
        if self.styles.is_empty() {
            return Err(GenerateBlocked::NoStyles);
        }
        Ok(())
    }

    /// Enter `Loading`, clearing any result or error, and hand out the request to send.
    pub fn begin_generate(&mut self) -> Result<PendingGeneration, GenerateBlocked> {
        if let Err(blocked) = self.can_generate() {
            if blocked == GenerateBlocked::InFlight {
                warn!("generate suppressed: a call is already outstanding");
            }
            return Err(blocked);
        }

        let request = GenerationRequest::new(self.lyrics.clone(), self.styles.clone())
            .map_err(|e| match e {
                AppError::NoStylesSelected => GenerateBlocked::NoStyles,
                _ => GenerateBlocked::EmptyLyrics,
            })?;

        self.ticket += 1;
        self.phase = Phase::Loading;
        debug!(ticket = self.ticket, styles = %self.styles.labels(), "generation started");
        Ok(PendingGeneration { ticket: self.ticket, request })
    }

    /// Resolve an outstanding call. Returns false if the completion was stale and dropped.
    pub fn complete_generate(
        &mut self,
        pending: &PendingGeneration,
        outcome: Result<GenerationResult, AppError>,
    ) -> bool {
        if !self.is_loading() || pending.ticket != self.ticket {
            debug!(ticket = pending.ticket, current = self.ticket, "stale generation dropped");
            return false;
        }
        self.phase = match outcome {
            Ok(result) => Phase::Success(result),
            Err(error) => Phase::Failure(error.user_message()),
        };
        debug!(ticket = self.ticket, phase = self.phase.label(), "generation finished");
        true
    }

    /// Back to `Idle` with empty lyrics and only the default style selected.
    pub fn reset(&mut self) {
        if self.is_loading() {
            // The outstanding call's ticket no longer matches.
            self.ticket += 1;
        }
        self.lyrics.clear();
        self.styles = StyleSet::single(self.default_style);
        self.phase = Phase::Idle;
        debug!("session reset");
    }
}
