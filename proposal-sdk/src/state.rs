use std::path::PathBuf;

/// Label of the generation control while idle
pub const GENERATE_LABEL: &str = "Generate PDF";

/// Label of the generation control while a request is in flight
pub const GENERATING_LABEL: &str = "Generating…";

/// Coarse phase of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    InProgress,
}

/// In-progress flag and last error message for document generation.
///
/// The flag is derived from the number of outstanding attempts, so it stays
/// raised until the last attempt in flight has resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    outstanding: usize,
    error: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_progress(&self) -> bool {
        self.outstanding > 0
    }

    /// Most recent failure message, if the last resolved attempt failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.in_progress() {
            SubmissionPhase::InProgress
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Whether the generation control should be enabled
    pub fn can_generate(&self) -> bool {
        !self.in_progress()
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase() {
            SubmissionPhase::Idle => GENERATE_LABEL,
            SubmissionPhase::InProgress => GENERATING_LABEL,
        }
    }

    pub(crate) fn start(&mut self) {
        self.outstanding += 1;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.error = Some(message);
    }
}

/// Result of one generation attempt as seen by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The document was saved at this path
    Saved(PathBuf),
    /// The attempt failed; the message is also stored in the submission state
    Failed(String),
}

impl GenerationOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, GenerationOutcome::Saved(_))
    }
}
