use crate::domain::{Passport, PassportError};

/// Trait the completion/points bookkeeping implements for the submission flow
pub trait CompletionLedger {
    /// Record one accepted completion, awarding its points.
    /// MUST be exactly-once per challenge: a repeated id is an error.
    fn record(&mut self, challenge_id: &str, points: u32) -> Result<(), LedgerError>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LedgerError {
    #[error("Challenge already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Completion rejected: {0}")]
    Rejected(String),
}

impl From<PassportError> for LedgerError {
    fn from(err: PassportError) -> Self {
        match err {
            PassportError::AlreadyCompleted(id) => LedgerError::AlreadyCompleted(id),
            other => LedgerError::Rejected(other.to_string()),
        }
    }
}

impl CompletionLedger for Passport {
    fn record(&mut self, challenge_id: &str, points: u32) -> Result<(), LedgerError> {
        self.record_completion(challenge_id, points)
            .map_err(LedgerError::from)
    }
}
