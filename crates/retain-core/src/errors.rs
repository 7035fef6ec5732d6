/// Unified result type for the review engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Review engine errors.
///
/// The engine has a single failure mode: an argument outside its documented
/// domain. Violations surface synchronously to the immediate caller; there
/// is no retry and no partial result.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl EngineError {
    /// Build an `InvalidArgument` from any displayable reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
