use tandem_core::error::CoreError;
use tandem_core::generation::MalformedResponse;
use tandem_db::StoreError;
use tandem_llm::LlmError;

/// Failure of a catalog or generation operation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The language model could not be reached or refused the request.
    #[error("Content generation unavailable: {0}")]
    Unavailable(#[source] LlmError),

    /// The language model answered with something that is not usable JSON.
    #[error("Malformed {kind} reply from the language model: {message}")]
    Malformed { kind: &'static str, message: String },
}

impl From<MalformedResponse> for EngineError {
    fn from(e: MalformedResponse) -> Self {
        Self::Malformed {
            kind: e.kind,
            message: e.message,
        }
    }
}

impl From<LlmError> for EngineError {
    fn from(e: LlmError) -> Self {
        Self::Unavailable(e)
    }
}
