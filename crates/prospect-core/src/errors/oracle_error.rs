/// Failures of the external evaluation oracle.
///
/// None of these escape an iteration: the discovery loop degrades them to
/// `NO_PROGRESS`. They exist so oracle implementations can report why.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("malformed oracle response: {reason}")]
    MalformedResponse { reason: String },

    #[error("oracle timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
