use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced when decoding textual pattern encodings.
///
/// Pattern strings themselves never fail to parse; only the duration
/// grammar is strict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not match `([+-]*)([1-9][0-9]*([+-][1-9][0-9]*)*)`
    #[error("malformed durations: {input:?}")]
    MalformedDurations { input: String },
}
