use thiserror::Error;

use crate::errors::SequenceError;
use crate::pipeline::TranslationResult;
use crate::sequence::DnaSequence;

/// Rejection of a raw translation request, before the pipeline runs.
///
/// The two categories carry distinct, stable messages so callers can
/// surface them to users verbatim.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("Invalid sequence provided")]
    MissingSequence,
    #[error("Sequence can only contain A, T, C, or G")]
    InvalidSequence(#[source] SequenceError),
}

/// Validate a raw request payload and run the pipeline on it.
///
/// `None` and the empty string are rejected as missing input; any
/// character outside `[ATCGatcg]` is rejected before transformation
/// begins. Lowercase input is folded to uppercase by parsing.
pub fn translate_request(raw: Option<&str>) -> Result<TranslationResult, RequestError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Err(RequestError::MissingSequence),
    };

    let template: DnaSequence = raw.parse().map_err(RequestError::InvalidSequence)?;
    Ok(template.translate_full())
}
