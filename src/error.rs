use thiserror::Error;

/// Errors that can occur while clipping.
///
/// Numerical degeneracies such as parallel edges or a stalled hull are not errors. They
/// resolve to documented fallbacks instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipError {
    /// The caller's output buffer cannot hold the worst-case result.
    #[error("output buffer holds {capacity} points but clipping may produce up to {required}")]
    OutputBufferTooSmall { required: usize, capacity: usize },
}

pub type Result<T, E = ClipError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_sizes() {
        let err = ClipError::OutputBufferTooSmall {
            required: 8,
            capacity: 5,
        };
        assert_eq!(
            err.to_string(),
            "output buffer holds 5 points but clipping may produce up to 8"
        );
    }
}
