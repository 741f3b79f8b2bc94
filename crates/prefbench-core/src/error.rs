use thiserror::Error;

/// Top-level error type for reward model benchmarking.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No benchmark instances to evaluate")]
    EmptyInput,

    #[error("Inconsistent lengths in {context}: expected {expected}, got {actual}")]
    Inconsistency {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Judge error: {0}")]
    Judge(#[from] JudgeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by a [`RewardJudge`](crate::judge::RewardJudge) implementation.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("Model call failed: {0}")]
    Model(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = BenchError::InvalidArgument("batch_size must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: batch_size must be positive"
        );
    }

    #[test]
    fn empty_input_display() {
        assert_eq!(
            BenchError::EmptyInput.to_string(),
            "No benchmark instances to evaluate"
        );
    }

    #[test]
    fn inconsistency_display() {
        let err = BenchError::Inconsistency {
            context: "enrichment",
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Inconsistent lengths in enrichment: expected 4, got 3"
        );
    }

    #[test]
    fn bench_error_from_judge_error() {
        let judge_err = JudgeError::Model("connection reset".into());
        let err: BenchError = judge_err.into();
        assert!(matches!(err, BenchError::Judge(JudgeError::Model(_))));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn bench_error_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BenchError = serde_err.into();
        assert!(matches!(err, BenchError::Serialization(_)));
    }
}
