use crate::DType;
use thiserror::Error;

/// Error taxonomy for axis-wise tensor operations.
///
/// Every variant names the operation that failed and the offending values,
/// so the caller can surface the full context (operation, axis, shapes)
/// without re-deriving it. All of these are raised during the validation
/// phase, before any output is allocated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("Axis {axis} is out of range for rank {rank} in operation '{operation}'")]
    AxisOutOfRange {
        operation: String,
        axis: i32,
        rank: usize,
    },

    #[error(
        "Axis extent {axis_extent} is not evenly divisible by {num_outputs} outputs \
         in operation '{operation}'"
    )]
    IndivisibleAxis {
        operation: String,
        axis_extent: usize,
        num_outputs: usize,
    },

    #[error("Operation '{operation}' expected {expected} split sizes, got {got}")]
    SplitCountMismatch {
        operation: String,
        expected: usize,
        got: usize,
    },

    #[error(
        "Split sizes sum to {got} but the axis extent is {expected} \
         in operation '{operation}'"
    )]
    SplitSumMismatch {
        operation: String,
        expected: usize,
        got: usize,
    },

    #[error(
        "Length count {num_lengths} is not evenly divisible by {num_outputs} outputs \
         in operation '{operation}'"
    )]
    LengthCountMismatch {
        operation: String,
        num_lengths: usize,
        num_outputs: usize,
    },

    #[error(
        "Shape mismatch in operation '{operation}': expected size {expected}, \
         got {got} at axis {axis} for input {input}"
    )]
    ShapeMismatch {
        operation: String,
        input: usize,
        axis: usize,
        expected: usize,
        got: usize,
    },

    #[error(
        "Rank mismatch in operation '{operation}': input {input} has rank {got}, \
         expected {expected}"
    )]
    RankMismatch {
        operation: String,
        input: usize,
        expected: usize,
        got: usize,
    },

    #[error(
        "All inputs to operation '{operation}' must have the same element type: \
         expected {expected}, got {got} for input {input}"
    )]
    DTypeMismatch {
        operation: String,
        input: usize,
        expected: DType,
        got: DType,
    },

    #[error("Conflicting axis configuration in operation '{operation}': {reason}")]
    ConfigConflict { operation: String, reason: String },

    #[error("Invalid argument in operation '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },
}

/// Result type for tensor operations
pub type Result<T> = std::result::Result<T, TensorError>;

impl TensorError {
    pub fn axis_out_of_range(operation: impl Into<String>, axis: i32, rank: usize) -> Self {
        TensorError::AxisOutOfRange {
            operation: operation.into(),
            axis,
            rank,
        }
    }

    pub fn indivisible_axis(
        operation: impl Into<String>,
        axis_extent: usize,
        num_outputs: usize,
    ) -> Self {
        TensorError::IndivisibleAxis {
            operation: operation.into(),
            axis_extent,
            num_outputs,
        }
    }

    pub fn split_count_mismatch(
        operation: impl Into<String>,
        expected: usize,
        got: usize,
    ) -> Self {
        TensorError::SplitCountMismatch {
            operation: operation.into(),
            expected,
            got,
        }
    }

    pub fn split_sum_mismatch(operation: impl Into<String>, expected: usize, got: usize) -> Self {
        TensorError::SplitSumMismatch {
            operation: operation.into(),
            expected,
            got,
        }
    }

    pub fn length_count_mismatch(
        operation: impl Into<String>,
        num_lengths: usize,
        num_outputs: usize,
    ) -> Self {
        TensorError::LengthCountMismatch {
            operation: operation.into(),
            num_lengths,
            num_outputs,
        }
    }

    pub fn shape_mismatch(
        operation: impl Into<String>,
        input: usize,
        axis: usize,
        expected: usize,
        got: usize,
    ) -> Self {
        TensorError::ShapeMismatch {
            operation: operation.into(),
            input,
            axis,
            expected,
            got,
        }
    }

    pub fn rank_mismatch(
        operation: impl Into<String>,
        input: usize,
        expected: usize,
        got: usize,
    ) -> Self {
        TensorError::RankMismatch {
            operation: operation.into(),
            input,
            expected,
            got,
        }
    }

    pub fn dtype_mismatch(
        operation: impl Into<String>,
        input: usize,
        expected: DType,
        got: DType,
    ) -> Self {
        TensorError::DTypeMismatch {
            operation: operation.into(),
            input,
            expected,
            got,
        }
    }

    pub fn config_conflict(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        TensorError::ConfigConflict {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        TensorError::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}
