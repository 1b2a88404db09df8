//! Tensor operations.
//!
//! - **shape_inference**: pure planners that validate invariants and
//!   compute per-array axis extents before anything is allocated
//! - **concatenation**: the split / split_by_lengths / concat entry points
//!   driving the strided block copier

pub mod concatenation;
pub mod shape_inference;

pub use concatenation::{concat, split, split_by_lengths, SplitSpec};
pub use shape_inference::{
    infer_concat, infer_equal_split, infer_length_groups, validate_split_sizes,
};
