//! # TenSliceRS - Axis-wise tensor splitting and concatenation
//!
//! TenSliceRS splits an N-dimensional array along one axis into several
//! sub-arrays and concatenates several arrays along one axis into one,
//! over dtype-erased contiguous buffers. The copy machinery treats every
//! array as a (before, axis, after) decomposition, so moving data along an
//! arbitrary axis reduces to fixed-stride contiguous-run copies that work
//! for any element type.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenslice::prelude::*;
//!
//! # fn main() -> tenslice::Result<()> {
//! let ctx = CpuContext::new();
//! let input = Tensor::from_vec((0..12).collect::<Vec<i32>>(), &[3, 4])?;
//!
//! // Split the last axis into two halves and put them back together.
//! let parts = split(&ctx, &input, -1, false, 2, &SplitSpec::Equal)?;
//! let refs: Vec<&Tensor> = parts.iter().collect();
//! let (rejoined, sizes) = concat(&ctx, &refs, -1, false)?;
//!
//! assert_eq!(rejoined, input);
//! assert_eq!(sizes.to_vec::<i32>()?, vec![2, 2]);
//! # Ok(())
//! # }
//! ```

pub use tenslice_core::{
    concat, copy_strided_bytes, copy_strided_elements, dtype_of, resolve_axis, resolve_axis_arg,
    split, split_by_lengths, CopyContext, CpuContext, DType, DataLayout, Result, Shape,
    SplitSpec, Tensor, TensorError, TensorStorage,
};

/// Commonly used types and entry points.
pub mod prelude {
    pub use tenslice_core::{
        concat, split, split_by_lengths, CopyContext, CpuContext, DType, DataLayout, Result,
        Shape, SplitSpec, Tensor, TensorError,
    };
}
