//! # tenslice-core
//!
//! Axis-wise split and concatenation for dtype-erased N-dimensional
//! tensors. A tensor here is an opaque contiguous buffer plus a shape and
//! an element-type descriptor; splitting and concatenating along an
//! arbitrary axis reduces to a (before, axis, after) decomposition driven
//! through a strided block copier that moves whole contiguous runs at a
//! time, independent of the element type.
//!
//! ## Quick start
//!
//! ```
//! use tenslice_core::{concat, split, CpuContext, SplitSpec, Tensor};
//!
//! # fn main() -> tenslice_core::Result<()> {
//! let ctx = CpuContext::new();
//! let a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2])?;
//! let b = Tensor::from_vec(vec![5.0f32, 6.0], &[2, 1])?;
//!
//! // Gather along axis 1; the recorded sizes reverse it exactly.
//! let (joined, sizes) = concat(&ctx, &[&a, &b], 1, false)?;
//! assert_eq!(joined.shape().dims(), &[2, 3]);
//!
//! let parts = split(&ctx, &joined, 1, false, 2, &SplitSpec::External(sizes))?;
//! assert_eq!(parts[0].to_vec::<f32>()?, vec![1.0, 2.0, 3.0, 4.0]);
//! # Ok(())
//! # }
//! ```

pub mod axis;
pub mod context;
pub mod copy;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod shape;
pub mod tensor;

pub use axis::{resolve_axis, resolve_axis_arg, DataLayout};
pub use context::{CopyContext, CpuContext};
pub use copy::{copy_strided_bytes, copy_strided_elements};
pub use dtype::{dtype_of, DType};
pub use error::{Result, TensorError};
pub use ops::{concat, split, split_by_lengths, SplitSpec};
pub use shape::Shape;
pub use tensor::{Tensor, TensorStorage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tensor_creation() {
        let tensor = Tensor::zeros(DType::Float32, &[2, 3]);
        assert_eq!(tensor.shape(), &Shape::from_slice(&[2, 3]));
    }
}
