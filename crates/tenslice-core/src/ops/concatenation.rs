//! Split and concatenation along an axis.
//!
//! All three entry points follow the same two-phase plan: resolve the
//! canonical axis and validate every invariant first, then allocate the
//! outputs and drive the strided block copier once per array with an
//! accumulating offset along the axis. They differ only in how the
//! per-array extents are derived and in copy direction (scatter from one
//! input to many outputs vs. gather from many inputs into one output).

use crate::copy::{copy_strided_bytes, copy_strided_elements};
use crate::ops::shape_inference::{
    infer_concat, infer_equal_split, infer_length_groups, validate_split_sizes,
};
use crate::tensor::TensorStorage;
use crate::{resolve_axis, CopyContext, DType, Result, Shape, Tensor, TensorError};

/// Policy by which per-output axis extents are determined.
///
/// Exactly one policy is active per call; the tagged form makes the
/// "inline sizes and an external sizes tensor both supplied"
/// misconfiguration unrepresentable.
#[derive(Debug, Clone)]
pub enum SplitSpec {
    /// Divide the axis extent evenly across the outputs.
    Equal,
    /// Explicit per-output extents, used verbatim after validation.
    Sizes(Vec<usize>),
    /// Extents supplied as a sibling rank-1 int32 tensor, e.g. the
    /// recorded sizes returned by [`concat`].
    External(Tensor),
}

/// Split `input` into `num_outputs` tensors along `axis`.
///
/// With `add_axis` set, each output consumes exactly one slice and the
/// split axis is removed from the output shapes (the inverse of a
/// [`concat`] in insertion mode).
pub fn split<C: CopyContext + ?Sized>(
    ctx: &C,
    input: &Tensor,
    axis: i32,
    add_axis: bool,
    num_outputs: usize,
    spec: &SplitSpec,
) -> Result<Vec<Tensor>> {
    const OP: &str = "split";

    let canonical = resolve_axis(OP, axis, input.rank(), false)?;
    let axis_extent = input.shape()[canonical];

    let sizes = match spec {
        SplitSpec::Equal => infer_equal_split(OP, axis_extent, num_outputs)?,
        SplitSpec::Sizes(sizes) => sizes.clone(),
        SplitSpec::External(tensor) => read_split_sizes(OP, tensor)?,
    };
    validate_split_sizes(OP, &sizes, num_outputs, axis_extent, add_axis)?;

    tracing::debug!(axis = canonical, add_axis, sizes = ?sizes, "planned split");

    scatter(ctx, input, canonical, &sizes, add_axis)
}

/// Split `input` along `axis` by a flat list of lengths.
///
/// The rank-1 int32 `lengths` tensor is partitioned into `num_outputs`
/// equal-size contiguous groups; each output's extent is its group's sum.
pub fn split_by_lengths<C: CopyContext + ?Sized>(
    ctx: &C,
    input: &Tensor,
    axis: i32,
    lengths: &Tensor,
    num_outputs: usize,
) -> Result<Vec<Tensor>> {
    const OP: &str = "split_by_lengths";

    let canonical = resolve_axis(OP, axis, input.rank(), false)?;
    let lengths = read_split_sizes(OP, lengths)?;
    let sizes = infer_length_groups(OP, &lengths, num_outputs, input.shape()[canonical])?;

    tracing::debug!(axis = canonical, sizes = ?sizes, "planned split_by_lengths");

    scatter(ctx, input, canonical, &sizes, false)
}

/// Concatenate `inputs` along `axis`.
///
/// Returns the concatenated tensor together with a rank-1 int32 tensor of
/// per-input axis contributions, in input order — feeding that record back
/// through [`SplitSpec::External`] reverses the concatenation exactly.
/// With `add_axis` set a brand-new axis sized by the input count is
/// inserted at the canonical position.
pub fn concat<C: CopyContext + ?Sized>(
    ctx: &C,
    inputs: &[&Tensor],
    axis: i32,
    add_axis: bool,
) -> Result<(Tensor, Tensor)> {
    const OP: &str = "concat";

    let first = *inputs
        .first()
        .ok_or_else(|| TensorError::invalid_argument(OP, "requires at least one input"))?;
    let canonical = resolve_axis(OP, axis, first.rank(), add_axis)?;

    for (i, input) in inputs.iter().enumerate().skip(1) {
        if input.dtype() != first.dtype() {
            return Err(TensorError::dtype_mismatch(
                OP,
                i,
                first.dtype(),
                input.dtype(),
            ));
        }
    }

    let shapes: Vec<&Shape> = inputs.iter().map(|t| t.shape()).collect();
    let (output_shape, contributions) = infer_concat(OP, &shapes, canonical, add_axis)?;

    let before = output_shape.outer_size(canonical);
    let after = output_shape.inner_size(canonical);
    let dst_stride = output_shape[canonical] * after;

    tracing::debug!(
        axis = canonical,
        add_axis,
        output_shape = %output_shape,
        contributions = ?contributions,
        "planned concat"
    );

    let mut output = Tensor::zeros(first.dtype(), output_shape.dims());
    let mut offset = 0usize;
    for (input, &contribution) in inputs.iter().zip(&contributions) {
        let run = contribution * after;
        if before > 0 && run > 0 {
            match (input.storage(), output.storage_mut()) {
                (TensorStorage::Bytes(src), TensorStorage::Bytes(dst)) => {
                    let item = first.itemsize();
                    copy_strided_bytes(
                        ctx,
                        before,
                        run * item,
                        src,
                        run * item,
                        &mut dst[offset * item..],
                        dst_stride * item,
                    )?;
                }
                (TensorStorage::Strings(src), TensorStorage::Strings(dst)) => {
                    copy_strided_elements(
                        ctx,
                        before,
                        run,
                        src,
                        run,
                        &mut dst[offset..],
                        dst_stride,
                    )?;
                }
                _ => unreachable!("output storage kind always matches the input dtype"),
            }
        }
        offset += run;
    }

    let split_sizes = Tensor::from_vec(
        contributions.iter().map(|&c| c as i32).collect::<Vec<i32>>(),
        &[inputs.len()],
    )?;

    Ok((output, split_sizes))
}

/// Copy one run per super-row from `input` into a fresh output per size.
///
/// Validation is complete by the time this runs; the loop only moves data.
fn scatter<C: CopyContext + ?Sized>(
    ctx: &C,
    input: &Tensor,
    axis: usize,
    sizes: &[usize],
    add_axis: bool,
) -> Result<Vec<Tensor>> {
    let before = input.shape().outer_size(axis);
    let after = input.shape().inner_size(axis);
    let src_stride = input.shape()[axis] * after;

    let mut output_dims = input.shape().to_vec();
    if add_axis {
        output_dims.remove(axis);
    }

    let mut outputs = Vec::with_capacity(sizes.len());
    let mut offset = 0usize;
    for &size in sizes {
        let axis_dim = if add_axis { 1 } else { size };
        if !add_axis {
            output_dims[axis] = size;
        }
        let run = axis_dim * after;

        let mut output = Tensor::zeros(input.dtype(), &output_dims);
        if before > 0 && run > 0 {
            match (input.storage(), output.storage_mut()) {
                (TensorStorage::Bytes(src), TensorStorage::Bytes(dst)) => {
                    let item = input.itemsize();
                    copy_strided_bytes(
                        ctx,
                        before,
                        run * item,
                        &src[offset * item..],
                        src_stride * item,
                        dst,
                        run * item,
                    )?;
                }
                (TensorStorage::Strings(src), TensorStorage::Strings(dst)) => {
                    copy_strided_elements(ctx, before, run, &src[offset..], src_stride, dst, run)?;
                }
                _ => unreachable!("output storage kind always matches the input dtype"),
            }
        }

        offset += run;
        outputs.push(output);
    }

    Ok(outputs)
}

fn read_split_sizes(operation: &str, sizes: &Tensor) -> Result<Vec<usize>> {
    if sizes.dtype() != DType::Int32 {
        return Err(TensorError::invalid_argument(
            operation,
            format!("split sizes tensor must be int32, got {}", sizes.dtype()),
        ));
    }
    if sizes.rank() != 1 {
        return Err(TensorError::invalid_argument(
            operation,
            format!("split sizes tensor must be rank 1, got rank {}", sizes.rank()),
        ));
    }

    sizes
        .to_vec::<i32>()?
        .into_iter()
        .map(|size| {
            usize::try_from(size).map_err(|_| {
                TensorError::invalid_argument(
                    operation,
                    format!("split sizes must be non-negative, got {size}"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuContext;

    fn arange(n: usize, dims: &[usize]) -> Tensor {
        Tensor::from_vec((0..n as i32).collect::<Vec<i32>>(), dims).unwrap()
    }

    #[test]
    fn test_equal_split_axis0() {
        let ctx = CpuContext::new();
        let input = arange(6, &[2, 3]);
        let outputs = split(&ctx, &input, 0, false, 2, &SplitSpec::Equal).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].shape().dims(), &[1, 3]);
        assert_eq!(outputs[0].to_vec::<i32>().unwrap(), vec![0, 1, 2]);
        assert_eq!(outputs[1].to_vec::<i32>().unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn test_explicit_split_inner_axis() {
        let ctx = CpuContext::new();
        let input = arange(12, &[2, 3, 2]);
        let outputs = split(&ctx, &input, 1, false, 2, &SplitSpec::Sizes(vec![1, 2])).unwrap();
        assert_eq!(outputs[0].shape().dims(), &[2, 1, 2]);
        assert_eq!(outputs[1].shape().dims(), &[2, 2, 2]);
        assert_eq!(outputs[0].to_vec::<i32>().unwrap(), vec![0, 1, 6, 7]);
        assert_eq!(
            outputs[1].to_vec::<i32>().unwrap(),
            vec![2, 3, 4, 5, 8, 9, 10, 11]
        );
    }

    #[test]
    fn test_external_split_sizes() {
        let ctx = CpuContext::new();
        let input = arange(8, &[4, 2]);
        let sizes = Tensor::from_vec(vec![3i32, 1], &[2]).unwrap();
        let outputs = split(&ctx, &input, 0, false, 2, &SplitSpec::External(sizes)).unwrap();
        assert_eq!(outputs[0].shape().dims(), &[3, 2]);
        assert_eq!(outputs[1].to_vec::<i32>().unwrap(), vec![6, 7]);
    }

    #[test]
    fn test_split_add_axis_removes_axis() {
        let ctx = CpuContext::new();
        let input = arange(6, &[3, 2]);
        let outputs = split(&ctx, &input, 0, true, 3, &SplitSpec::Sizes(vec![1, 1, 1])).unwrap();
        assert_eq!(outputs.len(), 3);
        for (i, output) in outputs.iter().enumerate() {
            assert_eq!(output.shape().dims(), &[2]);
            let base = 2 * i as i32;
            assert_eq!(output.to_vec::<i32>().unwrap(), vec![base, base + 1]);
        }
    }

    #[test]
    fn test_split_by_lengths_groups() {
        let ctx = CpuContext::new();
        let input = arange(10, &[10]);
        let lengths = Tensor::from_vec(vec![2i32, 3, 1, 4], &[4]).unwrap();
        let outputs = split_by_lengths(&ctx, &input, 0, &lengths, 2).unwrap();
        assert_eq!(outputs[0].shape().dims(), &[5]);
        assert_eq!(outputs[1].shape().dims(), &[5]);
        assert_eq!(outputs[0].to_vec::<i32>().unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(outputs[1].to_vec::<i32>().unwrap(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_concat_axis1_records_sizes() {
        let ctx = CpuContext::new();
        let a = arange(4, &[2, 2]);
        let b = Tensor::from_vec(vec![10i32, 11, 12, 13, 14, 15], &[2, 3]).unwrap();
        let (output, sizes) = concat(&ctx, &[&a, &b], 1, false).unwrap();
        assert_eq!(output.shape().dims(), &[2, 5]);
        assert_eq!(
            output.to_vec::<i32>().unwrap(),
            vec![0, 1, 10, 11, 12, 2, 3, 13, 14, 15]
        );
        assert_eq!(sizes.to_vec::<i32>().unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_concat_add_axis_stacks() {
        let ctx = CpuContext::new();
        let a = arange(2, &[2]);
        let b = Tensor::from_vec(vec![5i32, 6], &[2]).unwrap();
        let (output, sizes) = concat(&ctx, &[&a, &b], 0, true).unwrap();
        assert_eq!(output.shape().dims(), &[2, 2]);
        assert_eq!(output.to_vec::<i32>().unwrap(), vec![0, 1, 5, 6]);
        assert_eq!(sizes.to_vec::<i32>().unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_concat_dtype_mismatch() {
        let ctx = CpuContext::new();
        let a = arange(2, &[2]);
        let b = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
        let err = concat(&ctx, &[&a, &b], 0, false).unwrap_err();
        assert!(matches!(err, TensorError::DTypeMismatch { input: 1, .. }));
    }

    #[test]
    fn test_concat_empty_inputs() {
        let ctx = CpuContext::new();
        let err = concat(&ctx, &[], 0, false).unwrap_err();
        assert!(matches!(err, TensorError::InvalidArgument { .. }));
    }

    #[test]
    fn test_split_rejects_negative_external_size() {
        let ctx = CpuContext::new();
        let input = arange(4, &[4]);
        let sizes = Tensor::from_vec(vec![5i32, -1], &[2]).unwrap();
        let err = split(&ctx, &input, 0, false, 2, &SplitSpec::External(sizes)).unwrap_err();
        assert!(matches!(err, TensorError::InvalidArgument { .. }));
    }

    #[test]
    fn test_split_of_empty_outer_dim() {
        let ctx = CpuContext::new();
        let input = Tensor::from_vec(Vec::<f32>::new(), &[0, 4]).unwrap();
        let outputs = split(&ctx, &input, 1, false, 2, &SplitSpec::Equal).unwrap();
        assert_eq!(outputs[0].shape().dims(), &[0, 2]);
        assert_eq!(outputs[1].shape().dims(), &[0, 2]);
    }

    #[test]
    fn test_string_concat_split() {
        let ctx = CpuContext::new();
        let a = Tensor::from_strings(vec!["a".into(), "b".into()], &[1, 2]).unwrap();
        let b = Tensor::from_strings(vec!["c".into(), "d".into()], &[1, 2]).unwrap();
        let (output, _) = concat(&ctx, &[&a, &b], 0, false).unwrap();
        assert_eq!(output.as_strings().unwrap(), &["a", "b", "c", "d"]);

        let outputs = split(&ctx, &output, 0, false, 2, &SplitSpec::Equal).unwrap();
        assert_eq!(outputs[1].as_strings().unwrap(), &["c", "d"]);
    }
}
