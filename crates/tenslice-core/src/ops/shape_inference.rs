//! Shape planning for split and concat.
//!
//! Planners are pure functions over shapes and extents: they compute the
//! per-output (or per-input) axis extents and check every invariant up
//! front, so the copy phase that follows them cannot fail. No allocation
//! of output storage happens here.

use crate::{Result, Shape, TensorError};

/// Divide an axis extent evenly across `num_outputs` outputs.
pub fn infer_equal_split(
    operation: &str,
    axis_extent: usize,
    num_outputs: usize,
) -> Result<Vec<usize>> {
    if num_outputs == 0 {
        return Err(TensorError::invalid_argument(
            operation,
            "output count must be positive",
        ));
    }
    if axis_extent % num_outputs != 0 {
        return Err(TensorError::indivisible_axis(
            operation,
            axis_extent,
            num_outputs,
        ));
    }
    Ok(vec![axis_extent / num_outputs; num_outputs])
}

/// Validate caller-supplied split sizes against the output count and the
/// input's axis extent.
///
/// In insertion mode each output consumes exactly one slice of the axis,
/// so the check becomes `num_outputs == axis_extent` and the individual
/// sizes are not summed.
pub fn validate_split_sizes(
    operation: &str,
    sizes: &[usize],
    num_outputs: usize,
    axis_extent: usize,
    add_axis: bool,
) -> Result<()> {
    if sizes.len() != num_outputs {
        return Err(TensorError::split_count_mismatch(
            operation,
            num_outputs,
            sizes.len(),
        ));
    }

    let consumed = if add_axis {
        num_outputs
    } else {
        sizes.iter().sum()
    };
    if consumed != axis_extent {
        return Err(TensorError::split_sum_mismatch(
            operation,
            axis_extent,
            consumed,
        ));
    }
    Ok(())
}

/// Partition a flat length list into `num_outputs` equal-size contiguous
/// groups and sum each group into one output extent.
///
/// Group sums may differ from one another; only their total must match the
/// axis extent. This is what lets ragged, length-encoded partitions (e.g.
/// variable-length sequences packed along one axis) split cleanly.
pub fn infer_length_groups(
    operation: &str,
    lengths: &[usize],
    num_outputs: usize,
    axis_extent: usize,
) -> Result<Vec<usize>> {
    if num_outputs == 0 {
        return Err(TensorError::invalid_argument(
            operation,
            "output count must be positive",
        ));
    }
    if lengths.len() % num_outputs != 0 {
        return Err(TensorError::length_count_mismatch(
            operation,
            lengths.len(),
            num_outputs,
        ));
    }

    let total: usize = lengths.iter().sum();
    if total != axis_extent {
        return Err(TensorError::split_sum_mismatch(operation, axis_extent, total));
    }

    // An empty length list groups into empty (zero-extent) outputs.
    if lengths.is_empty() {
        return Ok(vec![0; num_outputs]);
    }

    let group_size = lengths.len() / num_outputs;
    Ok(lengths
        .chunks(group_size)
        .map(|group| group.iter().sum())
        .collect())
}

/// Infer the output shape of a concatenation and the per-input axis
/// contributions, validating cross-input compatibility.
///
/// `axis` must already be canonical (resolved against the insertion-
/// adjusted rank when `add_axis` is set). Every input must match the
/// first on every non-concat axis — on every axis under insertion mode,
/// where each input contributes exactly one slice of a brand-new axis.
pub fn infer_concat(
    operation: &str,
    shapes: &[&Shape],
    axis: usize,
    add_axis: bool,
) -> Result<(Shape, Vec<usize>)> {
    if shapes.is_empty() {
        return Err(TensorError::invalid_argument(
            operation,
            "requires at least one input",
        ));
    }

    let first = shapes[0];
    let rank = first.rank();
    for (i, shape) in shapes.iter().enumerate().skip(1) {
        if shape.rank() != rank {
            return Err(TensorError::rank_mismatch(operation, i, rank, shape.rank()));
        }
    }

    for dim in 0..rank {
        if dim == axis && !add_axis {
            continue;
        }
        for (i, shape) in shapes.iter().enumerate().skip(1) {
            if shape[dim] != first[dim] {
                return Err(TensorError::shape_mismatch(
                    operation,
                    i,
                    dim,
                    first[dim],
                    shape[dim],
                ));
            }
        }
    }

    let contributions: Vec<usize> = if add_axis {
        vec![1; shapes.len()]
    } else {
        shapes.iter().map(|shape| shape[axis]).collect()
    };
    let output_extent = contributions.iter().sum();

    let mut output_dims = first.to_vec();
    if add_axis {
        output_dims.insert(axis, output_extent);
    } else {
        output_dims[axis] = output_extent;
    }

    Ok((Shape::new(output_dims), contributions))
}
