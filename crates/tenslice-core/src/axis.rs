//! Axis canonicalization.
//!
//! Raw axis requests arrive either as a signed index (negative counts from
//! the end) or as a named storage-order token that pins the channel axis.
//! Everything downstream works with a canonical non-negative axis bounded
//! by the (optionally insertion-adjusted) rank.

use crate::{Result, TensorError};

/// Named storage orders for image-like tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLayout {
    /// Channels first: [N, C, H, W]
    NCHW,
    /// Channels last: [N, H, W, C]
    NHWC,
}

impl DataLayout {
    /// Raw channel axis implied by this layout.
    pub fn channel_axis(&self) -> i32 {
        match self {
            DataLayout::NCHW => 1,
            DataLayout::NHWC => 3,
        }
    }
}

/// Resolve a possibly-negative raw axis into a canonical index.
///
/// With `add_axis` set the effective rank is `rank + 1`, so a new axis may
/// be addressed one past the last existing dimension (including via
/// negative indices: `-1` on a rank-3 tensor resolves to `3`).
pub fn resolve_axis(operation: &str, axis: i32, rank: usize, add_axis: bool) -> Result<usize> {
    let effective_rank = rank + usize::from(add_axis);
    let canonical = if axis < 0 {
        effective_rank as i32 + axis
    } else {
        axis
    };

    if canonical < 0 || canonical >= effective_rank as i32 {
        return Err(TensorError::axis_out_of_range(
            operation,
            axis,
            effective_rank,
        ));
    }

    Ok(canonical as usize)
}

/// Collapse an (axis index, storage order) argument pair into one raw axis.
///
/// Supplying both is a configuration conflict. Supplying neither falls back
/// to the channel axis of [`DataLayout::NCHW`].
pub fn resolve_axis_arg(
    operation: &str,
    axis: Option<i32>,
    order: Option<DataLayout>,
) -> Result<i32> {
    match (axis, order) {
        (Some(_), Some(_)) => Err(TensorError::config_conflict(
            operation,
            "specify either an axis index or a storage order, not both",
        )),
        (Some(axis), None) => Ok(axis),
        (None, Some(order)) => Ok(order.channel_axis()),
        (None, None) => Ok(DataLayout::NCHW.channel_axis()),
    }
}
