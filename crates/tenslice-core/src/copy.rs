//! Strided block copier.
//!
//! Both split and concat reduce to the same data movement: a buffer viewed
//! as `before` super-rows with a fixed row stride, from which (or into
//! which) one contiguous run per super-row is copied at an independent
//! stride on the other side. The copier performs no shape validation —
//! run lengths and strides are established by the planners before any
//! bytes move, so this phase cannot fail on geometry.

use crate::{CopyContext, Result};

/// Super-row count above which the copy loop fans out across threads.
#[cfg(feature = "parallel")]
const PARALLEL_ROW_THRESHOLD: usize = 64;

/// Copy `before` contiguous runs of `run_len` bytes between two strided
/// buffers. Row `i` is read at `src[i * src_stride..]` and written at
/// `dst[i * dst_stride..]`.
pub fn copy_strided_bytes<C: CopyContext + ?Sized>(
    ctx: &C,
    before: usize,
    run_len: usize,
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
) -> Result<()> {
    if before == 0 || run_len == 0 {
        return Ok(());
    }

    #[cfg(feature = "parallel")]
    if before >= PARALLEL_ROW_THRESHOLD && src_stride > 0 && dst_stride > 0 {
        use rayon::prelude::*;

        return dst
            .par_chunks_mut(dst_stride)
            .zip(src.par_chunks(src_stride))
            .take(before)
            .map(|(dst_row, src_row)| ctx.copy_bytes(&src_row[..run_len], &mut dst_row[..run_len]))
            .collect();
    }

    for i in 0..before {
        let src_off = i * src_stride;
        let dst_off = i * dst_stride;
        ctx.copy_bytes(
            &src[src_off..src_off + run_len],
            &mut dst[dst_off..dst_off + run_len],
        )?;
    }
    Ok(())
}

/// Element-wise variant for owning element types. Geometry is in element
/// units; every element in a run is cloned through the context.
pub fn copy_strided_elements<C: CopyContext + ?Sized>(
    ctx: &C,
    before: usize,
    run_len: usize,
    src: &[String],
    src_stride: usize,
    dst: &mut [String],
    dst_stride: usize,
) -> Result<()> {
    if before == 0 || run_len == 0 {
        return Ok(());
    }

    #[cfg(feature = "parallel")]
    if before >= PARALLEL_ROW_THRESHOLD && src_stride > 0 && dst_stride > 0 {
        use rayon::prelude::*;

        return dst
            .par_chunks_mut(dst_stride)
            .zip(src.par_chunks(src_stride))
            .take(before)
            .map(|(dst_row, src_row)| {
                ctx.copy_strings(&src_row[..run_len], &mut dst_row[..run_len])
            })
            .collect();
    }

    for i in 0..before {
        let src_off = i * src_stride;
        let dst_off = i * dst_stride;
        ctx.copy_strings(
            &src[src_off..src_off + run_len],
            &mut dst[dst_off..dst_off + run_len],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuContext;

    #[test]
    fn test_gather_runs() {
        // Two source rows of 4 bytes; take the middle 2 of each, packed.
        let ctx = CpuContext::new();
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut dst = [0u8; 4];
        copy_strided_bytes(&ctx, 2, 2, &src[1..], 4, &mut dst, 2).unwrap();
        assert_eq!(dst, [2, 3, 6, 7]);
    }

    #[test]
    fn test_scatter_runs() {
        // Pack 2-byte runs into rows of 4, leaving the rest untouched.
        let ctx = CpuContext::new();
        let src = [9u8, 8, 7, 6];
        let mut dst = [0u8; 8];
        copy_strided_bytes(&ctx, 2, 2, &src, 2, &mut dst[2..], 4).unwrap();
        assert_eq!(dst, [0, 0, 9, 8, 0, 0, 7, 6]);
    }

    #[test]
    fn test_zero_run_is_noop() {
        let ctx = CpuContext::new();
        let src = [1u8, 2];
        let mut dst = [7u8, 7];
        copy_strided_bytes(&ctx, 5, 0, &src, 0, &mut dst, 0).unwrap();
        assert_eq!(dst, [7, 7]);
    }

    #[test]
    fn test_many_rows() {
        // Enough rows to cross the parallel threshold.
        let ctx = CpuContext::new();
        let before = 200;
        let src: Vec<u8> = (0..before * 3).map(|v| (v % 251) as u8).collect();
        let mut dst = vec![0u8; before * 2];
        copy_strided_bytes(&ctx, before, 2, &src, 3, &mut dst, 2).unwrap();
        for i in 0..before {
            assert_eq!(dst[i * 2], src[i * 3]);
            assert_eq!(dst[i * 2 + 1], src[i * 3 + 1]);
        }
    }

    #[test]
    fn test_string_runs() {
        let ctx = CpuContext::new();
        let src: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let mut dst = vec![String::new(); 2];
        copy_strided_elements(&ctx, 2, 1, &src, 2, &mut dst, 1).unwrap();
        assert_eq!(dst, &["a", "c"]);
    }
}
