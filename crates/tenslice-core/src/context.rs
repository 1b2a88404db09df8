//! Copy capability for compute backends.
//!
//! The block copier is generic over where bytes physically live. A backend
//! implements [`CopyContext`] once (host memory here; an accelerator
//! runtime would wrap its own memcpy), and the copier routes every
//! contiguous run through it.

use crate::{Result, TensorError};

/// Backend capability for moving one contiguous run of data.
pub trait CopyContext: Send + Sync {
    /// Copy `src.len()` bytes of trivially copyable elements into `dst`.
    fn copy_bytes(&self, src: &[u8], dst: &mut [u8]) -> Result<()>;

    /// Clone `src.len()` owning string elements into `dst`.
    fn copy_strings(&self, src: &[String], dst: &mut [String]) -> Result<()>;
}

/// Host memory context.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuContext;

impl CpuContext {
    pub fn new() -> Self {
        Self
    }
}

impl CopyContext for CpuContext {
    fn copy_bytes(&self, src: &[u8], dst: &mut [u8]) -> Result<()> {
        if src.len() != dst.len() {
            return Err(TensorError::invalid_argument(
                "copy_bytes",
                format!("source run is {} bytes, destination {}", src.len(), dst.len()),
            ));
        }
        dst.copy_from_slice(src);
        Ok(())
    }

    fn copy_strings(&self, src: &[String], dst: &mut [String]) -> Result<()> {
        if src.len() != dst.len() {
            return Err(TensorError::invalid_argument(
                "copy_strings",
                format!(
                    "source run is {} elements, destination {}",
                    src.len(),
                    dst.len()
                ),
            ));
        }
        dst.clone_from_slice(src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_bytes() {
        let ctx = CpuContext::new();
        let src = [1u8, 2, 3, 4];
        let mut dst = [0u8; 4];
        ctx.copy_bytes(&src, &mut dst).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_bytes_length_mismatch() {
        let ctx = CpuContext::new();
        let mut dst = [0u8; 2];
        assert!(ctx.copy_bytes(&[1, 2, 3], &mut dst).is_err());
    }

    #[test]
    fn test_copy_strings_clones() {
        let ctx = CpuContext::new();
        let src = vec!["x".to_string(), "yy".to_string()];
        let mut dst = vec![String::new(); 2];
        ctx.copy_strings(&src, &mut dst).unwrap();
        assert_eq!(dst, src);
        // The copies own their storage independently of the source.
        drop(src);
        assert_eq!(dst[1], "yy");
    }
}
