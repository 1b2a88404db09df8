//! Dtype-erased tensor handle.
//!
//! A [`Tensor`] couples a contiguous buffer with a [`Shape`] and a
//! [`DType`]. Element types are erased at the storage level: trivially
//! copyable elements live in a flat byte buffer, while owning element
//! types (strings) keep their own typed storage so copies can clone each
//! element. Typed access goes through `bytemuck`-checked entry points.

use crate::dtype::{dtype_of, DType};
use crate::{resolve_axis, Result, Shape, TensorError};
use bytemuck::Pod;

/// Storage for the two element copy policies.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorStorage {
    /// Trivially copyable elements, erased to raw bytes.
    Bytes(Vec<u8>),
    /// Owning elements copied one at a time.
    Strings(Vec<String>),
}

/// Core tensor structure holding data and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    storage: TensorStorage,
    shape: Shape,
    dtype: DType,
}

impl Tensor {
    /// Build a tensor from a typed vector of trivially copyable elements.
    pub fn from_vec<T: Pod + 'static>(data: Vec<T>, dims: &[usize]) -> Result<Self> {
        let dtype = dtype_of::<T>().ok_or_else(|| {
            TensorError::invalid_argument(
                "from_vec",
                format!("unsupported element type {}", std::any::type_name::<T>()),
            )
        })?;
        let shape = Shape::from_slice(dims);
        if data.len() != shape.size() {
            return Err(TensorError::invalid_argument(
                "from_vec",
                format!(
                    "data length {} does not match shape {} ({} elements)",
                    data.len(),
                    shape,
                    shape.size()
                ),
            ));
        }

        Ok(Self {
            storage: TensorStorage::Bytes(bytemuck::cast_slice(&data).to_vec()),
            shape,
            dtype,
        })
    }

    /// Build a string tensor. Strings are the non-trivially-copyable case:
    /// every copy of an element clones its heap allocation.
    pub fn from_strings(data: Vec<String>, dims: &[usize]) -> Result<Self> {
        let shape = Shape::from_slice(dims);
        if data.len() != shape.size() {
            return Err(TensorError::invalid_argument(
                "from_strings",
                format!(
                    "data length {} does not match shape {} ({} elements)",
                    data.len(),
                    shape,
                    shape.size()
                ),
            ));
        }

        Ok(Self {
            storage: TensorStorage::Strings(data),
            shape,
            dtype: DType::String,
        })
    }

    /// Build a tensor directly from erased bytes.
    ///
    /// This is the entry point for callers that already hold raw buffer
    /// contents (e.g. a device runtime handing over host memory).
    pub fn from_bytes(dtype: DType, data: Vec<u8>, dims: &[usize]) -> Result<Self> {
        if !dtype.is_trivially_copyable() {
            return Err(TensorError::invalid_argument(
                "from_bytes",
                format!("{dtype} elements cannot be built from raw bytes"),
            ));
        }
        let shape = Shape::from_slice(dims);
        let expected = shape.size() * dtype.size();
        if data.len() != expected {
            return Err(TensorError::invalid_argument(
                "from_bytes",
                format!(
                    "byte length {} does not match shape {} of {dtype} ({expected} bytes)",
                    data.len(),
                    shape
                ),
            ));
        }

        Ok(Self {
            storage: TensorStorage::Bytes(data),
            shape,
            dtype,
        })
    }

    /// Allocate a zero-initialized tensor of the given dtype and shape.
    pub fn zeros(dtype: DType, dims: &[usize]) -> Self {
        let shape = Shape::from_slice(dims);
        let storage = if dtype.is_trivially_copyable() {
            TensorStorage::Bytes(vec![0u8; shape.size() * dtype.size()])
        } else {
            TensorStorage::Strings(vec![String::new(); shape.size()])
        };
        Self {
            storage,
            shape,
            dtype,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.size()
    }

    /// Element size in bytes.
    pub fn itemsize(&self) -> usize {
        self.dtype.size()
    }

    pub fn storage(&self) -> &TensorStorage {
        &self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut TensorStorage {
        &mut self.storage
    }

    /// Resolve a raw signed axis against this tensor's rank.
    pub fn canonical_axis(&self, operation: &str, axis: i32, add_axis: bool) -> Result<usize> {
        resolve_axis(operation, axis, self.rank(), add_axis)
    }

    /// Raw erased bytes, for trivially copyable dtypes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.storage {
            TensorStorage::Bytes(bytes) => Some(bytes),
            TensorStorage::Strings(_) => None,
        }
    }

    /// Borrow the data as a typed slice.
    ///
    /// Returns `None` when `T` does not match the tensor's dtype, or when
    /// the erased buffer happens to be misaligned for `T` (use
    /// [`to_vec`](Self::to_vec) for an alignment-independent read).
    pub fn as_slice<T: Pod + 'static>(&self) -> Option<&[T]> {
        if dtype_of::<T>() != Some(self.dtype) {
            return None;
        }
        match &self.storage {
            TensorStorage::Bytes(bytes) => bytemuck::try_cast_slice(bytes).ok(),
            TensorStorage::Strings(_) => None,
        }
    }

    /// Copy the data out as a typed vector.
    pub fn to_vec<T: Pod + 'static>(&self) -> Result<Vec<T>> {
        if dtype_of::<T>() != Some(self.dtype) {
            return Err(TensorError::invalid_argument(
                "to_vec",
                format!(
                    "requested element type {} but tensor dtype is {}",
                    std::any::type_name::<T>(),
                    self.dtype
                ),
            ));
        }
        match &self.storage {
            TensorStorage::Bytes(bytes) => Ok(bytemuck::pod_collect_to_vec(bytes)),
            TensorStorage::Strings(_) => Err(TensorError::invalid_argument(
                "to_vec",
                "string tensors have no byte-level view",
            )),
        }
    }

    /// Borrow the data as strings, for string tensors.
    pub fn as_strings(&self) -> Option<&[String]> {
        match &self.storage {
            TensorStorage::Strings(data) => Some(data),
            TensorStorage::Bytes(_) => None,
        }
    }
}
