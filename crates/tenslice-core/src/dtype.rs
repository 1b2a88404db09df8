#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Element type descriptor for dtype-erased tensors.
///
/// Carries everything the copy machinery needs to know about an element:
/// its size in bytes and whether it can be moved with a flat byte copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum DType {
    Float16,  // Half precision IEEE 754-2008
    BFloat16, // Brain floating point
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Bool,
    String, // Variable-length string (owns its heap allocation)
}

impl DType {
    /// Element size in bytes.
    pub fn size(&self) -> usize {
        match self {
            DType::Float16 => 2,
            DType::BFloat16 => 2,
            DType::Float32 => 4,
            DType::Float64 => 8,
            DType::Int8 => 1,
            DType::Int16 => 2,
            DType::Int32 => 4,
            DType::Int64 => 8,
            DType::UInt8 => 1,
            DType::UInt16 => 2,
            DType::UInt32 => 4,
            DType::UInt64 => 8,
            DType::Bool => 1,
            DType::String => std::mem::size_of::<std::string::String>(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DType::Float16 => "float16",
            DType::BFloat16 => "bfloat16",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Bool => "bool",
            DType::String => "string",
        }
    }

    /// Whether values of this type can be moved with a raw byte copy.
    ///
    /// Non-trivially-copyable elements (strings) must be cloned one at a
    /// time so each copy owns its own allocation.
    pub fn is_trivially_copyable(&self) -> bool {
        !matches!(self, DType::String)
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Map a Rust element type to its `DType`, or `None` for unsupported types.
pub fn dtype_of<T: 'static>() -> Option<DType> {
    use half::{bf16, f16};
    use std::any::TypeId;

    let id = TypeId::of::<T>();
    if id == TypeId::of::<f16>() {
        Some(DType::Float16)
    } else if id == TypeId::of::<bf16>() {
        Some(DType::BFloat16)
    } else if id == TypeId::of::<f32>() {
        Some(DType::Float32)
    } else if id == TypeId::of::<f64>() {
        Some(DType::Float64)
    } else if id == TypeId::of::<i8>() {
        Some(DType::Int8)
    } else if id == TypeId::of::<i16>() {
        Some(DType::Int16)
    } else if id == TypeId::of::<i32>() {
        Some(DType::Int32)
    } else if id == TypeId::of::<i64>() {
        Some(DType::Int64)
    } else if id == TypeId::of::<u8>() {
        Some(DType::UInt8)
    } else if id == TypeId::of::<u16>() {
        Some(DType::UInt16)
    } else if id == TypeId::of::<u32>() {
        Some(DType::UInt32)
    } else if id == TypeId::of::<u64>() {
        Some(DType::UInt64)
    } else if id == TypeId::of::<bool>() {
        Some(DType::Bool)
    } else if id == TypeId::of::<String>() {
        Some(DType::String)
    } else {
        None
    }
}
