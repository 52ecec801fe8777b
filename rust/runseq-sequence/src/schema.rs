//! Element types of the flat sequences.

/// The physical type of the elements stored in a sequence.
///
/// Fixed-size types store their elements directly in the values buffer.
/// `String` is variable-sized and requires an offsets array. `Guid` is
/// representable in a sequence but is not subject to run-length encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Logical values, stored as one byte per element (0 or 1).
    Boolean,
    /// 32-bit signed integers.
    Int32,
    /// 64-bit IEEE floating-point numbers.
    Float64,
    /// Complex numbers, stored as a (re, im) pair of `f64`.
    Complex64,
    /// Variable-length UTF-8 text.
    String,
    /// Raw bytes, one per element.
    Byte,
    /// 16-byte globally unique identifiers.
    Guid,
}

impl ElementType {
    /// Returns the size in bytes of a single element, or `None` for
    /// variable-sized types.
    pub fn primitive_size(&self) -> Option<usize> {
        match self {
            ElementType::Boolean => Some(1),
            ElementType::Int32 => Some(4),
            ElementType::Float64 => Some(8),
            ElementType::Complex64 => Some(16),
            ElementType::String => None,
            ElementType::Byte => Some(1),
            ElementType::Guid => Some(16),
        }
    }

    /// Returns `true` if the value sequence for this type requires offset
    /// encoding.
    pub fn requires_offsets(&self) -> bool {
        matches!(self, ElementType::String)
    }

    /// A stable lowercase name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Boolean => "boolean",
            ElementType::Int32 => "int32",
            ElementType::Float64 => "float64",
            ElementType::Complex64 => "complex64",
            ElementType::String => "string",
            ElementType::Byte => "byte",
            ElementType::Guid => "guid",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A complex number stored as two consecutive `f64` components.
///
/// Equality follows IEEE semantics componentwise: a value with a NaN
/// component never compares equal, not even to a bit-identical copy.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub fn new(re: f64, im: f64) -> Complex64 {
        Complex64 { re, im }
    }
}
