//! Data type constants and tag resolution.
//!
//! Strided buffers are labelled with a data type in one of two forms: a
//! symbolic name (`"float64"`) used by portable code, or the stable numeric
//! constant ([`DataType::code`]) used when crossing the native kernel
//! boundary. [`resolve`] maps either form to its [`DataType`] constant and
//! is idempotent, so an already-resolved code resolves to itself.
//!
//! # Examples
//!
//! ```
//! use strided_dispatch::{resolve, DataType, TypeTag};
//!
//! assert_eq!(resolve(TypeTag::Name("float64")), Some(DataType::Float64));
//! assert_eq!(resolve(TypeTag::Code(DataType::Float64.code())), Some(DataType::Float64));
//! assert_eq!(resolve(TypeTag::Name("beep boop")), None);
//! ```


use num_traits::{FromPrimitive, ToPrimitive};

/// Strided-array element types.
///
/// Each variant carries a stable numeric constant, fixed across releases,
/// which is the value handed to native kernels in place of the symbolic
/// name. [`DataType::Generic`] labels plain element sequences with no
/// fixed memory layout; buffers of that type never reach a native kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int8 = 0,
    Uint8 = 1,
    Int16 = 2,
    Uint16 = 3,
    Int32 = 4,
    Uint32 = 5,
    Int64 = 6,
    Uint64 = 7,
    Float32 = 8,
    Float64 = 9,
    Complex64 = 10,
    Complex128 = 11,
    Bool = 12,
    Generic = 13,
}

impl DataType {
    /// All data type constants, in code order.
    pub const ALL: [DataType; 14] = [
        DataType::Int8,
        DataType::Uint8,
        DataType::Int16,
        DataType::Uint16,
        DataType::Int32,
        DataType::Uint32,
        DataType::Int64,
        DataType::Uint64,
        DataType::Float32,
        DataType::Float64,
        DataType::Complex64,
        DataType::Complex128,
        DataType::Bool,
        DataType::Generic,
    ];

    /// The stable numeric constant for this data type.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a data type from its numeric constant.
    ///
    /// Unknown constants yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Int8),
            1 => Some(Self::Uint8),
            2 => Some(Self::Int16),
            3 => Some(Self::Uint16),
            4 => Some(Self::Int32),
            5 => Some(Self::Uint32),
            6 => Some(Self::Int64),
            7 => Some(Self::Uint64),
            8 => Some(Self::Float32),
            9 => Some(Self::Float64),
            10 => Some(Self::Complex64),
            11 => Some(Self::Complex128),
            12 => Some(Self::Bool),
            13 => Some(Self::Generic),
            _ => None,
        }
    }

    /// The canonical lowercase name for this data type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Bool => "bool",
            Self::Generic => "generic",
        }
    }

    /// Look up a data type from its canonical name.
    ///
    /// Names are matched exactly (lowercase); unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "uint8" => Some(Self::Uint8),
            "int16" => Some(Self::Int16),
            "uint16" => Some(Self::Uint16),
            "int32" => Some(Self::Int32),
            "uint32" => Some(Self::Uint32),
            "int64" => Some(Self::Int64),
            "uint64" => Some(Self::Uint64),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "complex64" => Some(Self::Complex64),
            "complex128" => Some(Self::Complex128),
            "bool" => Some(Self::Bool),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromPrimitive for DataType {
    fn from_i64(n: i64) -> Option<Self> {
        i32::try_from(n).ok().and_then(Self::from_code)
    }

    fn from_u64(n: u64) -> Option<Self> {
        i32::try_from(n).ok().and_then(Self::from_code)
    }
}

impl ToPrimitive for DataType {
    fn to_i64(&self) -> Option<i64> {
        Some(i64::from(self.code()))
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.code()).ok()
    }
}

/// A data type tag as supplied by a caller: a symbolic name, or a numeric
/// constant from a previous resolution.
///
/// Fallback routines receive the tag exactly as the caller provided it;
/// native kernels only ever see the resolved [`DataType`].
///
/// # Examples
///
/// ```
/// use strided_dispatch::{DataType, TypeTag};
///
/// let by_name: TypeTag = "complex64".into();
/// let by_code: TypeTag = DataType::Complex64.into();
/// assert_eq!(by_name, TypeTag::Name("complex64"));
/// assert_eq!(by_code, TypeTag::Code(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag<'a> {
    /// Symbolic name, e.g. `"float64"`.
    Name(&'a str),
    /// Numeric constant, as returned by [`DataType::code`].
    Code(i32),
}

impl<'a> From<&'a str> for TypeTag<'a> {
    fn from(name: &'a str) -> Self {
        TypeTag::Name(name)
    }
}

impl From<DataType> for TypeTag<'_> {
    fn from(dtype: DataType) -> Self {
        TypeTag::Code(dtype.code())
    }
}

impl core::fmt::Display for TypeTag<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeTag::Name(name) => f.write_str(name),
            TypeTag::Code(code) => write!(f, "{code}"),
        }
    }
}

/// Resolve a type tag to its [`DataType`] constant.
///
/// Names are matched against the canonical lowercase spellings; codes are
/// validated against the known constants. Resolution is idempotent.
/// Unknown names and codes yield `None`.
#[inline]
pub fn resolve(tag: TypeTag<'_>) -> Option<DataType> {
    match tag {
        TypeTag::Name(name) => DataType::from_name(name),
        TypeTag::Code(code) => DataType::from_code(code),
    }
}
