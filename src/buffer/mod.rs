//! Strided-operation data buffers and their fixed-layout views.
//!
//! A [`Buffer`] owns the elements a strided operation reads and writes. One
//! variant exists per fixed-layout element type, plus [`Buffer::Generic`]
//! for plain element sequences with no layout contract. Native kernels never
//! see a `Buffer` directly; they receive a [`BufferViewMut`] taken over its
//! backing store, with boolean elements exposed as raw bytes and complex
//! elements as interleaved real/imaginary components. The reinterpretation
//! functions are zero-copy; views alias the buffer they were taken from.
//!
//! # Examples
//!
//! ```
//! use strided_dispatch::{Buffer, BufferViewMut, DataType};
//!
//! let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0]);
//! assert_eq!(x.dtype(), DataType::Float64);
//! assert!(x.is_typed());
//!
//! // Writes through a view land in the buffer.
//! match x.view_mut(0) {
//!     Some(BufferViewMut::Float64(s)) => s[2] = 9.0,
//!     _ => unreachable!(),
//! }
//! assert_eq!(x, Buffer::from(vec![1.0, 2.0, 9.0]));
//!
//! // Generic sequences have no fixed layout and thus no view.
//! let mut g = Buffer::generic(vec![1.0, 2.0]);
//! assert!(!g.is_typed());
//! assert!(g.view_mut(0).is_none());
//! ```

mod reinterpret;
mod view;


pub use reinterpret::{offset_view, reinterpret_bool, reinterpret_complex64, reinterpret_complex128};
pub use view::BufferViewMut;

use alloc::vec::Vec;
use num_complex::Complex;

use crate::dtype::DataType;

/// A strided-operation data buffer.
///
/// Each typed variant owns its backing store. Boolean elements are stored
/// one byte per element (`0` or `1`) and complex elements store interleaved
/// real and imaginary components, so both reinterpret as raw component
/// slices without copying. [`Buffer::Generic`] holds a plain ordered
/// sequence with no layout contract; it is the one variant that can never
/// be handed to a native kernel.
///
/// # Examples
///
/// ```
/// use strided_dispatch::{Buffer, DataType};
///
/// let x = Buffer::from(vec![1_i32, 2, 3]);
/// assert_eq!(x.dtype(), DataType::Int32);
/// assert_eq!(x.len(), 3);
///
/// let b = Buffer::from_bools(&[true, false]);
/// assert_eq!(b, Buffer::Bool(vec![1, 0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int64(Vec<i64>),
    Uint64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Complex64(Vec<Complex<f32>>),
    Complex128(Vec<Complex<f64>>),
    /// Boolean elements, one byte per element, `0` or `1`.
    Bool(Vec<u8>),
    /// Plain ordered sequence, no fixed memory layout.
    Generic(Vec<f64>),
}

// ── Constructors ────────────────────────────────────────────────────

impl Buffer {
    /// Create a generic sequence buffer.
    ///
    /// `From<Vec<f64>>` yields the fixed-layout [`Buffer::Float64`]; this is
    /// the untyped reading of the same data.
    pub fn generic(data: Vec<f64>) -> Self {
        Buffer::Generic(data)
    }

    /// Create a boolean buffer, stored one byte per element.
    pub fn from_bools(data: &[bool]) -> Self {
        Buffer::Bool(data.iter().map(|&b| b as u8).collect())
    }
}

macro_rules! impl_from_vec {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl From<Vec<$t>> for Buffer {
                fn from(data: Vec<$t>) -> Self {
                    Buffer::$variant(data)
                }
            }
        )*
    };
}

impl_from_vec!(
    Int8 => i8,
    Uint8 => u8,
    Int16 => i16,
    Uint16 => u16,
    Int32 => i32,
    Uint32 => u32,
    Int64 => i64,
    Uint64 => u64,
    Float32 => f32,
    Float64 => f64,
    Complex64 => Complex<f32>,
    Complex128 => Complex<f64>,
);

// ── Accessors ───────────────────────────────────────────────────────

impl Buffer {
    /// Number of elements. Complex buffers count complex elements, not
    /// components.
    pub fn len(&self) -> usize {
        match self {
            Buffer::Int8(v) => v.len(),
            Buffer::Uint8(v) => v.len(),
            Buffer::Int16(v) => v.len(),
            Buffer::Uint16(v) => v.len(),
            Buffer::Int32(v) => v.len(),
            Buffer::Uint32(v) => v.len(),
            Buffer::Int64(v) => v.len(),
            Buffer::Uint64(v) => v.len(),
            Buffer::Float32(v) => v.len(),
            Buffer::Float64(v) => v.len(),
            Buffer::Complex64(v) => v.len(),
            Buffer::Complex128(v) => v.len(),
            Buffer::Bool(v) => v.len(),
            Buffer::Generic(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data type this buffer stores.
    pub fn dtype(&self) -> DataType {
        match self {
            Buffer::Int8(_) => DataType::Int8,
            Buffer::Uint8(_) => DataType::Uint8,
            Buffer::Int16(_) => DataType::Int16,
            Buffer::Uint16(_) => DataType::Uint16,
            Buffer::Int32(_) => DataType::Int32,
            Buffer::Uint32(_) => DataType::Uint32,
            Buffer::Int64(_) => DataType::Int64,
            Buffer::Uint64(_) => DataType::Uint64,
            Buffer::Float32(_) => DataType::Float32,
            Buffer::Float64(_) => DataType::Float64,
            Buffer::Complex64(_) => DataType::Complex64,
            Buffer::Complex128(_) => DataType::Complex128,
            Buffer::Bool(_) => DataType::Bool,
            Buffer::Generic(_) => DataType::Generic,
        }
    }

    /// Whether this buffer has a fixed memory layout.
    ///
    /// `false` only for [`Buffer::Generic`].
    #[inline]
    pub fn is_typed(&self) -> bool {
        !matches!(self, Buffer::Generic(_))
    }

    /// Mutable fixed-layout view of the backing store, starting at element
    /// index `start` of this buffer's own indexing.
    ///
    /// Boolean storage is viewed as raw bytes and complex storage as
    /// interleaved real/imaginary components, so anchoring a complex buffer
    /// at `start` skips `2 * start` components. Every other typed variant
    /// yields a same-type view shifted by `start`. Generic buffers have no
    /// fixed layout and yield `None` regardless of `start`.
    ///
    /// Panics if `start > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strided_dispatch::{Buffer, BufferViewMut, Complex};
    ///
    /// let mut x = Buffer::from(vec![Complex::new(1.0_f32, 2.0), Complex::new(3.0, 4.0)]);
    /// match x.view_mut(1) {
    ///     Some(BufferViewMut::Float32(s)) => assert_eq!(s, [3.0, 4.0]),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn view_mut(&mut self, start: usize) -> Option<BufferViewMut<'_>> {
        match self {
            Buffer::Int8(v) => Some(BufferViewMut::Int8(offset_view(v, start))),
            Buffer::Uint8(v) => Some(BufferViewMut::Uint8(offset_view(v, start))),
            Buffer::Int16(v) => Some(BufferViewMut::Int16(offset_view(v, start))),
            Buffer::Uint16(v) => Some(BufferViewMut::Uint16(offset_view(v, start))),
            Buffer::Int32(v) => Some(BufferViewMut::Int32(offset_view(v, start))),
            Buffer::Uint32(v) => Some(BufferViewMut::Uint32(offset_view(v, start))),
            Buffer::Int64(v) => Some(BufferViewMut::Int64(offset_view(v, start))),
            Buffer::Uint64(v) => Some(BufferViewMut::Uint64(offset_view(v, start))),
            Buffer::Float32(v) => Some(BufferViewMut::Float32(offset_view(v, start))),
            Buffer::Float64(v) => Some(BufferViewMut::Float64(offset_view(v, start))),
            Buffer::Complex64(v) => Some(BufferViewMut::Float32(reinterpret_complex64(v, start))),
            Buffer::Complex128(v) => Some(BufferViewMut::Float64(reinterpret_complex128(v, start))),
            Buffer::Bool(v) => Some(BufferViewMut::Uint8(reinterpret_bool(v, start))),
            Buffer::Generic(_) => None,
        }
    }
}
