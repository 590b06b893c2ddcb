//! Native/fallback routing for strided operations.
//!
//! A dispatcher pairs two implementations of the same strided operation: a
//! native kernel that wants raw fixed-layout memory, and a portable fallback
//! that works on any [`Buffer`]. At call time the dispatcher inspects the
//! buffer argument and routes:
//!
//! - generic sequences go to the fallback, every argument passed through
//!   unchanged and the type tag left unresolved;
//! - typed buffers have their tag resolved to a [`DataType`] constant and go
//!   to the native kernel as a [`BufferViewMut`] over the backing store,
//!   with boolean storage exposed as raw bytes and complex storage as
//!   interleaved real/imaginary components.
//!
//! Exactly one routine runs per successful call, and the caller always gets
//! its own buffer back, never the view. [`Dispatcher`] covers operations
//! addressed by count and stride alone; [`OffsetDispatcher`] additionally
//! takes a starting index and anchors the native view at the lowest buffer
//! index the strided walk touches.
//!
//! Dispatchers hold nothing but the two routines, so calls are independent
//! and a dispatcher is `Send` and `Sync` whenever its routines are.
//!
//! # Examples
//!
//! ```
//! use strided_dispatch::{Buffer, BufferViewMut, DataType, Dispatcher, TypeTag};
//!
//! // Native kernel: fills the view with ones.
//! fn ones(_n: usize, _dtype: DataType, view: BufferViewMut<'_>, _stride: isize) {
//!     if let BufferViewMut::Float64(s) = view {
//!         s.fill(1.0);
//!     }
//! }
//!
//! // Portable fallback for generic sequences.
//! fn ones_fallback(_n: usize, _tag: TypeTag<'_>, x: &mut Buffer, _stride: isize) {
//!     if let Buffer::Generic(s) = x {
//!         s.fill(1.0);
//!     }
//! }
//!
//! let dispatch = Dispatcher::new(ones, ones_fallback);
//!
//! let mut x = Buffer::from(vec![0.0_f64; 3]);
//! dispatch.call(3, "float64".into(), &mut x, 1).unwrap();
//! assert_eq!(x, Buffer::from(vec![1.0; 3]));
//!
//! let mut g = Buffer::generic(vec![0.0; 3]);
//! dispatch.call(3, "generic".into(), &mut g, 1).unwrap();
//! assert_eq!(g, Buffer::generic(vec![1.0; 3]));
//! ```


use crate::buffer::{Buffer, BufferViewMut};
use crate::dtype::{resolve, DataType, TypeTag};
use crate::index::min_view_buffer_index;

/// Errors from dispatching a strided operation.
///
/// Either error is returned before a routine runs, so a failed call leaves
/// the buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The buffer is typed but its tag does not resolve to a known data
    /// type constant.
    UnresolvedDataType,
    /// The starting index passed to an offset-aware dispatcher is negative.
    InvalidOffset {
        /// The rejected starting index.
        offset: isize,
    },
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::UnresolvedDataType => {
                write!(f, "unable to resolve data type tag to a known constant")
            }
            DispatchError::InvalidOffset { offset } => {
                write!(f, "starting index must be nonnegative, got {offset}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DispatchError {}

/// Fixed-layout view for the native routine, anchored at `start`.
///
/// Callers route generic buffers to the fallback before resolving, so a
/// typed view always exists here.
fn native_view(x: &mut Buffer, start: usize) -> BufferViewMut<'_> {
    match x.view_mut(start) {
        Some(view) => view,
        None => unreachable!(),
    }
}

/// Routes strided-operation calls addressed by element count and stride.
///
/// Built once from a native kernel and a portable fallback, then called any
/// number of times. See the [module docs](self) for the routing rules.
///
/// # Examples
///
/// ```
/// use strided_dispatch::{Buffer, BufferViewMut, Dispatcher, DispatchError};
///
/// let dispatch = Dispatcher::new(
///     |_, _, _: BufferViewMut<'_>, _| (),
///     |_, _, _: &mut Buffer, _| (),
/// );
///
/// let mut x = Buffer::from(vec![1.0_f64, 2.0]);
/// assert!(dispatch.call(2, "float64".into(), &mut x, 1).is_ok());
///
/// // A typed buffer with an unknown tag is rejected before either
/// // routine runs.
/// let err = dispatch.call(2, "beepboopfoobar".into(), &mut x, 1);
/// assert_eq!(err.unwrap_err(), DispatchError::UnresolvedDataType);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<A, F> {
    native: A,
    fallback: F,
}

impl<A, F> Dispatcher<A, F>
where
    A: Fn(usize, DataType, BufferViewMut<'_>, isize),
    F: Fn(usize, TypeTag<'_>, &mut Buffer, isize),
{
    /// Create a dispatcher from a native kernel and a portable fallback.
    pub fn new(native: A, fallback: F) -> Self {
        Self { native, fallback }
    }

    /// Route one strided-operation call over `n` elements of `x`, stepping
    /// by `stride`.
    ///
    /// Generic buffers go to the fallback with all four arguments passed
    /// through unchanged, `tag` unresolved. Typed buffers go to the native
    /// kernel as `(n, resolved constant, view, stride)`, the view covering
    /// the full backing store. Exactly one routine runs per successful
    /// call, and the return value is `x` itself, never the view.
    ///
    /// Errors with [`DispatchError::UnresolvedDataType`] if `x` is typed
    /// and `tag` is unknown; neither routine has run in that case.
    pub fn call<'a>(
        &self,
        n: usize,
        tag: TypeTag<'_>,
        x: &'a mut Buffer,
        stride: isize,
    ) -> Result<&'a mut Buffer, DispatchError> {
        if !x.is_typed() {
            (self.fallback)(n, tag, x, stride);
            return Ok(x);
        }
        let dtype = resolve(tag).ok_or(DispatchError::UnresolvedDataType)?;
        (self.native)(n, dtype, native_view(x, 0), stride);
        Ok(x)
    }
}

/// Routes strided-operation calls addressed by element count, stride, and
/// starting index.
///
/// The starting index is validated before any other work: a negative value
/// is rejected even when the buffer is generic. On the native path the
/// index is consumed by anchoring the view at the lowest buffer index the
/// walk touches ([`min_view_buffer_index`]); the fallback receives it
/// unchanged as a fifth argument.
///
/// # Examples
///
/// ```
/// use strided_dispatch::{Buffer, BufferViewMut, DataType, OffsetDispatcher, TypeTag};
///
/// fn negate(n: usize, _dtype: DataType, view: BufferViewMut<'_>, stride: isize) {
///     if let BufferViewMut::Float64(s) = view {
///         let mut i = if stride < 0 { (n as isize - 1) * -stride } else { 0 };
///         for _ in 0..n {
///             s[i as usize] = -s[i as usize];
///             i += stride;
///         }
///     }
/// }
/// fn negate_fallback(_n: usize, _tag: TypeTag<'_>, _x: &mut Buffer, _stride: isize, _offset: isize) {}
///
/// let dispatch = OffsetDispatcher::new(negate, negate_fallback);
///
/// // Negate the last two elements only.
/// let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0]);
/// dispatch.call(2, "float64".into(), &mut x, 1, 1).unwrap();
/// assert_eq!(x, Buffer::from(vec![1.0, -2.0, -3.0]));
/// ```
#[derive(Debug, Clone)]
pub struct OffsetDispatcher<A, F> {
    native: A,
    fallback: F,
}

impl<A, F> OffsetDispatcher<A, F>
where
    A: Fn(usize, DataType, BufferViewMut<'_>, isize),
    F: Fn(usize, TypeTag<'_>, &mut Buffer, isize, isize),
{
    /// Create a dispatcher from a native kernel and a portable fallback.
    pub fn new(native: A, fallback: F) -> Self {
        Self { native, fallback }
    }

    /// Route one strided-operation call over `n` elements of `x`, stepping
    /// by `stride` from element `offset`.
    ///
    /// `offset` is validated first, before the buffer is even classified.
    /// Generic buffers then go to the fallback with all five arguments
    /// passed through unchanged. Typed buffers go to the native kernel as
    /// `(n, resolved constant, view, stride)`, the view anchored at the
    /// lowest buffer index the walk touches so that `offset` never needs
    /// forwarding. Exactly one routine runs per successful call, and the
    /// return value is `x` itself, never the view.
    ///
    /// Errors with [`DispatchError::InvalidOffset`] if `offset` is
    /// negative, or [`DispatchError::UnresolvedDataType`] if `x` is typed
    /// and `tag` is unknown; neither routine has run in either case.
    ///
    /// Panics if the walk escapes the buffer, that is if the anchor index
    /// falls outside `0..=x.len()`.
    pub fn call<'a>(
        &self,
        n: usize,
        tag: TypeTag<'_>,
        x: &'a mut Buffer,
        stride: isize,
        offset: isize,
    ) -> Result<&'a mut Buffer, DispatchError> {
        if offset < 0 {
            return Err(DispatchError::InvalidOffset { offset });
        }
        if !x.is_typed() {
            (self.fallback)(n, tag, x, stride, offset);
            return Ok(x);
        }
        let dtype = resolve(tag).ok_or(DispatchError::UnresolvedDataType)?;
        let min = min_view_buffer_index(n, stride, offset);
        assert!(min >= 0, "strided walk reaches negative buffer index {min}");
        (self.native)(n, dtype, native_view(x, min as usize), stride);
        Ok(x)
    }
}
