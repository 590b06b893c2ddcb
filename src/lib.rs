//! # strided-dispatch
//!
//! Native/fallback dispatch for strided array operations, no-std compatible.
//! Routes each call to either a native kernel working on raw fixed-layout
//! memory or a portable fallback working on any buffer, reinterpreting
//! boolean and complex storage into the component layout native kernels
//! expect, without copying.
//!
//! ## Quick start
//!
//! ```
//! use strided_dispatch::{Buffer, BufferViewMut, DataType, Dispatcher, TypeTag};
//!
//! // Native kernel: zero every byte it is shown.
//! fn zero(_n: usize, _dtype: DataType, mut view: BufferViewMut<'_>, _stride: isize) {
//!     view.as_bytes_mut().fill(0);
//! }
//!
//! // Portable fallback for generic sequences.
//! fn zero_fallback(_n: usize, _tag: TypeTag<'_>, x: &mut Buffer, _stride: isize) {
//!     if let Buffer::Generic(s) = x {
//!         s.fill(0.0);
//!     }
//! }
//!
//! let dispatch = Dispatcher::new(zero, zero_fallback);
//!
//! // Typed buffers go to the native kernel as a raw fixed-layout view.
//! let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0]);
//! dispatch.call(3, "float64".into(), &mut x, 1).unwrap();
//! assert_eq!(x, Buffer::from(vec![0.0, 0.0, 0.0]));
//!
//! // Generic sequences go to the fallback, tag left unresolved.
//! let mut g = Buffer::generic(vec![1.0, 2.0]);
//! dispatch.call(2, "generic".into(), &mut g, 1).unwrap();
//! assert_eq!(g, Buffer::generic(vec![0.0, 0.0]));
//! ```
//!
//! ## Modules
//!
//! - [`dispatch`] — [`Dispatcher`] for operations addressed by element count
//!   and stride, [`OffsetDispatcher`] for operations that also take a
//!   starting index (validated, then consumed by anchoring the native view
//!   at the lowest index the walk touches). Both return the caller's own
//!   buffer, never the view. Errors are [`DispatchError`].
//!
//! - [`dtype`] — [`DataType`] enumeration with stable numeric constants,
//!   [`TypeTag`] for symbolic-or-resolved tags, and idempotent [`resolve`].
//!
//! - [`buffer`] — [`Buffer`] sum type over typed stores and generic
//!   sequences, [`BufferViewMut`] fixed-layout views, and the zero-copy
//!   reinterpretation functions ([`reinterpret_bool`],
//!   [`reinterpret_complex64`], [`reinterpret_complex128`],
//!   [`offset_view`]).
//!
//! - [`index`] — [`min_view_buffer_index`], the anchor arithmetic for
//!   negative strides.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | `std::error::Error` for [`DispatchError`]. Disable for no-std use; `alloc` is still required |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buffer;
pub mod dispatch;
pub mod dtype;
pub mod index;

pub use buffer::{
    offset_view, reinterpret_bool, reinterpret_complex64, reinterpret_complex128, Buffer,
    BufferViewMut,
};
pub use dispatch::{DispatchError, Dispatcher, OffsetDispatcher};
pub use dtype::{resolve, DataType, TypeTag};
pub use index::min_view_buffer_index;

pub use num_complex::Complex;
