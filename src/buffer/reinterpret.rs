use num_complex::Complex;

/// View boolean storage as raw bytes, starting at element `offset`.
///
/// Boolean buffers store one byte per element, so this is a plain shifted
/// reborrow; writes through the result are writes to the input.
///
/// Panics if `offset > data.len()`.
///
/// # Examples
///
/// ```
/// use strided_dispatch::reinterpret_bool;
///
/// let mut data = vec![1_u8, 0, 1];
/// assert_eq!(reinterpret_bool(&mut data, 1), [0, 1]);
/// ```
#[inline]
pub fn reinterpret_bool(data: &mut [u8], offset: usize) -> &mut [u8] {
    &mut data[offset..]
}

/// View single-precision complex storage as its interleaved `f32`
/// components, starting at complex element `offset`.
///
/// The result has length `2 * (data.len() - offset)` and aliases the input:
/// component `2 * i` is the real part of element `offset + i`, component
/// `2 * i + 1` its imaginary part.
///
/// Panics if `offset > data.len()`.
///
/// # Examples
///
/// ```
/// use strided_dispatch::{reinterpret_complex64, Complex};
///
/// let mut data = vec![Complex::new(1.0_f32, 2.0), Complex::new(3.0, 4.0)];
/// assert_eq!(reinterpret_complex64(&mut data, 0), [1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(reinterpret_complex64(&mut data, 1), [3.0, 4.0]);
/// ```
#[inline]
pub fn reinterpret_complex64(data: &mut [Complex<f32>], offset: usize) -> &mut [f32] {
    bytemuck::cast_slice_mut(&mut data[offset..])
}

/// View double-precision complex storage as its interleaved `f64`
/// components, starting at complex element `offset`.
///
/// Same layout contract as [`reinterpret_complex64`].
///
/// Panics if `offset > data.len()`.
#[inline]
pub fn reinterpret_complex128(data: &mut [Complex<f64>], offset: usize) -> &mut [f64] {
    bytemuck::cast_slice_mut(&mut data[offset..])
}

/// Same-type view of a slice starting at element `offset`.
///
/// Used for buffers whose elements already have the layout a native kernel
/// expects and only need their anchor shifted.
///
/// Panics if `offset > data.len()`.
#[inline]
pub fn offset_view<T>(data: &mut [T], offset: usize) -> &mut [T] {
    &mut data[offset..]
}
