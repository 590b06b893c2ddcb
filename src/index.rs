//! Buffer index arithmetic for strided walks.

/// Lowest buffer index touched by a strided walk of `n` elements starting
/// at `offset` with step `stride`.
///
/// For non-negative strides the walk moves forward and the starting index is
/// already the minimum. For negative strides the walk moves backward, so the
/// last element visited, `offset + (n - 1) * stride`, is the minimum. A walk
/// of zero elements touches nothing and the offset is returned unchanged.
///
/// The result is not clamped; callers anchor views at it and rely on view
/// construction to reject out-of-range indices.
///
/// # Examples
///
/// ```
/// use strided_dispatch::min_view_buffer_index;
///
/// assert_eq!(min_view_buffer_index(3, 1, 10), 10);
/// assert_eq!(min_view_buffer_index(3, -2, 10), 6);
/// assert_eq!(min_view_buffer_index(0, -2, 10), 10);
/// ```
#[inline]
pub fn min_view_buffer_index(n: usize, stride: isize, offset: isize) -> isize {
    if n > 0 && stride < 0 {
        offset + (n as isize - 1) * stride
    } else {
        offset
    }
}
