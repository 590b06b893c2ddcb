use crate::dtype::DataType;

/// Mutable fixed-layout view over a buffer's backing store.
///
/// This is what a native kernel receives in place of the [`Buffer`] it was
/// called about: boolean storage appears as raw bytes and complex storage as
/// interleaved real/imaginary components, so only the ten raw numeric
/// layouts occur here. The view aliases the buffer it was taken from; writes
/// through it are writes to the original storage. It lives for a single
/// kernel invocation and is never handed back to the dispatching caller.
///
/// [`Buffer`]: crate::Buffer
#[derive(Debug)]
pub enum BufferViewMut<'a> {
    Int8(&'a mut [i8]),
    Uint8(&'a mut [u8]),
    Int16(&'a mut [i16]),
    Uint16(&'a mut [u16]),
    Int32(&'a mut [i32]),
    Uint32(&'a mut [u32]),
    Int64(&'a mut [i64]),
    Uint64(&'a mut [u64]),
    Float32(&'a mut [f32]),
    Float64(&'a mut [f64]),
}

impl BufferViewMut<'_> {
    /// Number of elements visible through the view.
    ///
    /// A component view over complex storage counts components, twice the
    /// complex element count it was taken over.
    pub fn len(&self) -> usize {
        match self {
            BufferViewMut::Int8(s) => s.len(),
            BufferViewMut::Uint8(s) => s.len(),
            BufferViewMut::Int16(s) => s.len(),
            BufferViewMut::Uint16(s) => s.len(),
            BufferViewMut::Int32(s) => s.len(),
            BufferViewMut::Uint32(s) => s.len(),
            BufferViewMut::Int64(s) => s.len(),
            BufferViewMut::Uint64(s) => s.len(),
            BufferViewMut::Float32(s) => s.len(),
            BufferViewMut::Float64(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element type visible through the view.
    ///
    /// Byte views over boolean storage report [`DataType::Uint8`]; component
    /// views over complex storage report the component float type.
    pub fn dtype(&self) -> DataType {
        match self {
            BufferViewMut::Int8(_) => DataType::Int8,
            BufferViewMut::Uint8(_) => DataType::Uint8,
            BufferViewMut::Int16(_) => DataType::Int16,
            BufferViewMut::Uint16(_) => DataType::Uint16,
            BufferViewMut::Int32(_) => DataType::Int32,
            BufferViewMut::Uint32(_) => DataType::Uint32,
            BufferViewMut::Int64(_) => DataType::Int64,
            BufferViewMut::Uint64(_) => DataType::Uint64,
            BufferViewMut::Float32(_) => DataType::Float32,
            BufferViewMut::Float64(_) => DataType::Float64,
        }
    }

    /// Raw byte view of the elements, in memory order, for handing across
    /// an FFI boundary.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            BufferViewMut::Int8(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Uint8(s) => &mut **s,
            BufferViewMut::Int16(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Uint16(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Int32(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Uint32(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Int64(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Uint64(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Float32(s) => bytemuck::cast_slice_mut(&mut **s),
            BufferViewMut::Float64(s) => bytemuck::cast_slice_mut(&mut **s),
        }
    }
}
