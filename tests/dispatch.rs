use strided_dispatch::{
    Buffer, BufferViewMut, Complex, DataType, DispatchError, Dispatcher, OffsetDispatcher,
    TypeTag,
};

// ── Strided walk helpers ─────────────────────────────────────────────

/// View index of the first element a walk over `n` elements visits, for a
/// view anchored at the walk's minimum index.
fn walk_start(n: usize, stride: isize) -> usize {
    if stride < 0 {
        (n - 1) * stride.unsigned_abs()
    } else {
        0
    }
}

fn negate_strided<T>(s: &mut [T], n: usize, stride: isize)
where
    T: core::ops::Neg<Output = T> + Copy,
{
    let mut i = walk_start(n, stride) as isize;
    for _ in 0..n {
        s[i as usize] = -s[i as usize];
        i += stride;
    }
}

// Negate kernel over any view this suite dispatches to it.
fn negate(n: usize, dtype: DataType, view: BufferViewMut<'_>, stride: isize) {
    match view {
        BufferViewMut::Float64(s) => {
            if dtype == DataType::Complex128 {
                // n counts complex elements; each spans two components.
                let mut i = 2 * walk_start(n, stride) as isize;
                for _ in 0..n {
                    s[i as usize] = -s[i as usize];
                    s[i as usize + 1] = -s[i as usize + 1];
                    i += 2 * stride;
                }
            } else {
                negate_strided(s, n, stride);
            }
        }
        BufferViewMut::Float32(s) => negate_strided(s, n, stride),
        other => panic!("negate kernel got unsupported view {other:?}"),
    }
}

fn negate_fallback(n: usize, _tag: TypeTag<'_>, x: &mut Buffer, stride: isize) {
    if let Buffer::Generic(s) = x {
        negate_strided(s, n, stride);
    }
}

fn negate_fallback_offset(
    n: usize,
    _tag: TypeTag<'_>,
    x: &mut Buffer,
    stride: isize,
    offset: isize,
) {
    if let Buffer::Generic(s) = x {
        let mut i = offset;
        for _ in 0..n {
            s[i as usize] = -s[i as usize];
            i += stride;
        }
    }
}

// ── Basic dispatcher ─────────────────────────────────────────────────

#[test]
fn strided_negate_float64_native() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0]);
    dispatch.call(3, "float64".into(), &mut x, 2).unwrap();
    assert_eq!(x, Buffer::from(vec![-1.0, 2.0, -3.0, 4.0, -5.0]));
}

#[test]
fn strided_negate_float64_negative_stride() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    // The walk covers indices 4, 2, 0 of the full-range view.
    let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0]);
    dispatch.call(3, "float64".into(), &mut x, -2).unwrap();
    assert_eq!(x, Buffer::from(vec![-1.0, 2.0, -3.0, 4.0, -5.0]));
}

#[test]
fn strided_negate_generic_fallback() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    let mut x = Buffer::generic(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    dispatch.call(3, "generic".into(), &mut x, 2).unwrap();
    assert_eq!(x, Buffer::generic(vec![-1.0, 2.0, -3.0, 4.0, -5.0]));
}

#[test]
fn strided_negate_complex128_native() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    let mut x = Buffer::from(vec![
        Complex::new(1.0_f64, 2.0),
        Complex::new(3.0, 4.0),
        Complex::new(5.0, 6.0),
    ]);
    dispatch.call(2, "complex128".into(), &mut x, 2).unwrap();
    assert_eq!(
        x,
        Buffer::from(vec![
            Complex::new(-1.0, -2.0),
            Complex::new(3.0, 4.0),
            Complex::new(-5.0, -6.0),
        ])
    );
}

#[test]
fn bool_buffer_reaches_native_as_bytes() {
    let dispatch = Dispatcher::new(
        |n: usize, dtype: DataType, view: BufferViewMut<'_>, stride: isize| {
            assert_eq!(dtype, DataType::Bool);
            if let BufferViewMut::Uint8(s) = view {
                let mut i = walk_start(n, stride);
                for _ in 0..n {
                    s[i] ^= 1;
                    i = (i as isize + stride) as usize;
                }
            } else {
                panic!("expected byte view");
            }
        },
        |_n: usize, _tag: TypeTag<'_>, _x: &mut Buffer, _stride: isize| {},
    );

    let mut x = Buffer::from_bools(&[true, false, true, false]);
    dispatch.call(2, "bool".into(), &mut x, 2).unwrap();
    assert_eq!(x, Buffer::Bool(vec![0, 0, 0, 0]));
}

#[test]
fn uint8_and_bool_buffers_keep_distinct_constants() {
    // Both arrive as byte views; only the constant tells them apart.
    let seen = std::cell::Cell::new(None);
    let dispatch = Dispatcher::new(
        |_n: usize, dtype: DataType, view: BufferViewMut<'_>, _stride: isize| {
            assert!(matches!(view, BufferViewMut::Uint8(_)));
            seen.set(Some(dtype));
        },
        |_n: usize, _tag: TypeTag<'_>, _x: &mut Buffer, _stride: isize| {},
    );

    let mut bytes = Buffer::from(vec![1_u8, 0]);
    dispatch.call(2, "uint8".into(), &mut bytes, 1).unwrap();
    assert_eq!(seen.get(), Some(DataType::Uint8));

    let mut bools = Buffer::from_bools(&[true, false]);
    dispatch.call(2, "bool".into(), &mut bools, 1).unwrap();
    assert_eq!(seen.get(), Some(DataType::Bool));
}

#[test]
fn failed_dispatch_leaves_buffer_untouched() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    let mut x = Buffer::from(vec![1.0_f64, 2.0]);
    let before = x.clone();
    let r = dispatch.call(2, "beepboopfoobar".into(), &mut x, 1);
    assert_eq!(r.unwrap_err(), DispatchError::UnresolvedDataType);
    assert_eq!(x, before);
}

// ── Offset-aware dispatcher ──────────────────────────────────────────

#[test]
fn offset_negate_tail_of_buffer() {
    let dispatch = OffsetDispatcher::new(negate, negate_fallback_offset);

    let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0]);
    dispatch.call(2, "float64".into(), &mut x, 1, 3).unwrap();
    assert_eq!(x, Buffer::from(vec![1.0, 2.0, 3.0, -4.0, -5.0]));
}

#[test]
fn offset_negate_negative_stride_touches_exact_elements() {
    let dispatch = OffsetDispatcher::new(negate, negate_fallback_offset);

    // Walk: indices 4 and 2. The native view is anchored at index 2.
    let mut x = Buffer::from(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0]);
    dispatch.call(2, "float64".into(), &mut x, -2, 4).unwrap();
    assert_eq!(x, Buffer::from(vec![1.0, 2.0, -3.0, 4.0, -5.0]));
}

#[test]
fn offset_negate_generic_fallback_consumes_nothing() {
    let dispatch = OffsetDispatcher::new(negate, negate_fallback_offset);

    let mut x = Buffer::generic(vec![1.0, 2.0, 3.0, 4.0]);
    dispatch.call(2, "generic".into(), &mut x, 1, 2).unwrap();
    assert_eq!(x, Buffer::generic(vec![1.0, 2.0, -3.0, -4.0]));
}

#[test]
fn offset_negate_complex128_anchors_in_elements() {
    let dispatch = OffsetDispatcher::new(negate, negate_fallback_offset);

    let mut x = Buffer::from(vec![
        Complex::new(1.0_f64, 1.0),
        Complex::new(2.0, 2.0),
        Complex::new(3.0, 3.0),
    ]);
    dispatch.call(2, "complex128".into(), &mut x, 1, 1).unwrap();
    assert_eq!(
        x,
        Buffer::from(vec![
            Complex::new(1.0, 1.0),
            Complex::new(-2.0, -2.0),
            Complex::new(-3.0, -3.0),
        ])
    );
}

#[test]
fn offset_errors_take_precedence_and_leave_buffer_untouched() {
    let dispatch = OffsetDispatcher::new(negate, negate_fallback_offset);

    let mut x = Buffer::from(vec![1.0_f64, 2.0]);
    let before = x.clone();

    let r = dispatch.call(2, "float64".into(), &mut x, 1, -2);
    assert_eq!(r.unwrap_err(), DispatchError::InvalidOffset { offset: -2 });

    let r = dispatch.call(2, "beepboopfoobar".into(), &mut x, 1, 0);
    assert_eq!(r.unwrap_err(), DispatchError::UnresolvedDataType);

    let mut g = Buffer::generic(vec![1.0]);
    let r = dispatch.call(1, "generic".into(), &mut g, 1, -1);
    assert_eq!(r.unwrap_err(), DispatchError::InvalidOffset { offset: -1 });

    assert_eq!(x, before);
    assert_eq!(g, Buffer::generic(vec![1.0]));
}

// ── Shared contracts ─────────────────────────────────────────────────

#[test]
fn both_dispatchers_return_the_callers_buffer() {
    let basic = Dispatcher::new(negate, negate_fallback);
    let offset = OffsetDispatcher::new(negate, negate_fallback_offset);

    let mut x = Buffer::from(vec![1.0_f64, 2.0]);
    let xp: *const Buffer = &x;
    assert!(core::ptr::eq(
        basic.call(2, "float64".into(), &mut x, 1).unwrap(),
        xp
    ));
    assert!(core::ptr::eq(
        offset.call(2, "float64".into(), &mut x, 1, 0).unwrap(),
        xp
    ));
}

#[test]
fn one_dispatcher_serves_many_buffers() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    let mut a = Buffer::from(vec![1.0_f64]);
    let mut b = Buffer::from(vec![2.0_f32]);
    let mut c = Buffer::generic(vec![3.0]);

    dispatch.call(1, "float64".into(), &mut a, 1).unwrap();
    dispatch.call(1, "float32".into(), &mut b, 1).unwrap();
    dispatch.call(1, "generic".into(), &mut c, 1).unwrap();

    assert_eq!(a, Buffer::from(vec![-1.0_f64]));
    assert_eq!(b, Buffer::from(vec![-2.0_f32]));
    assert_eq!(c, Buffer::generic(vec![-3.0]));
}

#[test]
fn dispatcher_is_shareable_across_threads() {
    let dispatch = Dispatcher::new(negate, negate_fallback);

    std::thread::scope(|scope| {
        let d = &dispatch;
        scope.spawn(move || {
            let mut x = Buffer::from(vec![1.0_f64, 2.0]);
            d.call(2, "float64".into(), &mut x, 1).unwrap();
            assert_eq!(x, Buffer::from(vec![-1.0, -2.0]));
        });
        scope.spawn(move || {
            let mut x = Buffer::generic(vec![3.0]);
            d.call(1, "generic".into(), &mut x, 1).unwrap();
            assert_eq!(x, Buffer::generic(vec![-3.0]));
        });
    });
}
