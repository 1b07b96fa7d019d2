//! Integration tests for `DynamicVector` construction, assignment and
//! arithmetic.

use dynmat::{DynamicVector, LinalgError, Limits, MAX_VECTOR_SIZE};

fn vec_i32(values: &[i32]) -> DynamicVector<i32> {
    DynamicVector::from_slice(values).expect("valid test vector")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn can_create_vector_with_positive_length() {
    for size in [1, 2, 5, 64] {
        let v: DynamicVector<i32> = DynamicVector::new(size).unwrap();
        assert_eq!(v.size(), size);
    }
}

#[test]
fn cant_create_too_large_vector() {
    let result = DynamicVector::<i32>::new(MAX_VECTOR_SIZE + 1);
    assert!(matches!(result, Err(LinalgError::InvalidSize { .. })));
}

#[test]
fn cant_create_empty_vector() {
    let result = DynamicVector::<i32>::new(0);
    assert!(matches!(
        result,
        Err(LinalgError::InvalidSize { requested: 0, .. })
    ));
}

#[test]
fn negative_length_wraps_past_the_bound() {
    let requested = -5i64 as usize;
    assert!(matches!(
        DynamicVector::<i32>::new(requested),
        Err(LinalgError::InvalidSize { .. })
    ));
}

#[test]
fn custom_limits_are_honoured() {
    let limits = Limits::new(8, 4);
    assert!(DynamicVector::<f64>::with_limits(8, &limits).is_ok());
    assert!(matches!(
        DynamicVector::<f64>::with_limits(9, &limits),
        Err(LinalgError::InvalidSize { requested: 9, max: 8 })
    ));
}

#[test]
fn from_raw_requires_a_buffer() {
    let result = DynamicVector::<i32>::from_raw(None, 3);
    assert!(matches!(result, Err(LinalgError::InvalidArgument(_))));
}

#[test]
fn from_raw_copies_the_requested_prefix() {
    let source = [1, 2, 3, 4];
    let v = DynamicVector::from_raw(Some(&source[..]), 3).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_ne!(v.as_slice().as_ptr(), source.as_ptr());
}

#[test]
fn from_raw_rejects_short_buffer() {
    let source = [1, 2];
    assert!(matches!(
        DynamicVector::from_raw(Some(&source[..]), 3),
        Err(LinalgError::InvalidArgument(_))
    ));
}

#[test]
fn try_from_vec_validates_size() {
    assert!(DynamicVector::<u8>::try_from(Vec::new()).is_err());
    let v = DynamicVector::try_from(vec![1.5f32, 2.5]).unwrap();
    assert_eq!(v.size(), 2);
}

// ---------------------------------------------------------------------------
// Copy, move and assignment
// ---------------------------------------------------------------------------

#[test]
fn copied_vector_is_equal_to_source_one() {
    let mut v1: DynamicVector<i32> = DynamicVector::new(10).unwrap();
    v1[0] = 10;
    let v2 = v1.clone();
    assert_eq!(v2, v1);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let v1: DynamicVector<i32> = DynamicVector::new(10).unwrap();
    let mut v2: DynamicVector<i32> = DynamicVector::default();
    v2.clone_from(&v1);
    assert_ne!(v1.as_slice().as_ptr(), v2.as_slice().as_ptr());

    v2[3] = 7;
    assert_eq!(v1[3], 0);
}

#[test]
fn can_assign_vector_to_itself() {
    let mut v = vec_i32(&[1, 2, 3, 4]);
    v = v.clone();
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn assign_operator_change_vector_size() {
    let mut v1: DynamicVector<i32> = DynamicVector::new(3).unwrap();
    let v2 = vec_i32(&[1, 2, 3, 4, 5]);
    v1.clone_from(&v2);
    assert_eq!(v1.size(), 5);
    assert_eq!(v1, v2);
}

#[test]
fn move_keeps_the_buffer() {
    let v1 = vec_i32(&[1, 2, 3]);
    let ptr = v1.as_slice().as_ptr();
    let v2 = v1;
    assert_eq!(v2.as_slice().as_ptr(), ptr);
}

#[test]
fn swap_exchanges_size_and_contents() {
    let mut a = vec_i32(&[1, 2]);
    let mut b = vec_i32(&[3, 4, 5]);
    a.swap(&mut b);
    assert_eq!(a.as_slice(), &[3, 4, 5]);
    assert_eq!(b.as_slice(), &[1, 2]);
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn can_set_and_get_element() {
    let mut v: DynamicVector<i32> = DynamicVector::new(4).unwrap();
    v[0] = 4;
    *v.at_mut(3).unwrap() = 9;
    assert_eq!(v[0], 4);
    assert_eq!(*v.at(3).unwrap(), 9);
}

#[test]
fn throws_when_get_element_with_too_large_index() {
    let v: DynamicVector<i32> = DynamicVector::new(4).unwrap();
    assert!(matches!(
        v.at(4),
        Err(LinalgError::OutOfRange { index: 4, size: 4 })
    ));
    assert!(v.at(usize::MAX).is_err());
}

#[test]
#[should_panic]
fn unchecked_index_panics_out_of_bounds() {
    let v: DynamicVector<i32> = DynamicVector::new(2).unwrap();
    let _value = v[2];
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn compare_equal_vectors_return_true() {
    assert_eq!(vec_i32(&[1, 2]), vec_i32(&[1, 2]));
}

#[test]
fn compare_vector_with_itself_return_true() {
    let v: DynamicVector<i32> = DynamicVector::new(3).unwrap();
    assert!(v == v);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let v1: DynamicVector<i32> = DynamicVector::new(3).unwrap();
    let v2: DynamicVector<i32> = DynamicVector::new(5).unwrap();
    assert!(v1 != v2);
}

// ---------------------------------------------------------------------------
// Scalar operators
// ---------------------------------------------------------------------------

#[test]
fn can_add_scalar_to_vector() {
    let v = vec_i32(&[5, 6, 7]);
    assert_eq!(&v + 1, vec_i32(&[6, 7, 8]));
}

#[test]
fn can_subtract_scalar_from_vector() {
    let v = vec_i32(&[5, 6, 7]);
    assert_eq!(&v - 1, vec_i32(&[4, 5, 6]));
}

#[test]
fn can_multiply_scalar_by_vector() {
    let v = vec_i32(&[5, 6, 7]);
    assert_eq!(&v * 2, vec_i32(&[10, 12, 14]));
}

#[test]
fn scalar_operators_hold_elementwise() {
    let v = DynamicVector::from_slice(&[0.5, -1.25, 3.0, 8.0]).unwrap();
    let k = 2.0;
    let added = &v + k;
    let subbed = &v - k;
    let scaled = &v * k;
    for i in 0..v.size() {
        assert_eq!(added[i], v[i] + k);
        assert_eq!(subbed[i], v[i] - k);
        assert_eq!(scaled[i], v[i] * k);
    }
    // operands are untouched
    assert_eq!(v.as_slice(), &[0.5, -1.25, 3.0, 8.0]);
}

// ---------------------------------------------------------------------------
// Vector operators
// ---------------------------------------------------------------------------

#[test]
fn can_add_vectors_with_equal_size() {
    let v1 = vec_i32(&[5, 6, 7]);
    let v2 = vec_i32(&[1, 2, 3]);
    assert_eq!((&v1 + &v2).unwrap(), vec_i32(&[6, 8, 10]));
    assert_eq!((&v1 + &v2).unwrap(), (&v2 + &v1).unwrap());
}

#[test]
fn cant_add_vectors_with_not_equal_size() {
    let v1 = vec_i32(&[1, 2, 3]);
    let v2 = vec_i32(&[1, 2]);
    assert!(matches!(
        &v1 + &v2,
        Err(LinalgError::SizeMismatch { left: 3, right: 2 })
    ));
}

#[test]
fn can_subtract_vectors_with_equal_size() {
    let v1 = vec_i32(&[5, 6, 7]);
    let v2 = vec_i32(&[1, 2, 3]);
    assert_eq!((&v1 - &v2).unwrap(), vec_i32(&[4, 4, 4]));
}

#[test]
fn cant_subtract_vectors_with_not_equal_size() {
    let v1 = vec_i32(&[1, 2, 3]);
    let v2 = vec_i32(&[1, 2, 3, 4]);
    assert!(matches!(&v1 - &v2, Err(LinalgError::SizeMismatch { .. })));
}

#[test]
fn can_multiply_vectors_with_equal_size() {
    let v1 = vec_i32(&[5, 6, 7]);
    let v2 = vec_i32(&[1, 2, 3]);
    assert_eq!((&v1 * &v2).unwrap(), 38);
}

#[test]
fn cant_multiply_vectors_with_not_equal_size() {
    let v1 = vec_i32(&[5, 6, 7]);
    let v2 = vec_i32(&[1, 2]);
    assert!(matches!(v1.dot(&v2), Err(LinalgError::SizeMismatch { .. })));
}
