use triangular::data::linear_algebra::error::LinearAlgebraError;
use triangular::data::linear_algebra::MAX_VECTOR_SIZE;
use triangular::data::linear_algebra::vector::OffsetVector;

/// Vector of length 5 holding `3 - i` at index `i`.
fn countdown() -> OffsetVector<i32> {
    let mut v = OffsetVector::new(5, 0).unwrap();
    for i in 0..v.len() {
        v[i] = 3 - i as i32;
    }
    v
}

#[test]
fn create() {
    assert!(OffsetVector::<i32>::new(5, 0).is_ok());
    assert!(OffsetVector::<i32>::new(MAX_VECTOR_SIZE + 1, 0).is_err());
    assert!(OffsetVector::<i32>::new(0, 0).is_err());
    assert!(OffsetVector::<i32>::new(5, MAX_VECTOR_SIZE).is_err());

    let v = OffsetVector::<i32>::new(4, 2).unwrap();
    assert_eq!(v.len(), 4);
    assert_eq!(v.start_index(), 2);
}

#[test]
fn copy_has_own_memory() {
    let mut first = OffsetVector::<i32>::new(3, 0).unwrap();
    first[2] = 7;
    let mut second = first.clone();
    assert_eq!(first, second);
    assert_ne!(first.get(0).unwrap() as *const i32, second.get(0).unwrap() as *const i32);

    second[2] = 1;
    assert_eq!(first[2], 7);
    assert_ne!(first, second);
}

#[test]
fn out_of_range() {
    let mut v = OffsetVector::<f64>::new(5, 0).unwrap();
    assert_eq!(
        v.get_mut(5).map(|value| *value),
        Err(LinearAlgebraError::IndexOutOfRange { index: 5, valid: 0..5 }),
    );
    assert!(v.set(usize::MAX, 1.0).is_err());
}

#[test]
fn assign_changes_size() {
    let mut first = OffsetVector::<i32>::new(1, 0).unwrap();
    let mut second = OffsetVector::<i32>::new(5, 0).unwrap();
    first[0] = 1;
    second.assign(&first);
    assert_eq!(second.len(), 1);
    assert_eq!(second, first);
}

#[test]
fn assign_to_equal_copy() {
    let mut v = OffsetVector::from_values(vec![1, 2, 3], 0).unwrap();
    let same = v.clone();
    v.assign(&same);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn scalar_arithmetic() {
    let first = countdown();

    let mut expected = OffsetVector::new(5, 0).unwrap();
    for i in 0..expected.len() {
        expected[i] = 3 - i as i32 + 7;
    }
    assert_eq!(first.add_scalar(&7), Ok(expected));

    let mut expected = OffsetVector::new(5, 0).unwrap();
    for i in 0..expected.len() {
        expected[i] = 3 - i as i32 - 7;
    }
    assert_eq!(first.sub_scalar(&7), Ok(expected));

    let mut expected = OffsetVector::new(5, 0).unwrap();
    for i in 0..expected.len() {
        expected[i] = (3 - i as i32) * 7;
    }
    assert_eq!(first.mul_scalar(&7), expected);
}

#[test]
fn vector_arithmetic() {
    let first = OffsetVector::from_values(vec![3, 2, 1], 0).unwrap();
    let second = OffsetVector::from_values(vec![1, 4, 7], 0).unwrap();

    assert_eq!(first.try_add(&second), OffsetVector::from_values(vec![4, 6, 8], 0));
    assert_eq!(first.try_sub(&second), OffsetVector::from_values(vec![2, -2, -6], 0));
    assert_eq!(first.inner_product(&second), Ok(18));

    let long = OffsetVector::<i32>::new(6, 0).unwrap();
    for result in [first.try_add(&long), first.try_sub(&long)] {
        assert_eq!(result, Err(LinearAlgebraError::DimensionMismatch { left: 3, right: 6 }));
    }
    assert!(first.inner_product(&long).is_err());
}

#[test]
fn errors_leave_operands_unchanged() {
    let first = OffsetVector::from_values(vec![3, 2, 1], 0).unwrap();
    let long = OffsetVector::from_values(vec![1; 6], 0).unwrap();
    assert!(first.try_add(&long).is_err());
    assert_eq!(first, OffsetVector::from_values(vec![3, 2, 1], 0).unwrap());
    assert_eq!(long, OffsetVector::from_values(vec![1; 6], 0).unwrap());
}
