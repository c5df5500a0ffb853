use triangular::data::linear_algebra::error::LinearAlgebraError;
use triangular::data::linear_algebra::MAX_MATRIX_SIZE;
use triangular::data::linear_algebra::matrix::TriangularMatrix;
use triangular::io::{ReadValues, Tokens};

/// Dimension 2 matrix read from its upper triangular values, row by row.
fn two_by_two(text: &str) -> TriangularMatrix<i32> {
    let mut matrix = TriangularMatrix::new(2).unwrap();
    matrix.read_values(&mut Tokens::new(text.as_bytes())).unwrap();
    matrix
}

#[test]
fn create() {
    assert!(TriangularMatrix::<i32>::new(5).is_ok());
    assert!(TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE + 1).is_err());
    assert!(TriangularMatrix::<i32>::new(0).is_err());
    assert_eq!(TriangularMatrix::<i8>::new(5).map(|m| m.dimension()), Ok(5));
}

#[test]
fn copy_has_own_memory() {
    let m = TriangularMatrix::<f64>::new(5).unwrap();
    let mut copy = m.clone();
    assert_eq!(m, copy);
    assert_ne!(&m[0] as *const _, &copy[0] as *const _);

    copy.set(0, 4, 1.5).unwrap();
    assert_eq!(m.get(0, 4), Ok(&0.0));
}

#[test]
fn out_of_range() {
    let m = TriangularMatrix::<f64>::new(10).unwrap();
    assert!(matches!(m.get(4, 0), Err(LinearAlgebraError::IndexOutOfRange { .. })));
    assert!(matches!(m.get(10, 10), Err(LinearAlgebraError::IndexOutOfRange { .. })));
}

#[test]
fn assign_to_equal_copy() {
    let mut m = TriangularMatrix::<f64>::new(10).unwrap();
    m.set(1, 1, 3.7).unwrap();
    m.set(9, 9, 7.3).unwrap();
    let same = m.clone();
    m.assign(&same);
    assert_eq!(m.get(1, 1), Ok(&3.7));
    assert_eq!(m.get(9, 9), Ok(&7.3));
}

#[test]
fn assign_different_dimension() {
    let mut first = TriangularMatrix::<i32>::new(7).unwrap();
    let mut second = TriangularMatrix::<i32>::new(18).unwrap();
    second.set(1, 3, 9).unwrap();
    first.assign(&second);
    assert_eq!(first.dimension(), 18);
    assert_eq!(first, second);
}

#[test]
fn arithmetic() {
    let first = two_by_two("1 3\n4");
    let second = two_by_two("4 9\n5");

    assert_eq!(first.try_add(&second), Ok(two_by_two("5 12\n9")));
    assert_eq!(first.try_sub(&second), Ok(two_by_two("-3 -6\n-1")));

    let other = TriangularMatrix::<i32>::new(7).unwrap();
    assert_ne!(first, other);
    assert!(first.try_add(&other).is_err());
    assert!(first.try_sub(&other).is_err());
}

#[test]
fn write() {
    assert_eq!(two_by_two("1 3 4").to_string(), "1 3 \n4 \n");
}
