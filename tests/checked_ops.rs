//! Checked vector/matrix arithmetic: algebraic identities, equality, and
//! precondition failures under the strict policy.
//!
//! The identity tests are randomized over integer elements so the roundtrips
//! hold exactly; the floating-point roundtrips compare within an absolute
//! tolerance.

use approx::assert_abs_diff_eq;
use ergodic::{Matrix, Unchecked, Vector};
use rand::Rng;

fn random_ivec(dim: usize) -> Vector<i32> {
    let mut rng = rand::thread_rng();
    (0..dim).map(|_| rng.gen_range(-1000..=1000)).collect()
}

#[test]
fn add_then_subtract_roundtrip() {
    for dim in 1..=20 {
        let x = random_ivec(dim);
        let y = random_ivec(dim);
        assert_eq!((&x + &y) - &y, x);
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = rand::thread_rng();
    for dim in 1..=20 {
        let x = random_ivec(dim);
        let a: i32 = rng.gen_range(-1000..=1000);
        assert_eq!(a * &x, &x * a);
    }
}

#[test]
fn scale_then_divide_roundtrip() {
    let mut rng = rand::thread_rng();
    for dim in 1..=20 {
        let x: Vector<f64> = (0..dim).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let a = rng.gen_range(0.5..4.0);
        let y = (&x * a) / a;
        for (yi, xi) in y.iter().zip(x.iter()) {
            assert_abs_diff_eq!(*yi, *xi, epsilon = 1e-12);
        }
    }
}

#[test]
fn compound_and_binary_forms_agree() {
    let x = random_ivec(8);
    let y = random_ivec(8);

    let z1 = &x + &y;
    let mut z2 = x.clone();
    z2 += &y;
    assert_eq!(z1, z2);

    for (zi, (xi, yi)) in z1.iter().zip(x.iter().zip(y.iter())) {
        assert_eq!(*zi, xi + yi);
    }
}

#[test]
fn division_by_non_zero_is_elementwise() {
    let x = Vector::<i32>::from([9, -6, 3, 0]);
    let y = &x / -3;
    assert_eq!(y.as_slice(), &[-3, 2, -1, 0]);
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_panics() {
    let x = Vector::<i32>::from([1, 2, 3]);
    let _ = x / 0;
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn vector_add_dimension_mismatch_panics() {
    let x = Vector::<i32>::zeros(3);
    let y = Vector::<i32>::zeros(4);
    let _ = x + y;
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn vector_add_assign_dimension_mismatch_panics() {
    let mut x = Vector::<i32>::zeros(3);
    let y = Vector::<i32>::zeros(4);
    x += y;
}

#[test]
#[should_panic(expected = "out of range")]
fn vector_index_out_of_range_panics() {
    let x = Vector::<i32>::zeros(3);
    let _ = x[3];
}

#[test]
fn vector_equality_is_dimension_sensitive() {
    let x = Vector::<i32>::from([1, 2, 3]);
    assert_eq!(x, x);
    assert_eq!(x, x.clone());

    // differing dimensions are unequal, never an error
    let shorter = Vector::<i32>::from([1, 2]);
    assert_ne!(x, shorter);

    let mut y = x.clone();
    y[1] = 0;
    assert_ne!(x, y);
}

#[test]
fn matrix_addition_and_scalar_ops() {
    let a = Matrix::<i32>::from_rows([[1, 2], [3, 4]]);
    let b = Matrix::<i32>::from_rows([[10, 20], [30, 40]]);

    let sum = &a + &b;
    assert_eq!(sum, Matrix::from_rows([[11, 22], [33, 44]]));
    assert_eq!((&sum - &b), a);

    assert_eq!(2 * &a, &a * 2);
    assert_eq!(&a * 2, Matrix::from_rows([[2, 4], [6, 8]]));
    assert_eq!(Matrix::from_rows([[2, 4], [6, 8]]) / 2, a);
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn matrix_shape_mismatch_panics() {
    let a = Matrix::<i32>::zeros(2, 3);
    let b = Matrix::<i32>::zeros(3, 2);
    let _ = a + b;
}

#[test]
#[should_panic(expected = "out of range")]
fn matrix_entry_out_of_range_panics() {
    let a = Matrix::<i32>::zeros(2, 3);
    let _ = a[(2, 0)];
}

#[test]
fn matrix_vector_product_matches_manual_sum() {
    let mut rng = rand::thread_rng();
    let a = Matrix::<i32>::from_fn(2, 3, |_, _| rng.gen_range(-20..=20));
    let x: Vector<i32> = (0..3).map(|_| rng.gen_range(-20..=20)).collect();

    let y = &a * &x;
    assert_eq!(y.dim(), 2);
    for i in 0..2 {
        let expected = (0..3).map(|j| a[(i, j)] * x[j]).sum::<i32>();
        assert_eq!(y[i], expected);
    }
}

#[test]
fn unchecked_policy_supports_valid_operations() {
    let x = Vector::<f64, Unchecked>::from([1.0, 2.0]);
    let y = Vector::<f64, Unchecked>::from([0.5, -0.5]);
    assert_eq!((&x + &y).as_slice(), &[1.5, 1.5]);

    let a = Matrix::<f64, Unchecked>::from_rows([[2.0, 0.0], [0.0, 2.0]]);
    assert_eq!((&a * &x).as_slice(), &[2.0, 4.0]);
}
