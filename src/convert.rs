// =============================================================================
// ndarray ↔ nalgebra Conversion
// =============================================================================
//
// Array storage and all iteration math use ndarray; the closed-form network
// ridge solver needs dense factorizations, which nalgebra provides. This
// module holds the bridge so the conversion loops live in exactly one place.
//
// =============================================================================

use nalgebra::DMatrix;
use ndarray::Array2;

/// Convert an ndarray Array2 to a nalgebra DMatrix.
///
/// Handles non-contiguous arrays by making a contiguous copy first.
#[inline]
pub fn to_dmatrix(a: &Array2<f64>) -> DMatrix<f64> {
    let (nrows, ncols) = (a.nrows(), a.ncols());
    let contig = if a.is_standard_layout() {
        a.clone()
    } else {
        a.as_standard_layout().to_owned()
    };
    DMatrix::from_row_slice(nrows, ncols, contig.as_slice().unwrap())
}

/// Convert a nalgebra DMatrix to an ndarray Array2.
#[inline]
pub fn to_array2(m: &DMatrix<f64>) -> Array2<f64> {
    let (nrows, ncols) = m.shape();
    Array2::from_shape_fn((nrows, ncols), |(i, j)| m[(i, j)])
}

/// Solve the symmetric system AX = B for a matrix right-hand side.
///
/// Tries Cholesky first (A is positive-definite in the intended use), falls
/// back to LU. Returns None if the system is singular.
pub fn solve_symmetric_system(a: &Array2<f64>, b: &Array2<f64>) -> Option<Array2<f64>> {
    let a_nalg = to_dmatrix(a);
    let b_nalg = to_dmatrix(b);

    if let Some(chol) = a_nalg.clone().cholesky() {
        return Some(to_array2(&chol.solve(&b_nalg)));
    }

    a_nalg.lu().solve(&b_nalg).map(|x| to_array2(&x))
}

// =============================================================================
// Tests
// =============================================================================
