#![warn(missing_docs)]
//! Ray transfer (ABCD) matrices of first-order optics
//!
//! All matrices act on column vectors `(height, angle)` with the height given in meters (SI base unit) and the angle
//! as paraxial slope. Hence, the `B` element of a matrix carries the unit meter while the `C` element is given in
//! diopters (1/m).
use crate::error::{ParaxResult, ParaxialError};
use nalgebra::{Matrix2, Vector2};
use uom::si::f64::Length;

/// A 2x2 ray transfer matrix `[[A, B], [C, D]]`.
pub type RayTransferMatrix = Matrix2<f64>;

/// Matrix of a free propagation over the given reduced thickness.
#[must_use]
pub fn transfer_matrix(reduced_thickness: Length) -> RayTransferMatrix {
    Matrix2::new(1.0, reduced_thickness.value, 0.0, 1.0)
}
/// Matrix of a refraction at a thin element with the given optical power (in diopters).
#[must_use]
pub fn refraction_matrix(power: f64) -> RayTransferMatrix {
    Matrix2::new(1.0, 0.0, -power, 1.0)
}
/// Apply the matrix to a `(height, angle)` state.
///
/// # Errors
///
/// This function returns [`ParaxialError::Arithmetic`] if the resulting state contains `NaN` or infinite values.
pub fn apply(matrix: &RayTransferMatrix, height: f64, angle: f64) -> ParaxResult<(f64, f64)> {
    let state = matrix * Vector2::new(height, angle);
    if !state.x.is_finite() || !state.y.is_finite() {
        return Err(ParaxialError::Arithmetic(format!(
            "ray state ({height}, {angle}) became non-finite ({}, {})",
            state.x, state.y
        )));
    }
    Ok((state.x, state.y))
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    #[test]
    fn transfer() {
        let m = transfer_matrix(millimeter!(50.0));
        assert_eq!(m[(0, 0)], 1.0);
        assert_abs_diff_eq!(m[(0, 1)], 0.05);
        assert_eq!(m[(1, 0)], 0.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_abs_diff_eq!(m.determinant(), 1.0);
    }
    #[test]
    fn refraction() {
        let m = refraction_matrix(10.0);
        assert_eq!(m, Matrix2::new(1.0, 0.0, -10.0, 1.0));
        assert_abs_diff_eq!(m.determinant(), 1.0);
    }
    #[test]
    fn apply_transfer() {
        let (y, u) = apply(&transfer_matrix(millimeter!(100.0)), 0.0, 0.01).unwrap();
        assert_abs_diff_eq!(y, 0.001);
        assert_eq!(u, 0.01);
    }
    #[test]
    fn apply_non_finite() {
        let m = refraction_matrix(f64::INFINITY);
        assert_matches!(apply(&m, 1.0, 0.0), Err(ParaxialError::Arithmetic(_)));
        assert_matches!(
            apply(&transfer_matrix(millimeter!(1.0)), f64::NAN, 0.0),
            Err(ParaxialError::Arithmetic(_))
        );
    }
}
