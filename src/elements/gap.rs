#![warn(missing_docs)]
//! Free-space gap (thickness) between two elements
use crate::{
    error::{ParaxResult, ParaxialError},
    matrix::{transfer_matrix, RayTransferMatrix},
};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// An axial gap of a given (physical) thickness filled with a homogeneous medium.
///
/// For paraxial propagation only the reduced thickness `t / n` is relevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    thickness: Length,
    refractive_index: f64,
}
impl Gap {
    /// Creates a new [`Gap`].
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`] if
    ///   - the thickness is <= 0.0 or not finite.
    ///   - the refractive index is <= 0.0 or not finite.
    ///   - the reduced thickness `t / n` overflows.
    pub fn new(thickness: Length, refractive_index: f64) -> ParaxResult<Self> {
        let gap = Self {
            thickness,
            refractive_index,
        };
        gap.validate()?;
        Ok(gap)
    }
    /// Creates a new [`Gap`] in air (refractive index 1.0).
    ///
    /// # Errors
    ///
    /// This function returns an error if the thickness is <= 0.0 or not finite.
    pub fn in_air(thickness: Length) -> ParaxResult<Self> {
        Self::new(thickness, 1.0)
    }
    /// Check the parameters of this [`Gap`].
    ///
    /// # Errors
    ///
    /// This function returns an error if the thickness or the refractive index is not positive and finite or if the
    /// reduced thickness is not finite.
    pub fn validate(&self) -> ParaxResult<()> {
        if self.thickness <= Length::zero() || !self.thickness.is_finite() {
            return Err(ParaxialError::InvalidElement(
                "thickness must be > 0.0 and finite".into(),
            ));
        }
        if self.refractive_index <= 0.0 || !self.refractive_index.is_finite() {
            return Err(ParaxialError::InvalidElement(
                "refractive index must be > 0.0 and finite".into(),
            ));
        }
        if !self.reduced_thickness().is_finite() {
            return Err(ParaxialError::InvalidElement(
                "reduced thickness (thickness / refractive index) must be finite".into(),
            ));
        }
        Ok(())
    }
    /// Returns the physical thickness of this [`Gap`].
    #[must_use]
    pub const fn thickness(&self) -> Length {
        self.thickness
    }
    /// Returns the refractive index of the medium of this [`Gap`].
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the reduced thickness (`t / n`).
    #[must_use]
    pub fn reduced_thickness(&self) -> Length {
        self.thickness / self.refractive_index
    }
    /// Returns the optical path length (`t * n`) through this [`Gap`].
    #[must_use]
    pub fn optical_path_length(&self) -> Length {
        self.thickness * self.refractive_index
    }
    /// Returns the transfer matrix of this [`Gap`].
    #[must_use]
    pub fn transfer_matrix(&self) -> RayTransferMatrix {
        transfer_matrix(self.reduced_thickness())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use uom::si::length::millimeter;
    #[test]
    fn new() {
        let gap = Gap::new(millimeter!(30.0), 1.5).unwrap();
        assert_eq!(gap.thickness(), millimeter!(30.0));
        assert_eq!(gap.refractive_index(), 1.5);
        assert!(Gap::new(millimeter!(0.0), 1.0).is_err());
        assert!(Gap::new(millimeter!(-1.0), 1.0).is_err());
        assert!(Gap::new(millimeter!(f64::NAN), 1.0).is_err());
        assert!(Gap::new(millimeter!(f64::INFINITY), 1.0).is_err());
        assert!(Gap::new(millimeter!(1.0), 0.0).is_err());
        assert!(Gap::new(millimeter!(1.0), -1.5).is_err());
        assert!(Gap::new(millimeter!(1.0), f64::NAN).is_err());
        assert_matches!(
            Gap::new(millimeter!(1.0), f64::INFINITY),
            Err(ParaxialError::InvalidElement(_))
        );
    }
    #[test]
    fn reduced_thickness_overflow() {
        assert_matches!(
            Gap::new(millimeter!(1.0e300), 1.0e-300),
            Err(ParaxialError::InvalidElement(_))
        );
        assert!(Gap::new(millimeter!(1.0e300), 1.0).is_ok());
    }
    #[test]
    fn in_air() {
        let gap = Gap::in_air(millimeter!(10.0)).unwrap();
        assert_eq!(gap.refractive_index(), 1.0);
        assert_eq!(gap.reduced_thickness(), gap.thickness());
    }
    #[test]
    fn reduced_thickness() {
        let gap = Gap::new(millimeter!(30.0), 1.5).unwrap();
        assert_relative_eq!(gap.reduced_thickness().get::<millimeter>(), 20.0, max_relative = 1e-12);
        assert_relative_eq!(gap.optical_path_length().get::<millimeter>(), 45.0, max_relative = 1e-12);
    }
    #[test]
    fn matrix() {
        let gap = Gap::new(millimeter!(30.0), 1.5).unwrap();
        let m = gap.transfer_matrix();
        assert_relative_eq!(m[(0, 1)], 0.02, max_relative = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, max_relative = 1e-12);
    }
}
