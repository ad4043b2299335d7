#![warn(missing_docs)]
//! An ideal thin lens
use crate::{
    error::{ParaxResult, ParaxialError},
    matrix::{refraction_matrix, RayTransferMatrix},
};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// A thin (zero thickness) refracting element of a given focal length.
///
/// A positive focal length corresponds to a focussing lens, a negative one to a defocussing lens. The clear diameter
/// limits the axial beam and is used while searching the aperture stop of a system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThinLens {
    focal_length: Length,
    clear_diameter: Length,
    #[serde(default)]
    is_stop: bool,
}
impl ThinLens {
    /// Creates a new [`ThinLens`].
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`] if
    ///   - the focal length is zero or not finite.
    ///   - the clear diameter is negative or not finite.
    pub fn new(focal_length: Length, clear_diameter: Length) -> ParaxResult<Self> {
        let lens = Self {
            focal_length,
            clear_diameter,
            is_stop: false,
        };
        lens.validate()?;
        Ok(lens)
    }
    /// Check the parameters of this [`ThinLens`].
    ///
    /// # Errors
    ///
    /// This function returns an error if the focal length is zero / not finite or the clear diameter is negative / not finite.
    pub fn validate(&self) -> ParaxResult<()> {
        if self.focal_length.is_zero() || !self.focal_length.is_finite() {
            return Err(ParaxialError::InvalidElement(
                "focal length must be != 0.0 and finite".into(),
            ));
        }
        if self.clear_diameter.is_sign_negative() || !self.clear_diameter.is_finite() {
            return Err(ParaxialError::InvalidElement(
                "clear diameter must be >= 0.0 and finite".into(),
            ));
        }
        Ok(())
    }
    /// Returns the focal length of this [`ThinLens`].
    #[must_use]
    pub const fn focal_length(&self) -> Length {
        self.focal_length
    }
    /// Returns the clear diameter of this [`ThinLens`].
    #[must_use]
    pub const fn clear_diameter(&self) -> Length {
        self.clear_diameter
    }
    /// Returns the optical power of this [`ThinLens`] in diopters (1/m).
    #[must_use]
    pub fn power(&self) -> f64 {
        1.0 / self.focal_length.value
    }
    /// Returns true if this [`ThinLens`] is marked as aperture stop.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        self.is_stop
    }
    pub(crate) fn set_stop(&mut self, is_stop: bool) {
        self.is_stop = is_stop;
    }
    /// Returns the refraction matrix of this [`ThinLens`].
    #[must_use]
    pub fn refraction_matrix(&self) -> RayTransferMatrix {
        refraction_matrix(self.power())
    }
}
