#![warn(missing_docs)]
//! A non-refracting aperture
use crate::error::{ParaxResult, ParaxialError};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// A circular aperture (diaphragm) of a given clear diameter without optical power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    clear_diameter: Length,
    #[serde(default)]
    is_stop: bool,
}
impl Stop {
    /// Creates a new [`Stop`].
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`] if the clear diameter is negative or not finite.
    pub fn new(clear_diameter: Length) -> ParaxResult<Self> {
        let stop = Self {
            clear_diameter,
            is_stop: false,
        };
        stop.validate()?;
        Ok(stop)
    }
    /// Check the parameters of this [`Stop`].
    ///
    /// # Errors
    ///
    /// This function returns an error if the clear diameter is negative or not finite.
    pub fn validate(&self) -> ParaxResult<()> {
        if self.clear_diameter.is_sign_negative() || !self.clear_diameter.is_finite() {
            return Err(ParaxialError::InvalidElement(
                "clear diameter must be >= 0.0 and finite".into(),
            ));
        }
        Ok(())
    }
    /// Returns the clear diameter of this [`Stop`].
    #[must_use]
    pub const fn clear_diameter(&self) -> Length {
        self.clear_diameter
    }
    /// Returns true if this [`Stop`] is marked as aperture stop of its system.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        self.is_stop
    }
    pub(crate) fn set_stop(&mut self, is_stop: bool) {
        self.is_stop = is_stop;
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    #[test]
    fn new() {
        let stop = Stop::new(millimeter!(5.0)).unwrap();
        assert_eq!(stop.clear_diameter(), millimeter!(5.0));
        assert!(!stop.is_stop());
        assert!(Stop::new(millimeter!(0.0)).is_ok());
        assert!(Stop::new(millimeter!(-0.1)).is_err());
        assert!(Stop::new(millimeter!(f64::NAN)).is_err());
        assert!(Stop::new(millimeter!(f64::INFINITY)).is_err());
    }
}
