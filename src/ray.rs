#![warn(missing_docs)]
//! Module for handling paraxial rays
use std::fmt::Display;

use crate::error::{ParaxResult, ParaxialError};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::millimeter};

/// Angle (paraxial slope) of the synthetic marginal ray used for finding the aperture stop.
pub const MARGINAL_PROBE_ANGLE: f64 = 1.0e-3;

/// The state of a paraxial ray at a given axial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayPoint {
    /// axial (reduced) position
    pub position: Length,
    /// height above the optical axis
    pub height: Length,
    /// paraxial angle (slope)
    pub angle: f64,
}
impl RayPoint {
    /// Creates a new [`RayPoint`].
    #[must_use]
    pub const fn new(position: Length, height: Length, angle: f64) -> Self {
        Self {
            position,
            height,
            angle,
        }
    }
}
impl Display for RayPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pos: {:.3} mm, y: {:.3} mm, u: {:.6}",
            self.position.get::<millimeter>(),
            self.height.get::<millimeter>(),
            self.angle
        )
    }
}

/// A ray in the paraxial approximation.
///
/// The ray is described by its height above the optical axis and its angle. While being traced through an
/// [`OpticalSystem`](crate::OpticalSystem), the ray records its state after each gap. The first entry of this
/// position history is always the initial state of the ray.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParaxialRay {
    pos_hist: Vec<RayPoint>,
}
impl ParaxialRay {
    /// Creates a new [`ParaxialRay`] starting at axial position zero.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidRay`] if the height or the angle are not finite.
    pub fn new(height: Length, angle: f64) -> ParaxResult<Self> {
        Self::new_at(Length::zero(), height, angle)
    }
    /// Creates a new [`ParaxialRay`] starting at the given axial position.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidRay`] if the position, the height or the angle are not finite.
    pub fn new_at(position: Length, height: Length, angle: f64) -> ParaxResult<Self> {
        if !position.is_finite() {
            return Err(ParaxialError::InvalidRay("ray position must be finite".into()));
        }
        if !height.is_finite() {
            return Err(ParaxialError::InvalidRay("ray height must be finite".into()));
        }
        if !angle.is_finite() {
            return Err(ParaxialError::InvalidRay("ray angle must be finite".into()));
        }
        let mut pos_hist = Vec::<RayPoint>::with_capacity(16);
        pos_hist.push(RayPoint::new(position, height, angle));
        Ok(Self { pos_hist })
    }
    /// Creates the axial marginal ray probe: height zero and a small angle ([`MARGINAL_PROBE_ANGLE`]) starting at the given position.
    #[must_use]
    pub fn marginal_probe(position: Length) -> Self {
        Self {
            pos_hist: vec![RayPoint::new(position, Length::zero(), MARGINAL_PROBE_ANGLE)],
        }
    }
    /// Returns the initial state of this [`ParaxialRay`].
    #[must_use]
    pub fn initial_state(&self) -> RayPoint {
        self.pos_hist[0]
    }
    /// Returns the latest recorded state of this [`ParaxialRay`].
    #[must_use]
    pub fn final_state(&self) -> RayPoint {
        self.pos_hist[self.pos_hist.len() - 1]
    }
    /// Returns the current height of this [`ParaxialRay`].
    #[must_use]
    pub fn height(&self) -> Length {
        self.final_state().height
    }
    /// Returns the current angle of this [`ParaxialRay`].
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.final_state().angle
    }
    /// Returns the recorded states of this [`ParaxialRay`] (initial state first).
    #[must_use]
    pub fn position_history(&self) -> &[RayPoint] {
        &self.pos_hist
    }
    /// Append the given states to the recorded history. Earlier states are never modified.
    pub(crate) fn record(&mut self, points: Vec<RayPoint>) {
        self.pos_hist.extend(points);
    }
}
impl Display for ParaxialRay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.final_state();
        write!(
            f,
            "ParaxialRay {{ {state}, recorded points: {} }}",
            self.pos_hist.len()
        )
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use assert_matches::assert_matches;
    #[test]
    fn new() {
        let ray = ParaxialRay::new(millimeter!(10.0), 0.1).unwrap();
        assert_eq!(ray.position_history().len(), 1);
        assert_eq!(
            ray.initial_state(),
            RayPoint::new(Length::zero(), millimeter!(10.0), 0.1)
        );
        assert_eq!(ray.height(), millimeter!(10.0));
        assert_eq!(ray.angle(), 0.1);
        assert!(ParaxialRay::new(millimeter!(f64::NAN), 0.0).is_err());
        assert!(ParaxialRay::new(millimeter!(f64::INFINITY), 0.0).is_err());
        assert!(ParaxialRay::new(millimeter!(1.0), f64::NAN).is_err());
        assert!(ParaxialRay::new(millimeter!(1.0), f64::NEG_INFINITY).is_err());
    }
    #[test]
    fn new_at() {
        let ray = ParaxialRay::new_at(millimeter!(-20.0), millimeter!(1.0), 0.0).unwrap();
        assert_eq!(ray.initial_state().position, millimeter!(-20.0));
        assert_matches!(
            ParaxialRay::new_at(millimeter!(f64::NAN), millimeter!(1.0), 0.0),
            Err(ParaxialError::InvalidRay(_))
        );
    }
    #[test]
    fn marginal_probe() {
        let ray = ParaxialRay::marginal_probe(millimeter!(0.0));
        assert!(ray.height().is_zero());
        assert_eq!(ray.angle(), MARGINAL_PROBE_ANGLE);
    }
    #[test]
    fn record_appends() {
        let mut ray = ParaxialRay::new(millimeter!(1.0), 0.0).unwrap();
        ray.record(vec![
            RayPoint::new(millimeter!(10.0), millimeter!(1.0), 0.0),
            RayPoint::new(millimeter!(20.0), millimeter!(1.0), 0.0),
        ]);
        assert_eq!(ray.position_history().len(), 3);
        assert_eq!(ray.final_state().position, millimeter!(20.0));
        ray.record(vec![RayPoint::new(millimeter!(5.0), millimeter!(1.0), 0.0)]);
        assert_eq!(ray.position_history().len(), 4);
        assert_eq!(ray.position_history()[2].position, millimeter!(20.0));
        assert_eq!(ray.final_state().position, millimeter!(5.0));
        assert_eq!(
            ray.initial_state(),
            RayPoint::new(Length::zero(), millimeter!(1.0), 0.0)
        );
    }
    #[test]
    fn display() {
        let ray = ParaxialRay::new(millimeter!(10.0), 0.1).unwrap();
        assert_eq!(
            format!("{ray}"),
            "ParaxialRay { pos: 0.000 mm, y: 10.000 mm, u: 0.100000, recorded points: 1 }"
        );
    }
}
