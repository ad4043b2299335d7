#![warn(missing_docs)]
//! Module for handling bundles of paraxial rays
use crate::{
    analyzers::raytrace,
    error::{ParaxResult, ParaxialError},
    ray::ParaxialRay,
    OpticalSystem,
};
use num::Zero;
use serde::Serialize;
use uom::si::f64::Length;

/// A bundle of [`ParaxialRay`]s, e.g. a ray fan.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Rays {
    rays: Vec<ParaxialRay>,
}
impl Rays {
    /// Create a bundle of rays parallel to the optical axis at the given heights, starting at axial position zero.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the heights is not finite.
    pub fn new_collimated(heights: &[Length]) -> ParaxResult<Self> {
        let rays = heights
            .iter()
            .map(|height| ParaxialRay::new(*height, 0.0))
            .collect::<ParaxResult<Vec<_>>>()?;
        Ok(Self { rays })
    }
    /// Create a fan of rays emerging from a single point at the given axial position and height.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidRay`] if
    ///   - no angle is given.
    ///   - the position, the height or one of the angles is not finite.
    pub fn new_fan(position: Length, height: Length, angles: &[f64]) -> ParaxResult<Self> {
        if angles.is_empty() {
            return Err(ParaxialError::InvalidRay(
                "a ray fan needs at least one angle".into(),
            ));
        }
        let rays = angles
            .iter()
            .map(|angle| ParaxialRay::new_at(position, height, *angle))
            .collect::<ParaxResult<Vec<_>>>()?;
        Ok(Self { rays })
    }
    /// Create a fan of rays from an axial object point at position zero.
    ///
    /// # Errors
    ///
    /// This function returns an error if no angle is given or one of the angles is not finite.
    pub fn new_axial_fan(angles: &[f64]) -> ParaxResult<Self> {
        Self::new_fan(Length::zero(), Length::zero(), angles)
    }
    /// Add a single [`ParaxialRay`] to this bundle.
    pub fn add_ray(&mut self, ray: ParaxialRay) {
        self.rays.push(ray);
    }
    /// Returns the number of rays in this bundle.
    #[must_use]
    pub fn nr_of_rays(&self) -> usize {
        self.rays.len()
    }
    /// Returns an iterator over the rays of this bundle.
    pub fn iter(&self) -> std::slice::Iter<'_, ParaxialRay> {
        self.rays.iter()
    }
    /// Trace all rays through the given system.
    ///
    /// Either all rays are traced successfully or the bundle stays unchanged.
    ///
    /// # Errors
    ///
    /// This function returns an error if the tracing of one of the rays fails.
    pub fn trace(&mut self, system: &OpticalSystem) -> ParaxResult<()> {
        let mut traced = self.rays.clone();
        for ray in &mut traced {
            raytrace::trace(ray, system)?;
        }
        self.rays = traced;
        Ok(())
    }
}
impl<'a> IntoIterator for &'a Rays {
    type Item = &'a ParaxialRay;
    type IntoIter = std::slice::Iter<'a, ParaxialRay>;

    fn into_iter(self) -> Self::IntoIter {
        self.rays.iter()
    }
}
impl From<Vec<ParaxialRay>> for Rays {
    fn from(rays: Vec<ParaxialRay>) -> Self {
        Self { rays }
    }
}
