#![warn(missing_docs)]
//! The elements an [`OpticalSystem`](crate::OpticalSystem) is built from.
//!
//! Each element kind is a variant of the [`Element`] sum type. Behavior that differs between kinds (free propagation,
//! refraction or no action at all) is dispatched by matching on the variant.
//! ```rust
//! use paraxial::elements::{Element, Gap, ThinLens};
//! use paraxial::millimeter;
//!
//! let gap: Element = Gap::in_air(millimeter!(50.0)).unwrap().into();
//! let lens: Element = ThinLens::new(millimeter!(100.0), millimeter!(20.0)).unwrap().into();
//! assert_eq!(gap.reduced_thickness(), millimeter!(50.0));
//! assert_eq!(lens.power(), 10.0);
//! ```
mod gap;
mod marker;
mod stop;
mod thin_lens;

pub use gap::Gap;
pub use marker::{ImageMarker, ObjectMarker};
pub use stop::Stop;
pub use thin_lens::ThinLens;

use crate::{
    error::ParaxResult,
    matrix::{refraction_matrix, RayTransferMatrix},
};
use nalgebra::Matrix2;
use num::Zero;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use uom::si::f64::Length;

/// The kind of an [`Element`] without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    /// free space propagation
    Gap,
    /// thin refracting lens
    ThinLens,
    /// non-refracting aperture
    Stop,
    /// object plane marker
    Object,
    /// image plane marker
    Image,
}

/// A single element of a sequential optical system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// an axial gap
    Gap(Gap),
    /// a thin lens
    ThinLens(ThinLens),
    /// an aperture without power
    Stop(Stop),
    /// the object plane
    Object(ObjectMarker),
    /// the image plane
    Image(ImageMarker),
}
impl Element {
    /// Returns the [`ElementKind`] of this [`Element`].
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Gap(_) => ElementKind::Gap,
            Self::ThinLens(_) => ElementKind::ThinLens,
            Self::Stop(_) => ElementKind::Stop,
            Self::Object(_) => ElementKind::Object,
            Self::Image(_) => ElementKind::Image,
        }
    }
    /// Check the parameters of this [`Element`].
    ///
    /// This is necessary for elements which were not created by their respective constructor (e.g. deserialized ones).
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`](crate::error::ParaxialError::InvalidElement) if the
    /// parameters are out of range.
    pub fn validate(&self) -> ParaxResult<()> {
        match self {
            Self::Gap(gap) => gap.validate(),
            Self::ThinLens(lens) => lens.validate(),
            Self::Stop(stop) => stop.validate(),
            Self::Object(object) => object.validate(),
            Self::Image(image) => image.validate(),
        }
    }
    /// Returns the axial advance caused by this [`Element`].
    ///
    /// This is the reduced thickness for a [`Gap`] and zero for all other elements.
    #[must_use]
    pub fn reduced_thickness(&self) -> Length {
        match self {
            Self::Gap(gap) => gap.reduced_thickness(),
            Self::ThinLens(_) | Self::Stop(_) | Self::Object(_) | Self::Image(_) => Length::zero(),
        }
    }
    /// Returns the optical power (in diopters) of this [`Element`].
    #[must_use]
    pub fn power(&self) -> f64 {
        match self {
            Self::ThinLens(lens) => lens.power(),
            Self::Gap(_) | Self::Stop(_) | Self::Object(_) | Self::Image(_) => 0.0,
        }
    }
    /// Returns true if this [`Element`] refracts light.
    #[must_use]
    pub const fn has_power(&self) -> bool {
        matches!(self, Self::ThinLens(_))
    }
    /// Returns true if this [`Element`] could limit the axial beam (lenses and stops).
    #[must_use]
    pub const fn is_stop_candidate(&self) -> bool {
        matches!(self, Self::ThinLens(_) | Self::Stop(_))
    }
    /// Returns the clear diameter of lenses and stops.
    #[must_use]
    pub const fn clear_diameter(&self) -> Option<Length> {
        match self {
            Self::ThinLens(lens) => Some(lens.clear_diameter()),
            Self::Stop(stop) => Some(stop.clear_diameter()),
            Self::Gap(_) | Self::Object(_) | Self::Image(_) => None,
        }
    }
    /// Returns true if this [`Element`] is marked as aperture stop.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        match self {
            Self::ThinLens(lens) => lens.is_stop(),
            Self::Stop(stop) => stop.is_stop(),
            Self::Gap(_) | Self::Object(_) | Self::Image(_) => false,
        }
    }
    /// Set or clear the aperture stop flag. Returns false if this element cannot be a stop.
    pub(crate) fn set_stop(&mut self, is_stop: bool) -> bool {
        match self {
            Self::ThinLens(lens) => lens.set_stop(is_stop),
            Self::Stop(stop) => stop.set_stop(is_stop),
            Self::Gap(_) | Self::Object(_) | Self::Image(_) => return false,
        }
        true
    }
    /// Returns the ray transfer matrix of this [`Element`].
    ///
    /// A [`Gap`] returns its transfer matrix, lenses and stops return their refraction matrix while markers act as identity.
    #[must_use]
    pub fn matrix(&self) -> RayTransferMatrix {
        match self {
            Self::Gap(gap) => gap.transfer_matrix(),
            Self::ThinLens(lens) => lens.refraction_matrix(),
            Self::Stop(_) => refraction_matrix(0.0),
            Self::Object(_) | Self::Image(_) => Matrix2::identity(),
        }
    }
}
impl From<Gap> for Element {
    fn from(gap: Gap) -> Self {
        Self::Gap(gap)
    }
}
impl From<ThinLens> for Element {
    fn from(lens: ThinLens) -> Self {
        Self::ThinLens(lens)
    }
}
impl From<Stop> for Element {
    fn from(stop: Stop) -> Self {
        Self::Stop(stop)
    }
}
impl From<ObjectMarker> for Element {
    fn from(object: ObjectMarker) -> Self {
        Self::Object(object)
    }
}
impl From<ImageMarker> for Element {
    fn from(image: ImageMarker) -> Self {
        Self::Image(image)
    }
}
