//! Object and image markers delimiting object and image space
use crate::error::{ParaxResult, ParaxialError};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

fn validate_height(height: Option<Length>) -> ParaxResult<()> {
    if height.is_some_and(|h| !h.is_finite()) {
        return Err(ParaxialError::InvalidElement(
            "marker height must be finite".into(),
        ));
    }
    Ok(())
}
/// Marks the object plane. Must be the first element of a system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectMarker {
    #[serde(default)]
    height: Option<Length>,
}
impl ObjectMarker {
    /// Creates a new [`ObjectMarker`] with an optional object height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the given height is not finite.
    pub fn new(height: Option<Length>) -> ParaxResult<Self> {
        validate_height(height)?;
        Ok(Self { height })
    }
    /// Returns the object height.
    #[must_use]
    pub const fn height(&self) -> Option<Length> {
        self.height
    }
    /// Check the object height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the height is not finite.
    pub fn validate(&self) -> ParaxResult<()> {
        validate_height(self.height)
    }
}
/// Marks the image plane. Must be the last element of a system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageMarker {
    #[serde(default)]
    height: Option<Length>,
}
impl ImageMarker {
    /// Creates a new [`ImageMarker`] with an optional image height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the given height is not finite.
    pub fn new(height: Option<Length>) -> ParaxResult<Self> {
        validate_height(height)?;
        Ok(Self { height })
    }
    /// Returns the image height.
    #[must_use]
    pub const fn height(&self) -> Option<Length> {
        self.height
    }
    /// Check the image height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the height is not finite.
    pub fn validate(&self) -> ParaxResult<()> {
        validate_height(self.height)
    }
}
impl From<ObjectMarker> for ImageMarker {
    fn from(object: ObjectMarker) -> Self {
        Self {
            height: object.height,
        }
    }
}
impl From<ImageMarker> for ObjectMarker {
    fn from(image: ImageMarker) -> Self {
        Self {
            height: image.height,
        }
    }
}
