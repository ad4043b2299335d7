#![warn(missing_docs)]
//! The sequential optical system
//!
//! An [`OpticalSystem`] holds an ordered list of [`Element`]s together with their axial positions. The position of an
//! element is the accumulated reduced thickness of all gaps in front of it.
//! ```rust
//! use paraxial::{elements::{Gap, ThinLens}, millimeter, OpticalSystem};
//!
//! let mut system = OpticalSystem::default();
//! system
//!     .append_all([
//!         Gap::in_air(millimeter!(50.0)).unwrap().into(),
//!         ThinLens::new(millimeter!(100.0), millimeter!(20.0)).unwrap().into(),
//!         Gap::in_air(millimeter!(50.0)).unwrap().into(),
//!     ])
//!     .unwrap();
//! assert_eq!(system.positions()[1], millimeter!(50.0));
//! ```
use crate::{
    analyzers::{
        cardinal::{self, CardinalPlanes, CardinalPoints},
        raytrace, stop,
    },
    elements::{Element, ElementKind},
    error::{ParaxResult, ParaxialError},
    ray::{ParaxialRay, RayPoint},
};
use log::debug;
use num::Zero;
use uom::si::f64::Length;

/// An ordered sequence of [`Element`]s along a common optical axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpticalSystem {
    entries: Vec<(Length, Element)>,
    planes: Option<CardinalPlanes>,
}
/// Check the element sequence and compute the axial position of each element.
///
/// If more than one element carries the stop flag, only the last one keeps it.
fn layout(elements: Vec<Element>) -> ParaxResult<Vec<(Length, Element)>> {
    let nr_of_elements = elements.len();
    let mut entries = Vec::<(Length, Element)>::with_capacity(nr_of_elements);
    let mut position = Length::zero();
    for (idx, element) in elements.into_iter().enumerate() {
        element
            .validate()
            .map_err(|e| ParaxialError::InvalidElement(format!("element {idx}: {e}")))?;
        match element.kind() {
            ElementKind::Object if idx != 0 => {
                return Err(ParaxialError::InvalidElement(format!(
                    "object marker must be the first element (found at index {idx})"
                )));
            }
            ElementKind::Image if idx + 1 != nr_of_elements => {
                return Err(ParaxialError::InvalidElement(format!(
                    "image marker must be the last element (found at index {idx})"
                )));
            }
            _ => (),
        }
        if element.is_stop() {
            for (_, previous) in &mut entries {
                previous.set_stop(false);
            }
        }
        let advance = element.reduced_thickness();
        entries.push((position, element));
        position += advance;
        if !position.is_finite() {
            return Err(ParaxialError::Arithmetic(format!(
                "axial position behind element {idx} is not finite"
            )));
        }
    }
    Ok(entries)
}
impl OpticalSystem {
    /// Creates a new [`OpticalSystem`] from the given elements.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the elements is invalid (see [`OpticalSystem::append_all`]).
    pub fn new<I: IntoIterator<Item = Element>>(elements: I) -> ParaxResult<Self> {
        let mut system = Self::default();
        system.append_all(elements)?;
        Ok(system)
    }
    fn rebuild(&mut self, elements: Vec<Element>) -> ParaxResult<()> {
        self.entries = layout(elements)?;
        self.planes = None;
        Ok(())
    }
    fn element_list(&self) -> Vec<Element> {
        self.entries.iter().map(|(_, e)| *e).collect()
    }
    /// Append an [`Element`] to the end of this [`OpticalSystem`].
    ///
    /// The element is placed at the current accumulated reduced thickness. If it is a [`Gap`](crate::elements::Gap)
    /// the running position advances by its reduced thickness. If the element is flagged as stop, the flag of all other
    /// elements is cleared.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`] if
    ///   - the element parameters are invalid.
    ///   - an object marker is appended to a non-empty system.
    ///   - the system is already terminated by an image marker.
    ///
    /// It returns [`ParaxialError::Arithmetic`] if the accumulated axial position is no longer finite.
    pub fn append(&mut self, element: Element) -> ParaxResult<()> {
        self.append_all([element])
    }
    /// Append a list of [`Element`]s in the given order.
    ///
    /// This operation is atomic: if any element is invalid, the system is left unchanged.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the elements cannot be appended (see [`OpticalSystem::append`]).
    pub fn append_all<I: IntoIterator<Item = Element>>(&mut self, elements: I) -> ParaxResult<()> {
        let mut new_elements = self.element_list();
        new_elements.extend(elements);
        debug!(
            "append {} element(s) to optical system",
            new_elements.len() - self.entries.len()
        );
        self.rebuild(new_elements)
    }
    /// Insert an [`Element`] at the given index. The positions of all following elements are recomputed.
    ///
    /// # Errors
    ///
    /// This function returns an error if the index is out of range or the resulting sequence is invalid.
    pub fn insert(&mut self, index: usize, element: Element) -> ParaxResult<()> {
        if index > self.entries.len() {
            return Err(ParaxialError::InvalidElement(format!(
                "insertion index {index} out of range"
            )));
        }
        let mut elements = self.element_list();
        elements.insert(index, element);
        self.rebuild(elements)
    }
    /// Remove the [`Element`] at the given index. The positions of all following elements are recomputed.
    ///
    /// # Errors
    ///
    /// This function returns an error if the index is out of range.
    pub fn remove(&mut self, index: usize) -> ParaxResult<Element> {
        if index >= self.entries.len() {
            return Err(ParaxialError::InvalidElement(format!(
                "element index {index} out of range"
            )));
        }
        let mut elements = self.element_list();
        let removed = elements.remove(index);
        self.rebuild(elements)?;
        Ok(removed)
    }
    /// Replace the [`Element`] at the given index and return the old one.
    ///
    /// # Errors
    ///
    /// This function returns an error if the index is out of range or the new element is invalid at this place.
    pub fn replace(&mut self, index: usize, element: Element) -> ParaxResult<Element> {
        if index >= self.entries.len() {
            return Err(ParaxialError::InvalidElement(format!(
                "element index {index} out of range"
            )));
        }
        let mut elements = self.element_list();
        let replaced = std::mem::replace(&mut elements[index], element);
        self.rebuild(elements)?;
        Ok(replaced)
    }
    /// Returns the `(axial position, element)` pairs of this [`OpticalSystem`].
    #[must_use]
    pub fn entries(&self) -> &[(Length, Element)] {
        &self.entries
    }
    /// Returns an iterator over the elements of this [`OpticalSystem`].
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> + ExactSizeIterator {
        self.entries.iter().map(|(_, e)| e)
    }
    /// Returns the axial positions of all elements.
    #[must_use]
    pub fn positions(&self) -> Vec<Length> {
        self.entries.iter().map(|(p, _)| *p).collect()
    }
    /// Returns the [`Element`] at the given index.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.entries.get(index).map(|(_, e)| e)
    }
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns true if the system does not contain any element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Returns the total reduced length (sum of all reduced gap thicknesses) of this [`OpticalSystem`].
    #[must_use]
    pub fn total_reduced_length(&self) -> Length {
        self.elements()
            .map(Element::reduced_thickness)
            .fold(Length::zero(), |acc, t| acc + t)
    }
    /// Mark the element at the given index as aperture stop and clear the flag of all other elements.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::InvalidElement`] if the index is out of range or the element is neither
    /// a lens nor a stop.
    pub fn set_stop(&mut self, index: usize) -> ParaxResult<()> {
        let Some((_, element)) = self.entries.get(index) else {
            return Err(ParaxialError::InvalidElement(format!(
                "element index {index} out of range"
            )));
        };
        if !element.is_stop_candidate() {
            return Err(ParaxialError::InvalidElement(format!(
                "element {index} ({}) cannot be an aperture stop",
                element.kind()
            )));
        }
        for (idx, (_, element)) in self.entries.iter_mut().enumerate() {
            element.set_stop(idx == index);
        }
        Ok(())
    }
    /// Clear the aperture stop flag of all elements.
    pub fn clear_stop(&mut self) {
        for (_, element) in &mut self.entries {
            element.set_stop(false);
        }
    }
    /// Returns the index of the element currently marked as aperture stop.
    #[must_use]
    pub fn stop_index(&self) -> Option<usize> {
        self.elements().position(Element::is_stop)
    }
    /// Returns the mirrored system.
    ///
    /// The element order is reversed and object and image markers are swapped. Thin lenses keep their power since a
    /// thin lens acts identically from both sides.
    ///
    /// # Errors
    ///
    /// This function only returns an error if the element sequence of this system is inconsistent.
    pub fn reversed(&self) -> ParaxResult<Self> {
        let elements = self
            .elements()
            .rev()
            .map(|element| match *element {
                Element::Object(object) => Element::Image(object.into()),
                Element::Image(image) => Element::Object(image.into()),
                other => other,
            })
            .collect();
        let mut system = Self::default();
        system.rebuild(elements)?;
        Ok(system)
    }
    /// Trace the given ray through this system. See [`raytrace::trace`].
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::Arithmetic`] if the ray state becomes non-finite.
    pub fn trace_ray(&self, ray: &mut ParaxialRay) -> ParaxResult<RayPoint> {
        raytrace::trace(ray, self)
    }
    /// Calculate the [`CardinalPoints`] of this system.
    ///
    /// # Errors
    ///
    /// This function returns an error if the system has no power-bearing element or is afocal.
    pub fn cardinal_points(&self) -> ParaxResult<CardinalPoints> {
        CardinalPoints::new(self)
    }
    /// Calculate and store the vertex, principal and focal plane positions of this system.
    ///
    /// The stored planes are dropped on the next structural change of the system.
    ///
    /// # Errors
    ///
    /// This function returns an error if the planes cannot be calculated. In this case, previously stored planes are kept.
    pub fn add_planes(&mut self) -> ParaxResult<&CardinalPlanes> {
        let planes = cardinal::CardinalPlanes::new(self)?;
        Ok(&*self.planes.insert(planes))
    }
    /// Returns the planes stored by [`OpticalSystem::add_planes`].
    #[must_use]
    pub const fn planes(&self) -> Option<&CardinalPlanes> {
        self.planes.as_ref()
    }
    /// Determine the aperture stop of this system and mark it. Returns the index of the stop element.
    ///
    /// # Errors
    ///
    /// This function returns an error if no stop candidate exists or the marginal ray probe is degenerate.
    pub fn find_system_stop(&mut self) -> ParaxResult<usize> {
        stop::find_system_stop(self)
    }
}
