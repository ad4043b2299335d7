#![warn(missing_docs)]
//! Lens prescription documents
//!
//! A [`Prescription`] holds the ordered element list of an optical system together with a set of input rays. This module
//! also handles reading and writing of prescription (YAML) files. All lengths are stored in meters.
//!
//! Example of a prescription file:
//! ```yaml
//! file_version: '0.1'
//! description: single lens
//! elements:
//! - !Gap
//!   thickness: 0.05
//!   refractive_index: 1.0
//! - !ThinLens
//!   focal_length: 0.1
//!   clear_diameter: 0.02
//! - !Gap
//!   thickness: 0.05
//!   refractive_index: 1.0
//! rays:
//! - height: 0.01
//!   angle: 0.0
//! ```
use crate::{
    analyzers::{Analyzer, AnalyzerType, CardinalAnalyzer, RayTracingAnalyzer, StopAnalyzer},
    elements::Element,
    error::{ParaxResult, ParaxialError},
    ray::ParaxialRay,
    rays::Rays,
    reporter::AnalysisReport,
    OpticalSystem,
};
use log::{info, warn};
use num::Zero;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use uom::si::f64::Length;

/// Version of the prescription file format written by this crate.
pub const PRESCRIPTION_FILE_VERSION: &str = "0.1";

fn zero_length() -> Length {
    Length::zero()
}
/// Definition of an input ray of a [`Prescription`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayDefinition {
    /// axial start position (defaults to zero)
    #[serde(default = "zero_length")]
    pub position: Length,
    /// initial height above the optical axis
    pub height: Length,
    /// initial paraxial angle (slope) in radians
    #[serde(default)]
    pub angle: f64,
}
impl RayDefinition {
    /// Create a new [`RayDefinition`].
    #[must_use]
    pub const fn new(position: Length, height: Length, angle: f64) -> Self {
        Self {
            position,
            height,
            angle,
        }
    }
}
impl TryFrom<&RayDefinition> for ParaxialRay {
    type Error = ParaxialError;

    fn try_from(definition: &RayDefinition) -> ParaxResult<Self> {
        Self::new_at(definition.position, definition.height, definition.angle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A lens prescription: the element sequence of an optical system and a list of input rays.
pub struct Prescription {
    file_version: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    rays: Vec<RayDefinition>,
}
impl Default for Prescription {
    fn default() -> Self {
        Self {
            file_version: PRESCRIPTION_FILE_VERSION.to_string(),
            description: String::default(),
            elements: Vec::default(),
            rays: Vec::default(),
        }
    }
}
impl Prescription {
    /// Creates a new (empty) [`Prescription`] with the given description.
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_owned(),
            ..Default::default()
        }
    }
    /// Create a new [`Prescription`] from a file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> ParaxResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ParaxialError::Prescription(format!("cannot read file {} : {}", path.display(), e))
        })?;
        info!("Read prescription file {}", path.display());
        Self::from_string(&contents)
    }
    /// Create a new [`Prescription`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(file_string: &str) -> ParaxResult<Self> {
        let prescription: Self = serde_yaml::from_str(file_string).map_err(|e| {
            ParaxialError::Prescription(format!("parsing of prescription failed: {e}"))
        })?;
        if prescription.file_version != PRESCRIPTION_FILE_VERSION {
            warn!(
                "prescription file version '{}' does not match the supported version '{}'",
                prescription.file_version, PRESCRIPTION_FILE_VERSION
            );
        }
        Ok(prescription)
    }
    /// Save this [`Prescription`] to a file with the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the document failed.
    ///   - the file path cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> ParaxResult<()> {
        let serialized = self.to_yaml_string()?;
        let mut output = File::create(path).map_err(|e| {
            ParaxialError::Prescription(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            ParaxialError::Prescription(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
    /// Return the YAML representation of this [`Prescription`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> ParaxResult<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ParaxialError::Prescription(format!("serialization of prescription failed: {e}"))
        })
    }
    /// Returns the description of this [`Prescription`].
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Returns the file version of this [`Prescription`].
    #[must_use]
    pub fn file_version(&self) -> &str {
        &self.file_version
    }
    /// Returns the element list of this [`Prescription`].
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
    /// Add an [`Element`] to the end of the element list.
    ///
    /// **Note**: The element is not validated before [`Prescription::build_system`] is called.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }
    /// Add an input ray.
    pub fn add_ray(&mut self, ray: RayDefinition) {
        self.rays.push(ray);
    }
    /// Build the [`OpticalSystem`] described by this [`Prescription`].
    ///
    /// # Errors
    ///
    /// This function will return [`ParaxialError::InvalidElement`] if one of the elements is invalid or the sequence of
    /// markers is inconsistent.
    pub fn build_system(&self) -> ParaxResult<OpticalSystem> {
        let mut system = OpticalSystem::default();
        system.append_all(self.elements.iter().copied())?;
        Ok(system)
    }
    /// Create the bundle of input [`Rays`] of this [`Prescription`].
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the ray definitions contains non-finite values.
    pub fn rays(&self) -> ParaxResult<Rays> {
        let rays = self
            .rays
            .iter()
            .map(ParaxialRay::try_from)
            .collect::<ParaxResult<Vec<_>>>()?;
        Ok(Rays::from(rays))
    }
    /// Build the system and run the given analyzers (in the given order) on it.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system cannot be built or one of the analyzers fails.
    pub fn analyze(&self, analyzers: &[AnalyzerType]) -> ParaxResult<AnalysisReport> {
        let mut system = self.build_system()?;
        let mut report = AnalysisReport::new(&self.description);
        for analyzer_type in analyzers {
            let analyzer: Box<dyn Analyzer> = match analyzer_type {
                AnalyzerType::RayTrace => Box::new(RayTracingAnalyzer::new(self.rays()?)),
                AnalyzerType::Cardinal => Box::new(CardinalAnalyzer),
                AnalyzerType::Stop => Box::new(StopAnalyzer),
            };
            analyzer.analyze(&mut system, &mut report)?;
        }
        Ok(report)
    }
}
impl From<&OpticalSystem> for Prescription {
    fn from(system: &OpticalSystem) -> Self {
        Self {
            elements: system.elements().copied().collect(),
            ..Default::default()
        }
    }
}
