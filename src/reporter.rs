#![warn(missing_docs)]
//! Module handling analysis reports.
//!
//! An [`AnalysisReport`] collects the results of all analyzers performed on an optical system and can be exported as
//! YAML document. All lengths are given in meters, powers in diopters and angles in radians.
use crate::{
    analyzers::cardinal::{CardinalPlanes, CardinalPoints},
    error::{ParaxResult, ParaxialError},
    get_version,
    ray::RayPoint,
    rays::Rays,
};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Structure for storing the results of an analysis run.
pub struct AnalysisReport {
    version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rays: Option<Vec<Vec<RayPoint>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cardinal_points: Option<CardinalPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cardinal_planes: Option<CardinalPlanes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_index: Option<usize>,
}
impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            version: get_version(),
            description: String::default(),
            rays: None,
            cardinal_points: None,
            cardinal_planes: None,
            stop_index: None,
        }
    }
}
impl AnalysisReport {
    /// Creates a new (empty) [`AnalysisReport`] with the given description of the analyzed system.
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_owned(),
            ..Self::default()
        }
    }
    /// Returns the description of the analyzed system.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Sets the description of the analyzed system.
    pub fn set_description(&mut self, description: &str) {
        description.clone_into(&mut self.description);
    }
    /// Store the position histories of the given (traced) rays.
    pub fn set_rays(&mut self, rays: &Rays) {
        self.rays = Some(
            rays.iter()
                .map(|ray| ray.position_history().to_vec())
                .collect(),
        );
    }
    /// Returns the position histories of the traced rays (if a ray tracing was performed).
    #[must_use]
    pub const fn rays(&self) -> Option<&Vec<Vec<RayPoint>>> {
        self.rays.as_ref()
    }
    /// Store the result of a cardinal point analysis.
    pub fn set_cardinal(&mut self, points: CardinalPoints, planes: CardinalPlanes) {
        self.cardinal_points = Some(points);
        self.cardinal_planes = Some(planes);
    }
    /// Returns the cardinal points (if calculated).
    #[must_use]
    pub const fn cardinal_points(&self) -> Option<&CardinalPoints> {
        self.cardinal_points.as_ref()
    }
    /// Returns the cardinal planes (if calculated).
    #[must_use]
    pub const fn cardinal_planes(&self) -> Option<&CardinalPlanes> {
        self.cardinal_planes.as_ref()
    }
    /// Store the index of the aperture stop.
    pub fn set_stop_index(&mut self, index: usize) {
        self.stop_index = Some(index);
    }
    /// Returns the index of the aperture stop element (if searched).
    #[must_use]
    pub const fn stop_index(&self) -> Option<usize> {
        self.stop_index
    }
    /// Serialize this report to a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> ParaxResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ParaxialError::Other(format!("serialization of report failed: {e}")))
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        elements::{Gap, ThinLens},
        millimeter, OpticalSystem,
    };
    fn system() -> OpticalSystem {
        OpticalSystem::new([
            Gap::in_air(millimeter!(50.0)).unwrap().into(),
            ThinLens::new(millimeter!(100.0), millimeter!(20.0))
                .unwrap()
                .into(),
            Gap::in_air(millimeter!(50.0)).unwrap().into(),
        ])
        .unwrap()
    }
    #[test]
    fn default() {
        let report = AnalysisReport::default();
        assert_eq!(report.version, get_version());
        assert!(report.description().is_empty());
        assert!(report.rays().is_none());
        assert!(report.cardinal_points().is_none());
        assert!(report.cardinal_planes().is_none());
        assert!(report.stop_index().is_none());
    }
    #[test]
    fn description() {
        let mut report = AnalysisReport::new("doublet");
        assert_eq!(report.description(), "doublet");
        report.set_description("triplet");
        assert_eq!(report.description(), "triplet");
    }
    #[test]
    fn set_rays() {
        let mut rays = Rays::new_collimated(&millimeter!(1.0, 2.0)).unwrap();
        rays.trace(&system()).unwrap();
        let mut report = AnalysisReport::default();
        report.set_rays(&rays);
        let stored = report.rays().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|points| points.len() == 3));
    }
    #[test]
    fn set_cardinal() {
        let mut system = system();
        let points = CardinalPoints::new(&system).unwrap();
        let planes = *system.add_planes().unwrap();
        let mut report = AnalysisReport::default();
        report.set_cardinal(points, planes);
        assert_eq!(report.cardinal_points(), Some(&points));
        assert_eq!(report.cardinal_planes(), Some(&planes));
    }
    #[test]
    fn to_yaml_string() {
        let mut report = AnalysisReport::new("test system");
        let yaml = report.to_yaml_string().unwrap();
        assert!(yaml.contains("description: test system"));
        assert!(!yaml.contains("stop_index"));
        report.set_stop_index(1);
        let yaml = report.to_yaml_string().unwrap();
        assert!(yaml.contains("stop_index: 1"));
    }
}
