#![warn(missing_docs)]
//! Cardinal points of an optical system
//!
//! All quantities are derived from the vertex matrix `M = [[A, B], [C, D]]` of the system, i.e. the product of the
//! matrices of all elements between the first and the last lens (vertex):
//!   - power: `-C`
//!   - effective / rear focal length: `1 / power`, front focal length: `-1 / power`
//!   - front principal plane (relative to the first vertex): `(D - 1) / C`
//!   - rear principal plane (relative to the last vertex): `(1 - A) / C`
//!   - front focal distance (relative to the first vertex): `D / C`
//!   - back focal distance (relative to the last vertex): `-A / C`
use super::{Analyzer, AnalyzerType};
use crate::{
    error::{ParaxResult, ParaxialError},
    matrix::{transfer_matrix, RayTransferMatrix},
    meter,
    reporter::AnalysisReport,
    OpticalSystem,
};
use itertools::{Itertools, MinMaxResult};
use log::info;
use serde::Serialize;
use std::ops::RangeInclusive;
use uom::si::f64::Length;

/// Returns the index range from the first to the last power-bearing element.
#[must_use]
pub fn interior_range(system: &OpticalSystem) -> Option<RangeInclusive<usize>> {
    match system.elements().positions(|e| e.has_power()).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(idx) => Some(idx..=idx),
        MinMaxResult::MinMax(first, last) => Some(first..=last),
    }
}
/// Returns the axial positions of the first and the last vertex (power-bearing element).
#[must_use]
pub fn find_vertex_points(system: &OpticalSystem) -> Option<(Length, Length)> {
    interior_range(system).map(|range| {
        let entries = system.entries();
        (entries[*range.start()].0, entries[*range.end()].0)
    })
}
/// Calculate the vertex matrix of the system.
///
/// Gaps in front of the first and behind the last lens are not part of this matrix. The matrices of the interior
/// elements are multiplied in reverse traversal order (each following element left-multiplies the accumulated
/// product). The system itself is not modified.
///
/// # Errors
///
/// This function returns [`ParaxialError::EmptySystem`] if the system does not contain a power-bearing element.
pub fn vertex_matrix(system: &OpticalSystem) -> ParaxResult<RayTransferMatrix> {
    let range = interior_range(system).ok_or_else(|| {
        ParaxialError::EmptySystem("system does not contain any power-bearing element".into())
    })?;
    let mut interior = system.elements().skip(*range.start()).take(range.count());
    let first = interior.next().ok_or_else(|| {
        ParaxialError::EmptySystem("system does not contain any power-bearing element".into())
    })?;
    Ok(interior.fold(first.matrix(), |vertex_matrix, element| {
        element.matrix() * vertex_matrix
    }))
}
/// Sum of the absolute powers of all lenses, used as scale for detecting a vanishing system power.
fn power_scale(system: &OpticalSystem) -> f64 {
    system.elements().map(|e| e.power().abs()).sum()
}
/// Return the `C` element of the vertex matrix or an error if the system is afocal or the element overflowed.
fn checked_c(matrix: &RayTransferMatrix, power_scale: f64) -> ParaxResult<f64> {
    let c = matrix[(1, 0)];
    if !c.is_finite() {
        return Err(ParaxialError::Arithmetic(
            "vertex matrix contains a non-finite power element".into(),
        ));
    }
    if c.abs() <= 8.0 * f64::EPSILON * power_scale {
        return Err(ParaxialError::DegenerateSystem(
            "system is afocal (zero power). Focal quantities are undefined".into(),
        ));
    }
    Ok(c)
}
/// The first-order properties of an optical system.
///
/// Distances of principal planes and focal points are measured from the first (front) or last (rear) vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardinalPoints {
    /// optical power in diopters
    pub power: f64,
    /// effective focal length
    pub effective_focal_length: Length,
    /// front focal length (measured from the front principal plane)
    pub front_focal_length: Length,
    /// rear focal length (measured from the rear principal plane)
    pub rear_focal_length: Length,
    /// front principal plane (relative to the first vertex)
    pub front_principal_plane: Length,
    /// rear principal plane (relative to the last vertex)
    pub rear_principal_plane: Length,
    /// front focal distance (relative to the first vertex)
    pub front_focal_distance: Length,
    /// back focal distance (relative to the last vertex)
    pub back_focal_distance: Length,
}
impl CardinalPoints {
    /// Calculate the [`CardinalPoints`] of the given system.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///   - the system does not contain any lens ([`ParaxialError::EmptySystem`]).
    ///   - the system is afocal ([`ParaxialError::DegenerateSystem`]).
    ///   - the system power is not finite ([`ParaxialError::Arithmetic`]).
    pub fn new(system: &OpticalSystem) -> ParaxResult<Self> {
        let m = vertex_matrix(system)?;
        Self::from_vertex_matrix(&m, power_scale(system))
    }
    /// Derive the [`CardinalPoints`] from a given vertex matrix.
    ///
    /// # Errors
    ///
    /// This function returns [`ParaxialError::DegenerateSystem`] if the `C` element of the matrix vanishes compared to
    /// the given power scale and [`ParaxialError::Arithmetic`] if it is not finite.
    pub fn from_vertex_matrix(m: &RayTransferMatrix, power_scale: f64) -> ParaxResult<Self> {
        let c = checked_c(m, power_scale)?;
        let (a, d) = (m[(0, 0)], m[(1, 1)]);
        let power = -c;
        Ok(Self {
            power,
            effective_focal_length: meter!(1.0 / power),
            front_focal_length: meter!(-1.0 / power),
            rear_focal_length: meter!(1.0 / power),
            front_principal_plane: meter!((d - 1.0) / c),
            rear_principal_plane: meter!((1.0 - a) / c),
            front_focal_distance: meter!(d / c),
            back_focal_distance: meter!(-a / c),
        })
    }
}
/// Returns the optical power (in diopters) of the system.
///
/// # Errors
///
/// This function returns an error if the system contains no lens or is afocal.
pub fn power(system: &OpticalSystem) -> ParaxResult<f64> {
    Ok(CardinalPoints::new(system)?.power)
}
/// Returns the effective focal length of the system.
///
/// # Errors
///
/// This function returns an error if the system contains no lens or is afocal.
pub fn effective_focal_length(system: &OpticalSystem) -> ParaxResult<Length> {
    Ok(CardinalPoints::new(system)?.effective_focal_length)
}
/// Calculate the image distance (measured from the last vertex) for an object at the given distance in front of the
/// first vertex.
///
/// A positive object distance denotes a real object in front of the system, a positive image distance a real image
/// behind the system.
///
/// # Errors
///
/// This function returns an error if
///   - the system contains no lens.
///   - the object is located in the front focal plane (image at infinity).
///   - the object distance is not finite.
pub fn image_distance(system: &OpticalSystem, object_distance: Length) -> ParaxResult<Length> {
    if !object_distance.is_finite() {
        return Err(ParaxialError::Other("object distance must be finite".into()));
    }
    let vertex = vertex_matrix(system)?;
    let m = vertex * transfer_matrix(object_distance);
    let denominator = m[(1, 1)];
    let scale = (vertex[(1, 0)] * object_distance.value).abs() + vertex[(1, 1)].abs();
    if denominator.abs() <= 8.0 * f64::EPSILON * scale {
        return Err(ParaxialError::DegenerateSystem(
            "object located in the front focal plane. Image is at infinity".into(),
        ));
    }
    Ok(meter!(-m[(0, 1)] / denominator))
}

/// Absolute axial positions of vertices, principal planes and focal planes (front, rear).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardinalPlanes {
    /// first and last vertex
    pub vertices: (Length, Length),
    /// front and rear principal plane
    pub principal_planes: (Length, Length),
    /// front and rear focal plane
    pub focal_planes: (Length, Length),
}
impl CardinalPlanes {
    /// Calculate the plane positions of the given system.
    ///
    /// # Errors
    ///
    /// This function returns an error if the [`CardinalPoints`] of the system cannot be determined.
    pub fn new(system: &OpticalSystem) -> ParaxResult<Self> {
        let points = CardinalPoints::new(system)?;
        let (front, rear) = find_vertex_points(system).ok_or_else(|| {
            ParaxialError::EmptySystem("system does not contain any vertex".into())
        })?;
        Ok(Self {
            vertices: (front, rear),
            principal_planes: (
                front + points.front_principal_plane,
                rear + points.rear_principal_plane,
            ),
            focal_planes: (
                front + points.front_focal_distance,
                rear + points.back_focal_distance,
            ),
        })
    }
}

/// Analyzer calculating the cardinal points and planes of a system.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardinalAnalyzer;

impl Analyzer for CardinalAnalyzer {
    fn analyze(&self, system: &mut OpticalSystem, report: &mut AnalysisReport) -> ParaxResult<()> {
        info!("Performing {} analysis.", AnalyzerType::Cardinal);
        let points = CardinalPoints::new(system)?;
        let planes = *system.add_planes()?;
        report.set_cardinal(points, planes);
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        elements::{Element, Gap, ImageMarker, ObjectMarker, Stop, ThinLens},
        meter, millimeter,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;
    use uom::si::length::millimeter;

    fn gap(t: f64, n: f64) -> Element {
        Gap::new(millimeter!(t), n).unwrap().into()
    }
    fn lens(f: f64) -> Element {
        ThinLens::new(millimeter!(f), millimeter!(20.0)).unwrap().into()
    }
    fn mm(length: Length) -> f64 {
        length.get::<millimeter>()
    }
    fn two_lens_system() -> OpticalSystem {
        OpticalSystem::new([
            ObjectMarker::default().into(),
            gap(50.0, 1.0),
            lens(100.0),
            gap(50.0, 1.0),
            lens(75.0),
            gap(100.0, 1.0),
            ImageMarker::default().into(),
        ])
        .unwrap()
    }
    #[test]
    fn interior() {
        let system = two_lens_system();
        assert_eq!(interior_range(&system), Some(2..=4));
        let system = OpticalSystem::new([gap(10.0, 1.0), lens(100.0)]).unwrap();
        assert_eq!(interior_range(&system), Some(1..=1));
        let system = OpticalSystem::new([gap(10.0, 1.0)]).unwrap();
        assert_eq!(interior_range(&system), None);
        assert_eq!(interior_range(&OpticalSystem::default()), None);
    }
    #[test]
    fn vertex_points() {
        let (front, rear) = find_vertex_points(&two_lens_system()).unwrap();
        assert_relative_eq!(mm(front), 50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(rear), 100.0, max_relative = 1e-12);
        let system = OpticalSystem::new([gap(10.0, 1.0), Stop::new(millimeter!(1.0)).unwrap().into()])
            .unwrap();
        assert!(find_vertex_points(&system).is_none());
    }
    #[test]
    fn vertex_matrix_empty() {
        assert_matches!(
            vertex_matrix(&OpticalSystem::default()),
            Err(ParaxialError::EmptySystem(_))
        );
        let system = OpticalSystem::new([gap(10.0, 1.0), Stop::new(millimeter!(1.0)).unwrap().into()])
            .unwrap();
        assert_matches!(vertex_matrix(&system), Err(ParaxialError::EmptySystem(_)));
    }
    #[test]
    fn vertex_matrix_single_lens() {
        let system = OpticalSystem::new([gap(50.0, 1.0), lens(100.0), gap(50.0, 1.0)]).unwrap();
        let m = vertex_matrix(&system).unwrap();
        assert_relative_eq!(m[(0, 0)], 1.0, max_relative = 1e-12);
        assert_relative_eq!(m[(0, 1)], 0.0, max_relative = 1e-12);
        assert_relative_eq!(m[(1, 0)], -10.0, max_relative = 1e-12);
        assert_relative_eq!(m[(1, 1)], 1.0, max_relative = 1e-12);
        assert_relative_eq!(power(&system).unwrap(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(mm(effective_focal_length(&system).unwrap()), 100.0, max_relative = 1e-12);
    }
    #[test]
    fn vertex_matrix_unit_determinant() {
        let system = OpticalSystem::new([
            gap(5.0, 1.0),
            lens(80.0),
            gap(12.0, 1.6),
            Stop::new(millimeter!(8.0)).unwrap().into(),
            gap(20.0, 1.0),
            lens(-45.0),
            gap(3.0, 1.5),
            lens(60.0),
            gap(70.0, 1.0),
        ])
        .unwrap();
        let m = vertex_matrix(&system).unwrap();
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }
    #[test]
    fn vertex_matrix_idempotent() {
        let system = two_lens_system();
        let m1 = vertex_matrix(&system).unwrap();
        let m2 = vertex_matrix(&system).unwrap();
        assert_eq!(m1, m2);
        assert_eq!(system, two_lens_system());
    }
    #[test]
    fn combined_lenses() {
        let (f1, f2, t) = (100.0, 75.0, 50.0);
        let points = CardinalPoints::new(&two_lens_system()).unwrap();
        let expected = 1.0 / (1.0 / f1 + 1.0 / f2 - t / (f1 * f2));
        assert_relative_eq!(mm(points.effective_focal_length), expected, max_relative = 1e-12);
        assert_relative_eq!(mm(points.rear_focal_length), expected, max_relative = 1e-12);
        assert_relative_eq!(mm(points.front_focal_length), -expected, max_relative = 1e-12);
        assert_relative_eq!(points.power, 1000.0 / expected, max_relative = 1e-12);
        // A = 1 - t/f1, D = 1 - t/f2
        let (a, d) = (1.0 - t / f1, 1.0 - t / f2);
        let c = -1.0 / expected;
        assert_relative_eq!(mm(points.front_principal_plane), (d - 1.0) / c, max_relative = 1e-12);
        assert_relative_eq!(mm(points.rear_principal_plane), (1.0 - a) / c, max_relative = 1e-12);
        assert_relative_eq!(mm(points.front_focal_distance), d / c, max_relative = 1e-12);
        assert_relative_eq!(mm(points.back_focal_distance), -a / c, max_relative = 1e-12);
    }
    #[test]
    fn afocal() {
        let system = OpticalSystem::new([
            gap(10.0, 1.0),
            lens(100.0),
            gap(150.0, 1.0),
            lens(50.0),
            gap(10.0, 1.0),
        ])
        .unwrap();
        assert_matches!(
            CardinalPoints::new(&system),
            Err(ParaxialError::DegenerateSystem(_))
        );
        assert_matches!(power(&system), Err(ParaxialError::DegenerateSystem(_)));
        assert_matches!(
            CardinalPlanes::new(&system),
            Err(ParaxialError::DegenerateSystem(_))
        );
    }
    #[test]
    fn overflowing_power() {
        let strong_lens: Element = ThinLens::new(meter!(1.0e-10), millimeter!(20.0)).unwrap().into();
        let system = OpticalSystem::new([
            gap(10.0, 1.0),
            strong_lens,
            Gap::in_air(meter!(1.0e300)).unwrap().into(),
            strong_lens,
            gap(10.0, 1.0),
        ])
        .unwrap();
        assert_matches!(CardinalPoints::new(&system), Err(ParaxialError::Arithmetic(_)));
        assert_matches!(
            CardinalPlanes::new(&system),
            Err(ParaxialError::Arithmetic(_))
        );
        assert_matches!(
            CardinalPoints::from_vertex_matrix(&RayTransferMatrix::new(1.0, 0.0, f64::NAN, 1.0), 1.0),
            Err(ParaxialError::Arithmetic(_))
        );
    }
    #[test]
    fn planes() {
        let system = OpticalSystem::new([gap(50.0, 1.0), lens(100.0), gap(50.0, 1.0)]).unwrap();
        let planes = CardinalPlanes::new(&system).unwrap();
        assert_relative_eq!(mm(planes.vertices.0), 50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(planes.vertices.1), 50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(planes.principal_planes.0), 50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(planes.principal_planes.1), 50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(planes.focal_planes.0), -50.0, max_relative = 1e-12);
        assert_relative_eq!(mm(planes.focal_planes.1), 150.0, max_relative = 1e-12);
    }
    #[test]
    fn planes_two_lenses() {
        let system = two_lens_system();
        let points = CardinalPoints::new(&system).unwrap();
        let planes = CardinalPlanes::new(&system).unwrap();
        assert_relative_eq!(
            mm(planes.principal_planes.1 - planes.vertices.1),
            mm(points.rear_principal_plane),
            max_relative = 1e-12
        );
        // rear focal plane lies one focal length behind the rear principal plane
        assert_relative_eq!(
            mm(planes.focal_planes.1 - planes.principal_planes.1),
            mm(points.rear_focal_length),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mm(planes.focal_planes.0 - planes.principal_planes.0),
            mm(points.front_focal_length),
            max_relative = 1e-12
        );
    }
    #[test]
    fn image_distances() {
        let system = OpticalSystem::new([gap(50.0, 1.0), lens(100.0), gap(50.0, 1.0)]).unwrap();
        let image = image_distance(&system, millimeter!(200.0)).unwrap();
        assert_relative_eq!(mm(image), 200.0, max_relative = 1e-12);
        let image = image_distance(&system, millimeter!(50.0)).unwrap();
        assert_relative_eq!(mm(image), -100.0, max_relative = 1e-12);
        assert_matches!(
            image_distance(&system, millimeter!(100.0)),
            Err(ParaxialError::DegenerateSystem(_))
        );
        assert!(image_distance(&system, millimeter!(f64::NAN)).is_err());
        assert_matches!(
            image_distance(&OpticalSystem::default(), millimeter!(10.0)),
            Err(ParaxialError::EmptySystem(_))
        );
    }
    #[test]
    fn analyzer() {
        let mut system = two_lens_system();
        let mut report = AnalysisReport::default();
        CardinalAnalyzer.analyze(&mut system, &mut report).unwrap();
        assert!(report.cardinal_points().is_some());
        assert_eq!(report.cardinal_planes(), system.planes());
    }
}
