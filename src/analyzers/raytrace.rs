//! Sequential paraxial ray tracing
use super::{Analyzer, AnalyzerType};
use crate::{
    elements::Element,
    error::{ParaxResult, ParaxialError},
    matrix, meter,
    ray::{ParaxialRay, RayPoint},
    rays::Rays,
    reporter::AnalysisReport,
    OpticalSystem,
};
use log::info;

/// Propagate a ray state across a single element.
fn step(state: &RayPoint, element: &Element, index: usize) -> ParaxResult<RayPoint> {
    let (height, angle) = matrix::apply(&element.matrix(), state.height.value, state.angle)
        .map_err(|e| ParaxialError::Arithmetic(format!("element {index}: {e}")))?;
    Ok(RayPoint::new(
        state.position + element.reduced_thickness(),
        meter!(height),
        angle,
    ))
}

/// Trace a ray through the given system.
///
/// Starting from the initial state of the ray, all elements are applied in system order:
///   - a gap transfers the ray and appends the new state to the position history of the ray.
///   - a lens refracts the ray in place. The angle of the latest recorded state (except the initial state) is updated
///     but no new point is added.
///   - stops and markers do not alter the ray.
///
/// The new points are appended to the existing history. A repeated trace starts again from the initial state but
/// earlier points are kept. The function returns the final state of the ray.
///
/// # Errors
///
/// This function returns [`ParaxialError::Arithmetic`] if the ray state becomes non-finite. In this case, the ray is
/// left unchanged.
pub fn trace(ray: &mut ParaxialRay, system: &OpticalSystem) -> ParaxResult<RayPoint> {
    let mut state = ray.initial_state();
    let mut points = Vec::<RayPoint>::with_capacity(system.len());
    for (index, element) in system.elements().enumerate() {
        state = step(&state, element, index)?;
        match element {
            Element::Gap(_) => points.push(state),
            Element::ThinLens(_) => {
                if let Some(latest) = points.last_mut() {
                    latest.angle = state.angle;
                }
            }
            Element::Stop(_) | Element::Object(_) | Element::Image(_) => (),
        }
    }
    ray.record(points);
    Ok(state)
}
/// Returns the ray state arriving at each element of the system (before the element acts on the ray).
pub(crate) fn incident_states(
    system: &OpticalSystem,
    start: RayPoint,
) -> ParaxResult<Vec<RayPoint>> {
    let mut state = start;
    let mut states = Vec::<RayPoint>::with_capacity(system.len());
    for (index, element) in system.elements().enumerate() {
        states.push(state);
        state = step(&state, element, index)?;
    }
    Ok(states)
}

/// Analyzer tracing a bundle of rays through a system.
#[derive(Debug, Default, Clone)]
pub struct RayTracingAnalyzer {
    rays: Rays,
}
impl RayTracingAnalyzer {
    /// Creates a new [`RayTracingAnalyzer`] for the given rays.
    #[must_use]
    pub const fn new(rays: Rays) -> Self {
        Self { rays }
    }
}
impl Analyzer for RayTracingAnalyzer {
    fn analyze(&self, system: &mut OpticalSystem, report: &mut AnalysisReport) -> ParaxResult<()> {
        info!(
            "Performing {} of {} ray(s).",
            AnalyzerType::RayTrace,
            self.rays.nr_of_rays()
        );
        let mut rays = self.rays.clone();
        rays.trace(system)?;
        report.set_rays(&rays);
        Ok(())
    }
}
