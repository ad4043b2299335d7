//! Aperture stop search
//!
//! A marginal ray probe (height zero, small angle) is launched from the start of the system. For every lens or stop
//! the ratio of its clear semi-diameter to the probe height at its position is calculated. The element with the
//! smallest ratio limits the axial beam most and is marked as aperture stop.
use super::{raytrace::incident_states, Analyzer, AnalyzerType};
use crate::{
    error::{ParaxResult, ParaxialError},
    ray::{ParaxialRay, RayPoint},
    reporter::AnalysisReport,
    OpticalSystem,
};
use log::{info, warn};
use num::Zero;
use uom::si::{f64::Length, length::millimeter};

/// Calculate the `(element index, semi-diameter / marginal ray height)` pairs of all stop candidates.
///
/// # Errors
///
/// This function returns
///   - [`ParaxialError::NoStopCandidate`] if the system contains neither a lens nor a stop.
///   - [`ParaxialError::DegenerateRay`] if the probe height is zero or not finite at one of the candidates.
pub fn stop_ratios(system: &OpticalSystem) -> ParaxResult<Vec<(usize, f64)>> {
    if !system.elements().any(|e| e.is_stop_candidate()) {
        return Err(ParaxialError::NoStopCandidate(
            "system contains neither a lens nor a stop".into(),
        ));
    }
    let start_position = system
        .entries()
        .first()
        .map_or_else(Length::zero, |(p, _)| *p);
    let probe = ParaxialRay::marginal_probe(start_position);
    let states: Vec<RayPoint> = incident_states(system, probe.initial_state())?;
    let mut ratios = Vec::<(usize, f64)>::new();
    for (idx, (element, state)) in system.elements().zip(states).enumerate() {
        let Some(diameter) = element.clear_diameter() else {
            continue;
        };
        let height = state.height.abs();
        if height.is_zero() || !height.is_finite() {
            return Err(ParaxialError::DegenerateRay(format!(
                "marginal ray height at element {idx} ({}) is {} mm",
                element.kind(),
                state.height.get::<millimeter>()
            )));
        }
        if diameter.is_zero() {
            warn!(
                "{} at index {idx} has a clear diameter of zero and blocks the beam completely",
                element.kind()
            );
        }
        ratios.push((idx, (diameter / 2.0 / height).value));
    }
    Ok(ratios)
}
/// Determine the aperture stop of the system, mark it and return its index.
///
/// On ties, the first candidate in traversal order wins. After a successful call exactly one element is flagged as stop.
///
/// # Errors
///
/// This function returns an error if no candidate exists or the probe ray is degenerate (see [`stop_ratios`]). In
/// this case the stop flags of the system are left unchanged.
pub fn find_system_stop(system: &mut OpticalSystem) -> ParaxResult<usize> {
    let ratios = stop_ratios(system)?;
    let mut stop: Option<(usize, f64)> = None;
    for (idx, ratio) in ratios {
        if stop.map_or(true, |(_, min_ratio)| ratio < min_ratio) {
            stop = Some((idx, ratio));
        }
    }
    let (idx, _) = stop.ok_or_else(|| {
        ParaxialError::NoStopCandidate("no stop candidate found".into())
    })?;
    system.set_stop(idx)?;
    if let Some((position, element)) = system.entries().get(idx) {
        info!(
            "Aperture stop: {} at index {idx} (position {:.3} mm)",
            element.kind(),
            position.get::<millimeter>()
        );
    }
    Ok(idx)
}

/// Analyzer searching the aperture stop of a system.
#[derive(Debug, Default, Clone, Copy)]
pub struct StopAnalyzer;

impl Analyzer for StopAnalyzer {
    fn analyze(&self, system: &mut OpticalSystem, report: &mut AnalysisReport) -> ParaxResult<()> {
        info!("Performing {} analysis.", AnalyzerType::Stop);
        let idx = find_system_stop(system)?;
        report.set_stop_index(idx);
        Ok(())
    }
}
