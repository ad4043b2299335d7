#![warn(missing_docs)]
//! Paraxial analyzers
//!
//! An analyzer of a certain [`AnalyzerType`] determines how an [`OpticalSystem`] is analyzed. Rays can be traced through
//! the system, the cardinal points and planes can be calculated or the aperture stop can be located. The results of
//! all analyzers are collected in an [`AnalysisReport`].
use std::{fmt::Display, str::FromStr};

use strum::EnumIter;
pub mod cardinal;
pub mod raytrace;
pub mod stop;

pub use cardinal::CardinalAnalyzer;
pub use raytrace::RayTracingAnalyzer;
pub use stop::StopAnalyzer;

use crate::{
    error::{ParaxResult, ParaxialError},
    reporter::AnalysisReport,
    OpticalSystem,
};

/// Type of analysis to be performed.
#[derive(EnumIter, PartialEq, Eq, Debug, Clone, Copy)]
pub enum AnalyzerType {
    /// Sequential tracing of a bundle of paraxial rays.
    RayTrace,
    /// Calculation of the focal lengths, cardinal points and cardinal planes.
    Cardinal,
    /// Search of the aperture stop.
    ///
    /// **Note**: The found stop is marked in the system. Cardinal points or ray traces do not depend on it.
    Stop,
}

impl Display for AnalyzerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::RayTrace => "ray tracing",
            Self::Cardinal => "cardinal point",
            Self::Stop => "aperture stop",
        };
        write!(f, "{msg}")
    }
}
impl FromStr for AnalyzerType {
    type Err = ParaxialError;

    fn from_str(s: &str) -> ParaxResult<Self> {
        match s {
            "raytrace" | "r" => Ok(Self::RayTrace),
            "cardinal" | "c" => Ok(Self::Cardinal),
            "stop" | "s" => Ok(Self::Stop),
            _ => Err(ParaxialError::Console(format!("unknown analyzer: {s}"))),
        }
    }
}

/// Common trait for all analyzers.
pub trait Analyzer {
    /// Analyze an [`OpticalSystem`] and store the results in the given [`AnalysisReport`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the concrete implementation of the [`Analyzer`] returns an error.
    fn analyze(&self, system: &mut OpticalSystem, report: &mut AnalysisReport) -> ParaxResult<()>;
}
