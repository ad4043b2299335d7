//! This is the documentation for the **paraxial** package, a first-order (ABCD matrix) optics engine.
//!
//! An [`OpticalSystem`] is an ordered sequence of [`elements`] (gaps, thin lenses, stops and object / image markers)
//! along a single optical axis. Paraxial rays can be traced through such a system and its cardinal points as well as
//! its aperture stop can be determined using the [`analyzers`]. Systems can be read from and written to
//! [`prescription`] files.
#![allow(clippy::module_name_repetitions)]

pub mod analyzers;
pub mod console;
pub mod elements;
pub mod error;
pub mod matrix;
mod optical_system;
pub mod prescription;
pub mod ray;
pub mod rays;
pub mod reporter;
pub mod utils;

pub use optical_system::OpticalSystem;
pub use prescription::Prescription;

/// Return the version information of this package.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
