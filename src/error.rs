#![warn(missing_docs)]
//! Error structures of the paraxial engine
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type ParaxResult<T> = std::result::Result<T, ParaxialError>;

/// Errors that can be returned by the ray tracing and cardinal point functions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParaxialError {
    /// invalid element parameters or an invalid position of an element inside an [`OpticalSystem`](crate::OpticalSystem)
    InvalidElement(String),
    /// invalid initial state of a ray or an empty ray fan
    InvalidRay(String),
    /// the system does not contain a single power-bearing element
    EmptySystem(String),
    /// the system does not contain any lens or stop which could act as aperture stop
    NoStopCandidate(String),
    /// afocal system: the power is zero and focal quantities are undefined
    DegenerateSystem(String),
    /// the marginal ray height is zero or not finite at a stop candidate
    DegenerateRay(String),
    /// a computation produced `NaN` or an infinite value
    Arithmetic(String),
    /// errors while reading or writing a [`Prescription`](crate::prescription::Prescription)
    Prescription(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for ParaxialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidElement(m) => {
                write!(f, "InvalidElement:{m}")
            }
            Self::InvalidRay(m) => {
                write!(f, "InvalidRay:{m}")
            }
            Self::EmptySystem(m) => {
                write!(f, "EmptySystem:{m}")
            }
            Self::NoStopCandidate(m) => {
                write!(f, "NoStopCandidate:{m}")
            }
            Self::DegenerateSystem(m) => {
                write!(f, "DegenerateSystem:{m}")
            }
            Self::DegenerateRay(m) => {
                write!(f, "DegenerateRay:{m}")
            }
            Self::Arithmetic(m) => {
                write!(f, "Arithmetic:{m}")
            }
            Self::Prescription(m) => {
                write!(f, "Prescription:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Paraxial Error:Other:{m}"),
        }
    }
}
impl Error for ParaxialError {}

impl std::convert::From<String> for ParaxialError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = ParaxialError::from("test".to_string());
        assert_eq!(error, ParaxialError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", ParaxialError::InvalidElement("test".to_string())),
            "InvalidElement:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::InvalidRay("test".to_string())),
            "InvalidRay:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::EmptySystem("test".to_string())),
            "EmptySystem:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::NoStopCandidate("test".to_string())),
            "NoStopCandidate:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::DegenerateSystem("test".to_string())),
            "DegenerateSystem:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::DegenerateRay("test".to_string())),
            "DegenerateRay:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::Arithmetic("test".to_string())),
            "Arithmetic:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::Prescription("test".to_string())),
            "Prescription:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", ParaxialError::Other("test".to_string())),
            "Paraxial Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", ParaxialError::DegenerateSystem("test".to_string())),
            "DegenerateSystem(\"test\")"
        );
    }
}
