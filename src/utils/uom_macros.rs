#![warn(missing_docs)]
//! Macros for creating [`Length`](uom::si::f64::Length) values (or lists of them) in a given unit.
//!
//! ```rust
//! use paraxial::millimeter;
//! use uom::si::length::meter;
//!
//! let thickness = millimeter!(50.0);
//! assert!((thickness.get::<meter>() - 0.05).abs() < 1e-12);
//! let heights = millimeter!(-1.0, 0.0, 1.0);
//! assert_eq!(heights.len(), 3);
//! ```
/// helper macro creating a single length or a `Vec` of lengths of the given unit
#[macro_export]
macro_rules! length_creator {
    ($unit:ident, $val:expr) => {
        uom::si::f64::Length::new::<uom::si::length::$unit>($val)
    };
    ($unit:ident, $( $x:expr ),+) => {
        vec![$( uom::si::f64::Length::new::<uom::si::length::$unit>($x) ),+]
    };
}
///macro to create a Length in meter
#[macro_export]
macro_rules! meter {
    ($( $x:expr ),+) => {
        $crate::length_creator![meter, $( $x ),+]
    };
}
///macro to create a Length in centimeter
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),+) => {
        $crate::length_creator![centimeter, $( $x ),+]
    };
}
///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),+) => {
        $crate::length_creator![millimeter, $( $x ),+]
    };
}
///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($( $x:expr ),+) => {
        $crate::length_creator![micrometer, $( $x ),+]
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn single_values() {
        assert_relative_eq!(meter!(1.5).get::<meter>(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(centimeter!(1.5).get::<meter>(), 0.015, max_relative = 1e-12);
        assert_relative_eq!(millimeter!(1.5).get::<meter>(), 0.0015, max_relative = 1e-12);
        assert_relative_eq!(micrometer!(1.5).get::<meter>(), 1.5e-6, max_relative = 1e-12);
    }
    #[test]
    fn list_of_values() {
        let lengths: Vec<Length> = millimeter!(1.0, 2.0, 3.0);
        assert_eq!(lengths.len(), 3);
        assert_relative_eq!(lengths[2].get::<meter>(), 0.003, max_relative = 1e-12);
    }
}
