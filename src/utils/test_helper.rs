//! Helper functions for checking log output in unit tests.
//!
//! **Note**: This module is only compiled and used during testing.
