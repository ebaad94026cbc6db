//! Property test suite entry point.

mod determinism_tests;
mod naming_properties;
