//! Shared test utilities for tubestats
//!
//! Mock TfL API responses, command builders with an isolated environment, and output
//! predicates used by the integration tests.

pub mod assertions;
pub mod fixtures;
