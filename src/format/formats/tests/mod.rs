//! Unit tests for area format implementations.
//!
//! These tests verify the correctness of format serialization, deserialization,
//! and round-trip conversions.

mod existing_tests;
mod payload_json_tests;
