//! Helpers that read CI-facing environment knobs.

pub mod property_test_profile;
