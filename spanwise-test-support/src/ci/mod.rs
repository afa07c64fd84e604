//! Knobs read by test suites when running in CI or under local overrides.

pub mod property_test_profile;
