//! Testing utilities for components that use contexts.
//!
//! This module provides:
//! - Mock slots that record what an accessor saw during a render
//! - Assertions on accessor state and rendered output
//! - Sample payload fixtures

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_context_active, assert_context_eq, assert_context_unset, assert_output_html,
};
pub use fixtures::{sample_profile, test_pass, Profile};
pub use mocks::{FailingSlot, MockSlot, RecordingSlot, SlowSlot};
