//! Test assertions for contexts and rendered output.

use crate::context::Accessor;
use crate::core::RenderOutput;
use std::fmt::Debug;

/// Asserts that no provider of the accessor's context is rendering.
pub fn assert_context_unset<T>(accessor: &Accessor<T>) {
    assert!(
        !accessor.is_active(),
        "Expected context '{}' to be unset, but it has {} live activation(s)",
        accessor.name(),
        accessor.depth()
    );
}

/// Asserts that a provider of the accessor's context is rendering.
pub fn assert_context_active<T>(accessor: &Accessor<T>) {
    assert!(
        accessor.is_active(),
        "Expected context '{}' to be active, but it is unset",
        accessor.name()
    );
}

/// Asserts that the accessor currently returns `expected`.
pub fn assert_context_eq<T: PartialEq + Debug>(accessor: &Accessor<T>, expected: &T) {
    let actual = accessor.get();
    assert_eq!(
        actual.as_deref(),
        Some(expected),
        "Expected context '{}' to hold {:?}, got {:?}",
        accessor.name(),
        expected,
        actual
    );
}

/// Asserts that the output markup equals `expected`.
pub fn assert_output_html(output: &RenderOutput, expected: &str) {
    assert_eq!(
        output.html(),
        expected,
        "Expected rendered markup {:?}, got {:?}",
        expected,
        output.html()
    );
}
