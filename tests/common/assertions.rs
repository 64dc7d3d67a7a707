//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point and color comparisons.

#![allow(dead_code)]

use plot_palette::Color;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors are approximately equal component-wise.
pub fn assert_color_approx_eq(actual: &Color, expected: &Color, epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    let pairs = [
        ("r", actual.r, expected.r),
        ("g", actual.g, expected.g),
        ("b", actual.b, expected.b),
        ("a", actual.a, expected.a),
    ];
    for (channel, a, e) in pairs {
        assert!(
            (a - e).abs() <= eps,
            "Colors differ in {}: actual = {:?}, expected = {:?}, epsilon = {}",
            channel,
            actual,
            expected,
            eps
        );
    }
}

/// Assert that two color lists are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the lists have different lengths or if any color comparison fails.
pub fn assert_colors_approx_eq(actual: &[Color], expected: &[Color], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Color lists have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_color_approx_eq(a, e, epsilon);
    }
}

/// Assert that two color lists hold the same colors in any order.
pub fn assert_same_multiset(actual: &[Color], expected: &[Color]) {
    let mut a: Vec<[u8; 4]> = actual.iter().map(|c| c.to_rgba8()).collect();
    let mut e: Vec<[u8; 4]> = expected.iter().map(|c| c.to_rgba8()).collect();
    a.sort();
    e.sort();
    assert_eq!(a, e, "Color lists are not permutations of each other");
}

/// Assert that every component of a color lies in [0, 1].
pub fn assert_valid_color(color: &Color) {
    for v in [color.r, color.g, color.b, color.a] {
        assert!(
            (0.0..=1.0).contains(&v),
            "Color component out of range: {:?}",
            color
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_same_multiset() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let blue = Color::new(0.0, 0.0, 1.0, 1.0);
        assert_same_multiset(&[red.clone(), blue.clone()], &[blue, red]);
    }
}
