//! Numeric conversion helpers used across the project.
//!
//! Sprite rectangles are measured in whole pixels while positions live in
//! `f32` world space. These helpers keep the integer arithmetic explicit at
//! the boundary between the two domains.

/// Halve an integer extent using integer division, then widen it to `f32`.
///
/// The division truncates toward zero, so odd extents lose their remainder
/// and negative extents round toward zero as well.
///
/// # Examples
/// ```
/// use collision::numeric::half_extent;
/// assert!((half_extent(21) - 10.0).abs() < f32::EPSILON);
/// assert!((half_extent(-3) + 1.0).abs() < f32::EPSILON);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "Sprite extents are pixel counts far below the f32 mantissa limit."
)]
#[must_use]
pub const fn half_extent(extent: i32) -> f32 {
    (extent / 2) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 0.0)]
    #[case(20, 10.0)]
    #[case(11, 5.0)]
    #[case(-5, -2.0)]
    fn halves_with_truncation(#[case] extent: i32, #[case] expected: f32) {
        assert!((half_extent(extent) - expected).abs() < f32::EPSILON);
    }
}
