//! Vertical range used to scale normalized samples into heights.

/// Minimum and maximum height a normalized sample maps onto.
///
/// A normalized sample `n` in `[0, 1]` becomes `min + n * (max - min)`.
///
/// `max >= min` is a caller contract. It is checked with `debug_assert!`,
/// so a violation panics in debug builds. Release builds do not check it and
/// the heights produced from an inverted range are unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    /// Height of a normalized sample of `0.0`.
    pub min: f32,
    /// Height of a normalized sample of `1.0`.
    pub max: f32,
}

impl HeightRange {
    /// Create a new height range.
    ///
    /// # Panics
    ///
    /// In debug builds, if `max < min`.
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(
            max >= min,
            "maxHeight ({max}) must be greater than or equal to minHeight ({min})"
        );
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn scale(&self) -> f32 {
        self.max - self.min
    }

    /// Map a normalized sample onto this range.
    #[inline]
    pub fn apply(&self, normalized: f32) -> f32 {
        self.min + normalized * self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_apply() {
        let range = HeightRange::new(-10.0, 30.0);
        assert_eq!(range.scale(), 40.0);
        assert_eq!(range.apply(0.0), -10.0);
        assert_eq!(range.apply(1.0), 30.0);
        assert_eq!(range.apply(0.5), 10.0);
    }

    #[test]
    fn test_flat_range() {
        let range = HeightRange::new(5.0, 5.0);
        assert_eq!(range.scale(), 0.0);
        assert_eq!(range.apply(0.75), 5.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be greater than or equal to minHeight")]
    fn test_inverted_range_panics_in_debug() {
        let _ = HeightRange::new(10.0, 0.0);
    }
}
