use crate::error::TenPatchError;
use std::fmt;

/// Axis a set of stretch areas applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left-to-right, pixel 0 is the left-most column of the region
    Horizontal,
    /// Top-to-bottom, pixel 0 is the top-most row of the region
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Ordered list of inclusive pixel spans that stretch (or tile) along one
/// axis. `(0, 2)` marks the first three pixel columns/rows as stretchable.
///
/// Values are range-checked against the current source region inside every
/// draw call, not here: the region can change between frames (animation)
/// while the areas stay fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StretchAreas {
    pairs: Vec<(i32, i32)>,
}

impl StretchAreas {
    /// Build from explicit `(start, end)` pairs.
    pub fn from_pairs(pairs: Vec<(i32, i32)>) -> Self {
        StretchAreas { pairs }
    }

    /// Build from a flat list as found in definition files: `[s0, e0, s1, e1, ..]`.
    /// An odd number of values is a malformed configuration.
    pub fn from_flat(values: &[i32]) -> Result<Self, TenPatchError> {
        if values.len() % 2 != 0 {
            return Err(TenPatchError::OddStretchValues(values.len()));
        }
        Ok(StretchAreas {
            pairs: values.chunks(2).map(|c| (c[0], c[1])).collect(),
        })
    }

    /// The inclusive spans, in declaration order.
    #[inline]
    pub fn pairs(&self) -> &[(i32, i32)] {
        &self.pairs
    }

    /// True when no spans are declared (the whole axis is fixed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sum of inclusive span lengths in pixels.
    pub fn total(&self) -> i32 {
        self.pairs.iter().map(|(s, e)| e - s + 1).sum()
    }

    /// Check every value against the region extent: in range, pairs
    /// non-descending, each pair starting strictly after the previous one.
    /// An empty list is valid (no elastic cells), as is a list covering the
    /// whole extent (no fixed cells).
    pub fn validate(&self, extent: u32, axis: Axis) -> Result<(), TenPatchError> {
        let mut prev: Option<i32> = None;
        for &(start, end) in &self.pairs {
            for value in [start, end] {
                if value < 0 || value as i64 >= extent as i64 {
                    return Err(TenPatchError::StretchOutOfRange {
                        axis,
                        value,
                        extent,
                    });
                }
            }
            if end < start {
                return Err(TenPatchError::StretchNotAscending {
                    axis,
                    prev: start,
                    next: end,
                });
            }
            if let Some(p) = prev {
                if start <= p {
                    return Err(TenPatchError::StretchNotAscending {
                        axis,
                        prev: p,
                        next: start,
                    });
                }
            }
            prev = Some(end);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_pairs_up_values() {
        let areas = StretchAreas::from_flat(&[0, 2, 5, 8]).unwrap();
        assert_eq!(areas.pairs(), &[(0, 2), (5, 8)]);
        assert_eq!(areas.total(), 7);
    }

    #[test]
    fn from_flat_rejects_odd_length() {
        let err = StretchAreas::from_flat(&[0, 2, 5]).unwrap_err();
        assert!(matches!(err, TenPatchError::OddStretchValues(3)));
    }

    #[test]
    fn validate_accepts_single_pixel_span() {
        let areas = StretchAreas::from_pairs(vec![(4, 4)]);
        assert!(areas.validate(10, Axis::Horizontal).is_ok());
        assert_eq!(areas.total(), 1);
    }

    #[test]
    fn validate_rejects_descending_pair() {
        let areas = StretchAreas::from_pairs(vec![(5, 3)]);
        let err = areas.validate(10, Axis::Horizontal).unwrap_err();
        assert!(matches!(err, TenPatchError::StretchNotAscending { .. }));
    }

    #[test]
    fn validate_rejects_value_at_extent() {
        let areas = StretchAreas::from_pairs(vec![(0, 10)]);
        let err = areas.validate(10, Axis::Vertical).unwrap_err();
        assert!(matches!(
            err,
            TenPatchError::StretchOutOfRange {
                axis: Axis::Vertical,
                value: 10,
                extent: 10
            }
        ));
    }

    #[test]
    fn validate_rejects_touching_pairs() {
        // second span must start strictly after the first one ends
        let areas = StretchAreas::from_pairs(vec![(0, 3), (3, 5)]);
        assert!(areas.validate(10, Axis::Horizontal).is_err());
        let areas = StretchAreas::from_pairs(vec![(0, 3), (4, 5)]);
        assert!(areas.validate(10, Axis::Horizontal).is_ok());
    }

    #[test]
    fn empty_and_full_coverage_are_valid() {
        let empty = StretchAreas::default();
        assert!(empty.validate(10, Axis::Horizontal).is_ok());
        assert_eq!(empty.total(), 0);

        let full = StretchAreas::from_pairs(vec![(0, 9)]);
        assert!(full.validate(10, Axis::Horizontal).is_ok());
        assert_eq!(full.total(), 10);
    }
}
