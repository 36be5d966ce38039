//! Transform application direction and its composition rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a transform is applied as described or mathematically inverted.
///
/// Directions compose: a transform nested in an enclosing context resolves
/// its effective direction with [`Direction::combine`] before any operation
/// is instantiated. The composition is the two-element exclusive-or group
/// with [`Direction::Forward`] as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Apply the transform as described.
    #[default]
    Forward,
    /// Apply the mathematical inverse of the transform.
    Inverse,
}

impl Direction {
    /// Resolves the effective direction of a transform inside an outer
    /// context. `self` is the outer (ambient) direction, `inner` the
    /// transform's own. Two inversions cancel:
    ///
    /// ```text
    /// forward . forward = forward
    /// forward . inverse = inverse
    /// inverse . forward = inverse
    /// inverse . inverse = forward
    /// ```
    pub const fn combine(self, inner: Direction) -> Direction {
        match (self, inner) {
            (Direction::Forward, Direction::Forward) => Direction::Forward,
            (Direction::Inverse, Direction::Inverse) => Direction::Forward,
            _ => Direction::Inverse,
        }
    }

    /// Lowercase name used by every textual representation.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Inverse => "inverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_forward_is_identity() {
        assert_eq!(
            Direction::Forward.combine(Direction::Forward),
            Direction::Forward
        );
        assert_eq!(
            Direction::Forward.combine(Direction::Inverse),
            Direction::Inverse
        );
    }

    #[test]
    fn test_combine_equal_directions_cancel() {
        assert_eq!(
            Direction::Inverse.combine(Direction::Inverse),
            Direction::Forward
        );
        assert_eq!(
            Direction::Forward.combine(Direction::Forward),
            Direction::Forward
        );
    }

    #[test]
    fn test_combine_mixed_directions_invert() {
        assert_eq!(
            Direction::Forward.combine(Direction::Inverse),
            Direction::Inverse
        );
        assert_eq!(
            Direction::Inverse.combine(Direction::Forward),
            Direction::Inverse
        );
    }

    #[test]
    fn test_default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }

    #[test]
    fn test_label_matches_display() {
        assert_eq!(Direction::Forward.label(), "forward");
        assert_eq!(Direction::Inverse.label(), "inverse");
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Inverse.to_string(), "inverse");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Direction::Inverse).unwrap();
        assert_eq!(json, "\"inverse\"");
        let back: Direction = serde_json::from_str("\"forward\"").unwrap();
        assert_eq!(back, Direction::Forward);
    }
}
