//! Geometry snapshot contract and the concrete `PointSet` implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while assembling a snapshot.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeoError {
    #[error("identifier attribute length {identifiers} does not match point count {points}")]
    IdentifierLengthMismatch { identifiers: usize, points: usize },
}

/// One fully-loaded geometry sample at a single known time.
///
/// Point count and iteration order must be stable for the duration of one
/// engine call. The identifier, when present, is the stable integer attribute
/// used to match "the same point" across snapshots whose point ordering may
/// differ.
pub trait GeometrySnapshot {
    fn point_count(&self) -> usize;

    /// Position of point `index`. `index` must be below `point_count()`.
    fn position(&self, index: usize) -> [f32; 3];

    /// Overwrite the position of point `index`, leaving every other attribute
    /// untouched.
    fn set_position(&mut self, index: usize, position: [f32; 3]);

    /// The stable identifier of point `index`, or `None` when the snapshot
    /// carries no identifier attribute.
    fn identifier(&self, index: usize) -> Option<i64>;

    /// Whether the identifier attribute exists on this snapshot at all.
    fn has_identifiers(&self) -> bool;
}

/// Concrete snapshot: positions plus an optional parallel identifier attribute.
///
/// Serde round-trippable so drivers and tests can load snapshots from JSON
/// fixtures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    positions: Vec<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifiers: Option<Vec<i64>>,
}

impl PointSet {
    /// A snapshot without an identifier attribute.
    pub fn from_positions(positions: Vec<[f32; 3]>) -> Self {
        Self {
            positions,
            identifiers: None,
        }
    }

    /// A snapshot carrying the identifier attribute; the attribute must cover
    /// every point.
    pub fn with_identifiers(
        positions: Vec<[f32; 3]>,
        identifiers: Vec<i64>,
    ) -> Result<Self, GeoError> {
        if identifiers.len() != positions.len() {
            return Err(GeoError::IdentifierLengthMismatch {
                identifiers: identifiers.len(),
                points: positions.len(),
            });
        }
        Ok(Self {
            positions,
            identifiers: Some(identifiers),
        })
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }
}

impl GeometrySnapshot for PointSet {
    fn point_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, index: usize) -> [f32; 3] {
        self.positions[index]
    }

    fn set_position(&mut self, index: usize, position: [f32; 3]) {
        self.positions[index] = position;
    }

    fn identifier(&self, index: usize) -> Option<i64> {
        self.identifiers.as_ref().map(|ids| ids[index])
    }

    fn has_identifiers(&self) -> bool {
        self.identifiers.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_attribute_must_cover_every_point() {
        let err = PointSet::with_identifiers(vec![[0.0; 3], [1.0; 3]], vec![5]).unwrap_err();
        assert_eq!(
            err,
            GeoError::IdentifierLengthMismatch {
                identifiers: 1,
                points: 2
            }
        );
    }

    #[test]
    fn identifiers_are_optional() {
        let plain = PointSet::from_positions(vec![[1.0, 2.0, 3.0]]);
        assert!(!plain.has_identifiers());
        assert_eq!(plain.identifier(0), None);

        let tagged = PointSet::with_identifiers(vec![[1.0, 2.0, 3.0]], vec![7]).unwrap();
        assert!(tagged.has_identifiers());
        assert_eq!(tagged.identifier(0), Some(7));
    }

    #[test]
    fn set_position_leaves_identifiers_untouched() {
        let mut ps = PointSet::with_identifiers(vec![[0.0; 3]], vec![9]).unwrap();
        ps.set_position(0, [4.0, 5.0, 6.0]);
        assert_eq!(ps.position(0), [4.0, 5.0, 6.0]);
        assert_eq!(ps.identifier(0), Some(9));
    }

    #[test]
    fn json_round_trip() {
        let ps = PointSet::with_identifiers(vec![[1.0, 0.0, -1.0], [0.5, 0.5, 0.5]], vec![5, 7])
            .unwrap();
        let json = serde_json::to_string(&ps).unwrap();
        let back: PointSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ps);

        // The identifier attribute is simply absent for untagged snapshots.
        let plain = PointSet::from_positions(vec![[0.0; 3]]);
        let json = serde_json::to_string(&plain).unwrap();
        assert!(!json.contains("identifiers"));
    }
}
