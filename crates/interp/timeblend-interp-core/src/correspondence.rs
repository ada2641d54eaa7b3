//! Point correspondence across snapshots via the stable identifier attribute.

use hashbrown::HashMap;
use timeblend_geo_core::GeometrySnapshot;

/// Identifier → point index within one snapshot.
///
/// Built once per snapshot right before an engine build and typically
/// discarded right after. Indices refer to the snapshot the index was built
/// from; the index never outlives a borrow of it inside the engine.
#[derive(Clone, Debug, Default)]
pub struct CorrespondenceIndex {
    by_id: HashMap<i64, usize>,
    available: bool,
}

impl CorrespondenceIndex {
    /// Index every identified point of `snapshot`.
    ///
    /// When the snapshot carries no identifier attribute the index reports
    /// itself unavailable and callers must fall back to ordinal (same-index)
    /// correspondence. First occurrence wins on duplicate identifiers.
    pub fn build<S: GeometrySnapshot>(snapshot: &S) -> Self {
        if !snapshot.has_identifiers() {
            return Self {
                by_id: HashMap::new(),
                available: false,
            };
        }
        let mut by_id = HashMap::with_capacity(snapshot.point_count());
        for i in 0..snapshot.point_count() {
            if let Some(id) = snapshot.identifier(i) {
                by_id.entry(id).or_insert(i);
            }
        }
        Self {
            by_id,
            available: true,
        }
    }

    /// Whether the source snapshot carried the identifier attribute.
    pub fn has_identifiers(&self) -> bool {
        self.available
    }

    /// The point index carrying `identifier`, or `None` when absent.
    pub fn find(&self, identifier: i64) -> Option<usize> {
        self.by_id.get(&identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
