//! Alignment guides and the per-computation guide registry.

use serde::{Deserialize, Serialize};

/// Orientation of an alignment guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// A vertical line; `position` is its x coordinate.
    Vertical,
    /// A horizontal line; `position` is its y coordinate.
    Horizontal,
}

/// A transient line showing the coordinate at which the dragged item is
/// currently edge-aligned with the canvas or a peer.
///
/// Guides exist only while a drag is in progress; the full set is replaced
/// on every offset recomputation and cleared when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentGuide {
    pub orientation: Orientation,
    /// Coordinate along the snapping axis (x for vertical, y for horizontal).
    pub position: f64,
    /// Start of the visual extent along the perpendicular axis.
    pub start: f64,
    /// End of the visual extent along the perpendicular axis.
    pub end: f64,
}

/// Distance under which two same-orientation guides count as the same line.
pub const GUIDE_MERGE_DISTANCE: f64 = 0.5;

/// Deduplicating guide collection for a single snap computation.
///
/// Floating-point jitter can produce near-duplicate guides at the same
/// logical alignment line within one pass; the registry suppresses those so
/// the displayed set does not flicker. Guides keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    guides: Vec<AlignmentGuide>,
}

impl GuideSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate guide unless a same-orientation guide already sits
    /// within [`GUIDE_MERGE_DISTANCE`] of its position.
    pub fn insert(&mut self, guide: AlignmentGuide) {
        let duplicate = self.guides.iter().any(|existing| {
            existing.orientation == guide.orientation
                && (existing.position - guide.position).abs() < GUIDE_MERGE_DISTANCE
        });
        if !duplicate {
            self.guides.push(guide);
        }
    }

    /// Number of guides currently held.
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Check if the registry holds no guides.
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Consume the registry, yielding the deduplicated guides in insertion
    /// order.
    pub fn into_guides(self) -> Vec<AlignmentGuide> {
        self.guides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(position: f64) -> AlignmentGuide {
        AlignmentGuide {
            orientation: Orientation::Vertical,
            position,
            start: -100.0,
            end: 100.0,
        }
    }

    #[test]
    fn test_near_duplicate_discarded() {
        let mut set = GuideSet::new();
        set.insert(vertical(50.0));
        set.insert(vertical(50.3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_distinct_positions_kept() {
        let mut set = GuideSet::new();
        set.insert(vertical(50.0));
        set.insert(vertical(51.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_orientation_separates_lines() {
        let mut set = GuideSet::new();
        set.insert(vertical(50.0));
        set.insert(AlignmentGuide {
            orientation: Orientation::Horizontal,
            position: 50.0,
            start: -100.0,
            end: 100.0,
        });
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_first_insert_wins() {
        let mut set = GuideSet::new();
        set.insert(vertical(50.0));
        set.insert(vertical(50.3));
        let guides = set.into_guides();
        assert!((guides[0].position - 50.0).abs() < f64::EPSILON);
    }
}
