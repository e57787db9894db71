//! The anchor-keyed spatial index that backs a board's figure placements.

use std::collections::{BTreeMap, HashMap};

use crate::{board::common::Position, figures::Footprint};

/// A pairing of an anchor [`Position`] and the occupant stored there.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Positioned<T> {
    /// Anchor position of the occupant.
    pub position: Position,
    /// The stored occupant.
    pub element: T,
}

/// Spatial index from anchor position to occupant.
///
/// Each occupant logically claims every position in its bounding box, and the
/// index answers occupancy queries at any claimed position, not only the
/// anchor. A reverse index from covered position to anchor keeps those
/// queries O(1); it is maintained incrementally on every mutation and is not
/// observable through the public surface.
///
/// The index is mechanical: it does not reject occupants whose bounding boxes
/// overlap. Callers that require disjoint occupants (the board layer does)
/// must check [`is_occupied`][PositionMap::is_occupied] before adding.
#[derive(Debug, Clone)]
pub struct PositionMap<T> {
    /// Occupants keyed by anchor, in row-major anchor order.
    entries: BTreeMap<Position, T>,
    /// Covered position back to the anchor of the claiming occupant.
    coverage: HashMap<Position, Position>,
}

impl<T> PositionMap<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            coverage: HashMap::new(),
        }
    }

    /// Number of stored occupants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no occupants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff `position` falls within the bounding box of any stored
    /// occupant, regardless of anchor.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.coverage.contains_key(&position)
    }

    /// Get the occupant whose bounding box covers `position`, if any,
    /// together with its anchor.
    pub fn find_covering(&self, position: Position) -> Option<Positioned<&T>> {
        let anchor = *self.coverage.get(&position)?;
        self.entries.get(&anchor).map(|element| Positioned {
            position: anchor,
            element,
        })
    }

    /// Get an iterator over all stored occupants in row-major anchor order.
    pub fn iter(&self) -> impl Iterator<Item = Positioned<&T>> {
        self.entries.iter().map(|(&position, element)| Positioned { position, element })
    }
}

impl<T: Footprint> PositionMap<T> {
    /// Insert `element` anchored at `position`, claiming every position in
    /// its bounding box. Returns the occupant previously anchored exactly at
    /// `position`, if any; anchors other than `position` are never disturbed.
    pub fn add(&mut self, position: Position, element: T) -> Option<T> {
        let prior = self.try_remove(position).map(|placed| placed.element);
        for covered in element.bounds(position).positions() {
            self.coverage.insert(covered, position);
        }
        self.entries.insert(position, element);
        prior
    }

    /// Remove and return the occupant anchored exactly at `position`,
    /// releasing every position it claimed. Returns `None` if no occupant is
    /// anchored there; a position merely covered by an occupant anchored
    /// elsewhere does not match.
    pub fn try_remove(&mut self, position: Position) -> Option<Positioned<T>> {
        let element = self.entries.remove(&position)?;
        for covered in element.bounds(position).positions() {
            self.coverage.remove(&covered);
        }
        Some(Positioned { position, element })
    }
}

impl<T> Default for PositionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for PositionMap<T> {
    /// Two indexes are equal iff they hold the same (anchor, occupant)
    /// entries. The reverse index is derived state and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for PositionMap<T> {}
