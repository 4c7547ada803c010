//! Where the mates of closure reads ended up.
//!
//! Closure reads are placed by an external step that records, per read, the
//! pair of reads bounding its placement. Connectivity analysis only needs
//! the contigs those bounding reads landed in.

use hashbrown::HashMap;

use crate::model::{ContigId, ReadId};

pub trait MatePlacements {
    /// Contigs holding the left and right bounding reads of `read`, or
    /// `None` if the read has no placement or either bound is unplaced.
    fn placement_of(&self, read: ReadId) -> Option<(ContigId, ContigId)>;
}

/// No closure read has a placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlacements;

impl MatePlacements for NoPlacements {
    fn placement_of(&self, _read: ReadId) -> Option<(ContigId, ContigId)> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlacementTable {
    placements: HashMap<ReadId, (ContigId, ContigId)>,
}

impl PlacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, read: ReadId, left: ContigId, right: ContigId) {
        self.placements.insert(read, (left, right));
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl MatePlacements for PlacementTable {
    fn placement_of(&self, read: ReadId) -> Option<(ContigId, ContigId)> {
        self.placements.get(&read).copied()
    }
}

impl FromIterator<(ReadId, ContigId, ContigId)> for PlacementTable {
    fn from_iter<I: IntoIterator<Item = (ReadId, ContigId, ContigId)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (read, left, right) in iter {
            table.insert(read, left, right);
        }
        table
    }
}
