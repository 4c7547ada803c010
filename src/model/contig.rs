//! Contig: a positioned sequence block, member of at most one scaffold.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{BaseId, ContigId, Length, ReadId, ScaffoldId};
use crate::storage::Record;

/// Which end of a contig lies closer to the scaffold origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// A end near, B end far.
    AB,
    /// B end near, A end far.
    BA,
}

/// Manual uniqueness call carried over from unitig classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitMark {
    #[default]
    None,
    ForcedUnique,
    ForcedRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContigFlags {
    pub dead: bool,
    /// Excluded from output until it joins a scaffold.
    pub chaff: bool,
    pub unique: bool,
    /// Contains closure reads whose mates imply connectivity.
    pub closure: bool,
}

/// A contig record.
///
/// Offsets are measured from the scaffold's A end. The chain links point
/// toward the scaffold's A end (`a_next`) and B end (`b_next`), independent
/// of this contig's own orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contig {
    pub id: ContigId,
    pub scaffold: Option<ScaffoldId>,
    pub offset_a: Length,
    pub offset_b: Length,
    /// Intrinsic length.
    pub length: Length,
    pub a_next: Option<ContigId>,
    pub b_next: Option<ContigId>,
    pub flags: ContigFlags,
    /// Set when this contig is an inferred instance of a repeat base.
    pub surrogate_of: Option<BaseId>,
    /// Number of units (unitigs) the contig is built from.
    pub num_units: u32,
    pub closure_reads: SmallVec<[ReadId; 4]>,
    pub coverage_stat: i32,
    pub unit_mark: UnitMark,
}

impl Contig {
    pub fn new(id: ContigId, length: Length) -> Self {
        Self {
            id,
            scaffold: None,
            offset_a: Length::ZERO,
            offset_b: length,
            length,
            a_next: None,
            b_next: None,
            flags: ContigFlags { chaff: true, ..ContigFlags::default() },
            surrogate_of: None,
            num_units: 1,
            closure_reads: SmallVec::new(),
            coverage_stat: 0,
            unit_mark: UnitMark::None,
        }
    }

    pub fn with_closure_reads(mut self, reads: impl IntoIterator<Item = ReadId>) -> Self {
        self.closure_reads = reads.into_iter().collect();
        self.flags.closure = !self.closure_reads.is_empty();
        self
    }

    pub fn with_units(mut self, num_units: u32) -> Self {
        self.num_units = num_units;
        self
    }

    pub fn with_coverage_stat(mut self, coverage_stat: i32) -> Self {
        self.coverage_stat = coverage_stat;
        self
    }

    pub fn with_unit_mark(mut self, mark: UnitMark) -> Self {
        self.unit_mark = mark;
        self
    }

    pub fn orientation(&self) -> Orientation {
        if self.offset_a.mean > self.offset_b.mean {
            Orientation::BA
        } else {
            Orientation::AB
        }
    }

    /// Offset of the end nearest the scaffold origin.
    pub fn near_offset(&self) -> Length {
        match self.orientation() {
            Orientation::AB => self.offset_a,
            Orientation::BA => self.offset_b,
        }
    }

    /// Offset of the end furthest from the scaffold origin.
    pub fn far_offset(&self) -> Length {
        match self.orientation() {
            Orientation::AB => self.offset_b,
            Orientation::BA => self.offset_a,
        }
    }

    /// `min(offset_a.mean, offset_b.mean)`, the chain sort key.
    pub fn min_mean(&self) -> f64 {
        self.offset_a.mean.min(self.offset_b.mean)
    }

    pub fn max_mean(&self) -> f64 {
        self.offset_a.mean.max(self.offset_b.mean)
    }

    pub fn is_surrogate(&self) -> bool {
        self.surrogate_of.is_some()
    }

    pub fn is_scaffolded(&self) -> bool {
        self.scaffold.is_some()
    }
}

impl Record for Contig {
    fn is_dead(&self) -> bool {
        self.flags.dead
    }

    fn tombstone(&mut self) {
        self.flags.dead = true;
        self.scaffold = None;
        self.a_next = None;
        self.b_next = None;
    }
}

/// The repeat unit surrogate contigs are placed copies of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatBase {
    pub id: BaseId,
    pub instances: SmallVec<[ContigId; 2]>,
    pub num_reads: u32,
    pub chaff: bool,
    pub dead: bool,
}

impl RepeatBase {
    pub fn new(id: BaseId, num_reads: u32) -> Self {
        Self {
            id,
            instances: SmallVec::new(),
            num_reads,
            chaff: false,
            dead: false,
        }
    }

    /// Drop one placed instance. When none remain the base goes back to
    /// being a candidate for placement, or to chaff if it is a lone read.
    pub fn forget_instance(&mut self, contig: ContigId) {
        self.instances.retain(|c| *c != contig);
        if self.instances.is_empty() {
            self.chaff = self.num_reads == 1;
        }
    }
}

impl Record for RepeatBase {
    fn is_dead(&self) -> bool {
        self.dead
    }

    fn tombstone(&mut self) {
        self.dead = true;
    }
}
