//! Evidence edges between contigs and between scaffolds.

use serde::{Deserialize, Serialize};

use super::{ContigId, EdgeId, Length, Orientation, ScaffoldEdgeId, ScaffoldId};
use crate::storage::Record;

/// Which end of a contig an edge iteration should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeEnd {
    A,
    B,
    Both,
}

/// Relative orientation of the two contigs an edge joins: the first letter
/// pair is the orientation of `a`, the second that of `b`, reading from `a`
/// toward `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOrientation {
    AbAb,
    AbBa,
    BaAb,
    BaBa,
}

impl PairOrientation {
    fn of_a(self) -> Orientation {
        match self {
            PairOrientation::AbAb | PairOrientation::AbBa => Orientation::AB,
            PairOrientation::BaAb | PairOrientation::BaBa => Orientation::BA,
        }
    }

    fn of_b(self) -> Orientation {
        match self {
            PairOrientation::AbAb | PairOrientation::BaAb => Orientation::AB,
            PairOrientation::AbBa | PairOrientation::BaBa => Orientation::BA,
        }
    }
}

/// Classification assigned by edge-status marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeStatus {
    Raw,
    Untrusted,
    TentativeUntrusted,
    TentativeTrusted,
    Trusted,
}

/// Edge-type restriction for iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeFilter {
    All,
    Trusted,
    #[default]
    TrustedOrTentative,
}

impl EdgeFilter {
    pub fn admits(self, status: EdgeStatus) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::Trusted => status == EdgeStatus::Trusted,
            EdgeFilter::TrustedOrTentative => {
                matches!(status, EdgeStatus::Trusted | EdgeStatus::TentativeTrusted)
            }
        }
    }
}

/// Evidence that two contigs sit at a given distance in a given orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEdge {
    pub id: EdgeId,
    pub a: ContigId,
    pub b: ContigId,
    pub orientation: PairOrientation,
    /// Gap between the facing ends; negative means overlap.
    pub distance: Length,
    /// Number of raw edges merged into this one.
    pub support: u32,
    /// At least one contributing edge is a sequence overlap.
    pub overlap: bool,
    pub bridge: bool,
    pub status: EdgeStatus,
    pub dead: bool,
}

impl EvidenceEdge {
    pub fn new(id: EdgeId, a: ContigId, b: ContigId, distance: Length) -> Self {
        Self {
            id,
            a,
            b,
            orientation: PairOrientation::AbAb,
            distance,
            support: 1,
            overlap: false,
            bridge: false,
            status: EdgeStatus::Trusted,
            dead: false,
        }
    }

    pub fn with_orientation(mut self, orientation: PairOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_support(mut self, support: u32) -> Self {
        self.support = support;
        self
    }

    pub fn with_status(mut self, status: EdgeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn overlap(mut self) -> Self {
        self.overlap = true;
        self
    }

    pub fn bridge(mut self) -> Self {
        self.bridge = true;
        self
    }

    /// Support not counting the overlap itself.
    pub fn weight(&self) -> i64 {
        i64::from(self.support) - i64::from(self.overlap)
    }

    /// An overlap edge with nothing else behind it.
    pub fn is_singleton_overlap(&self) -> bool {
        self.overlap && self.support == 1
    }

    /// The "other" end of the edge from the given contig.
    pub fn other(&self, from: ContigId) -> Option<ContigId> {
        if from == self.a { Some(self.b) }
        else if from == self.b { Some(self.a) }
        else { None }
    }

    /// The end of `contig` this edge leaves from.
    pub fn end_at(&self, contig: ContigId) -> Option<EdgeEnd> {
        // The far end of `a` faces `b`; the near end of `b` faces `a`.
        let end = if contig == self.a {
            match self.orientation.of_a() {
                Orientation::AB => EdgeEnd::B,
                Orientation::BA => EdgeEnd::A,
            }
        } else if contig == self.b {
            match self.orientation.of_b() {
                Orientation::AB => EdgeEnd::A,
                Orientation::BA => EdgeEnd::B,
            }
        } else {
            return None;
        };
        Some(end)
    }

    pub fn touches(&self, contig: ContigId, end: EdgeEnd) -> bool {
        match (end, self.end_at(contig)) {
            (_, None) => false,
            (EdgeEnd::Both, Some(_)) => true,
            (want, Some(got)) => want == got,
        }
    }
}

impl Record for EvidenceEdge {
    fn is_dead(&self) -> bool {
        self.dead
    }

    fn tombstone(&mut self) {
        self.dead = true;
    }
}

/// Evidence between two scaffolds, as used by scaffold merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldEdge {
    pub id: ScaffoldEdgeId,
    pub a: ScaffoldId,
    pub b: ScaffoldId,
    pub distance: Length,
    pub support: u32,
    pub dead: bool,
}

impl Record for ScaffoldEdge {
    fn is_dead(&self) -> bool {
        self.dead
    }

    fn tombstone(&mut self) {
        self.dead = true;
    }
}
