//! Scaffold: an ordered, positioned chain of contigs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{ContigId, Length, ScaffoldEdgeId, ScaffoldId};
use crate::storage::Record;

/// Geometry and chain ends of a live scaffold.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chain {
    /// Contig at the scaffold's A end (offset origin).
    pub head: Option<ContigId>,
    /// Contig at the scaffold's B end.
    pub tail: Option<ContigId>,
    pub num_elements: usize,
    /// Upper bound on every member offset, mean and variance independently.
    pub length: Length,
    pub least_square_error: f64,
}

/// A dead scaffold has no chain: its geometry is zero by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaffoldState {
    Live(Chain),
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaffold {
    pub id: ScaffoldId,
    pub state: ScaffoldState,
    /// Inter-scaffold evidence edges touching this scaffold.
    pub edges: SmallVec<[ScaffoldEdgeId; 4]>,
}

impl Scaffold {
    pub fn new(id: ScaffoldId) -> Self {
        Self {
            id,
            state: ScaffoldState::Live(Chain::default()),
            edges: SmallVec::new(),
        }
    }

    pub fn chain(&self) -> Option<&Chain> {
        match &self.state {
            ScaffoldState::Live(chain) => Some(chain),
            ScaffoldState::Dead => None,
        }
    }

    /// # Panics
    ///
    /// If the scaffold is dead.
    pub fn chain_mut(&mut self) -> &mut Chain {
        match &mut self.state {
            ScaffoldState::Live(chain) => chain,
            ScaffoldState::Dead => panic!("scaffold {} is dead", self.id),
        }
    }

    pub fn num_elements(&self) -> usize {
        self.chain().map_or(0, |c| c.num_elements)
    }

    pub fn length(&self) -> Length {
        self.chain().map_or(Length::ZERO, |c| c.length)
    }

    pub fn least_square_error(&self) -> f64 {
        self.chain().map_or(0.0, |c| c.least_square_error)
    }

    pub fn head(&self) -> Option<ContigId> {
        self.chain().and_then(|c| c.head)
    }

    pub fn tail(&self) -> Option<ContigId> {
        self.chain().and_then(|c| c.tail)
    }

    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }
}

impl Record for Scaffold {
    fn is_dead(&self) -> bool {
        matches!(self.state, ScaffoldState::Dead)
    }

    fn tombstone(&mut self) {
        self.state = ScaffoldState::Dead;
    }
}
