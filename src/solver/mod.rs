//! # Offset Solver
//!
//! Recomputes member offsets of one scaffold from the evidence between its
//! contigs and records the resulting least-square error on the scaffold.
//! Repair calls the solver after every reinsertion round.

pub mod adjacent;

use crate::config::SolveOptions;
use crate::graph::ScaffoldGraph;
use crate::model::{ContigId, ScaffoldId};

pub use adjacent::AdjacentGapSolver;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveStatus {
    Ok,
    Failed(SolveFailure),
}

impl SolveStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, SolveStatus::Ok)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveFailure {
    #[error("no gap evidence between contigs {left} and {right}")]
    NoGapEvidence { left: ContigId, right: ContigId },

    #[error("gap evidence between contigs {left} and {right} does not determine a distance")]
    Singular { left: ContigId, right: ContigId },
}

pub trait OffsetSolver {
    /// Re-derive every member offset of `scaffold`, then store the fit's
    /// least-square error on the scaffold. On failure the scaffold may be
    /// left partially updated.
    fn solve(
        &mut self,
        graph: &mut ScaffoldGraph,
        scaffold: ScaffoldId,
        options: &SolveOptions,
    ) -> SolveStatus;
}

impl<S: OffsetSolver + ?Sized> OffsetSolver for &mut S {
    fn solve(
        &mut self,
        graph: &mut ScaffoldGraph,
        scaffold: ScaffoldId,
        options: &SolveOptions,
    ) -> SolveStatus {
        (**self).solve(graph, scaffold, options)
    }
}
