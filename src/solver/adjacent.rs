//! Reference solver: one gap estimate per adjacent pair.
//!
//! Every admitted edge between two chain neighbours is a measurement of the
//! gap between them. The gap is their inverse-variance weighted mean and
//! members are laid out again from the origin, neighbour by neighbour. The
//! least-square error is the mean normalized squared residual of every
//! admitted edge inside the scaffold against the new layout.

use hashbrown::HashMap;
use tracing::debug;

use super::{OffsetSolver, SolveFailure, SolveStatus};
use crate::config::SolveOptions;
use crate::graph::ScaffoldGraph;
use crate::model::*;

/// Variance floor for evidence claiming perfect certainty.
const MIN_VARIANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentGapSolver;

impl AdjacentGapSolver {
    pub fn new() -> Self {
        Self
    }
}

fn weighted_gap(graph: &ScaffoldGraph, left: ContigId, right: ContigId, filter: EdgeFilter) -> Option<Length> {
    let mut weight = 0.0;
    let mut weighted = 0.0;
    for edge in graph
        .contig_edges(left, EdgeEnd::Both, filter)
        .filter(|e| e.other(left) == Some(right))
    {
        let w = 1.0 / edge.distance.variance.max(MIN_VARIANCE);
        weight += w;
        weighted += w * edge.distance.mean;
    }
    (weight > 0.0).then(|| Length::new(weighted / weight, 1.0 / weight))
}

fn current_gap(graph: &ScaffoldGraph, left: ContigId, right: ContigId) -> Length {
    let (far, near) = (graph.contig(left).far_offset(), graph.contig(right).near_offset());
    Length::new(near.mean - far.mean, (near.variance - far.variance).max(0.0))
}

impl OffsetSolver for AdjacentGapSolver {
    fn solve(
        &mut self,
        graph: &mut ScaffoldGraph,
        scaffold: ScaffoldId,
        options: &SolveOptions,
    ) -> SolveStatus {
        let members = graph.members(scaffold);

        let mut gaps = Vec::with_capacity(members.len().saturating_sub(1));
        for pair in members.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let gap = match weighted_gap(graph, left, right, options.filter) {
                Some(gap) if gap.mean.is_finite() => gap,
                Some(_) => return SolveStatus::Failed(SolveFailure::Singular { left, right }),
                None if options.keep_unsupported_gaps => current_gap(graph, left, right),
                None => return SolveStatus::Failed(SolveFailure::NoGapEvidence { left, right }),
            };
            gaps.push(gap);
        }

        let mut cursor = Length::ZERO;
        for (i, &id) in members.iter().enumerate() {
            if i > 0 {
                cursor = cursor + gaps[i - 1];
            }
            let contig = graph.contig_mut(id);
            let (near, far) = (cursor, cursor + contig.length);
            match contig.orientation() {
                Orientation::AB => {
                    contig.offset_a = near;
                    contig.offset_b = far;
                }
                Orientation::BA => {
                    contig.offset_b = near;
                    contig.offset_a = far;
                }
            }
            cursor = far;
        }

        let position: HashMap<ContigId, usize> =
            members.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        let mut residuals = 0.0;
        let mut count = 0usize;
        for (i, &id) in members.iter().enumerate() {
            for edge in graph.contig_edges(id, EdgeEnd::Both, options.filter) {
                if edge.a != id {
                    continue;
                }
                let Some(&j) = position.get(&edge.b) else { continue };
                if i == j {
                    continue;
                }
                let (first, second) = if i < j { (id, edge.b) } else { (edge.b, id) };
                let implied = graph.contig(second).near_offset().mean - graph.contig(first).far_offset().mean;
                let residual = edge.distance.mean - implied;
                residuals += residual * residual / edge.distance.variance.max(MIN_VARIANCE);
                count += 1;
            }
        }
        let error = if count == 0 { 0.0 } else { residuals / count as f64 };

        graph.recompute_length(scaffold);
        graph.scaffold_mut(scaffold).chain_mut().least_square_error = error;
        debug!(scaffold = %scaffold, members = members.len(), edges = count, error, "offsets solved");
        SolveStatus::Ok
    }
}
