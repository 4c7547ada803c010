//! # Connectivity
//!
//! Decides whether the evidence inside a scaffold still holds all of its
//! contigs together, and splits it when it does not.
//!
//! Two kinds of evidence join contigs:
//!
//! | Evidence | Joins |
//! |----------|-------|
//! | admitted evidence edge, both ends in the scaffold | its two ends |
//! | closure read whose bounding mates both sit in the scaffold | the closure contig and both mate contigs |
//!
//! An overlap edge with no other support, or a bridge edge of weight one,
//! never joins anything.

pub mod union_find;
pub mod split;
pub mod demote;

use hashbrown::HashMap;
use tracing::warn;

use crate::graph::ScaffoldGraph;
use crate::mates::MatePlacements;
use crate::model::*;

pub use demote::DemoteStats;
pub use union_find::UnionFind;

/// Component partition of one scaffold, valid until the scaffold changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components {
    pub count: usize,
    /// Dense label `0..count`, numbered in chain order of first appearance.
    pub labels: HashMap<ContigId, usize>,
}

impl Components {
    pub fn label(&self, contig: ContigId) -> Option<usize> {
        self.labels.get(&contig).copied()
    }

    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }
}

impl ScaffoldGraph {
    /// Partition the members of `scaffold` into connected components.
    pub fn analyze_connectivity(
        &self,
        scaffold: ScaffoldId,
        filter: EdgeFilter,
        mates: &impl MatePlacements,
    ) -> Components {
        let members = self.members(scaffold);
        let index: HashMap<ContigId, usize> =
            members.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        let mut sets = UnionFind::new(members.len());

        for (i, &id) in members.iter().enumerate() {
            for edge in self.contig_edges(id, EdgeEnd::Both, filter) {
                if edge.a != id {
                    continue;
                }
                if edge.is_singleton_overlap() || (edge.bridge && edge.weight() == 1) {
                    continue;
                }
                if let Some(&j) = index.get(&edge.b) {
                    sets.union(i, j);
                }
            }

            let contig = self.contig(id);
            if !contig.flags.closure {
                continue;
            }
            for read in &contig.closure_reads {
                let Some((left, right)) = mates.placement_of(*read) else {
                    continue;
                };
                let (Some(left), Some(right)) = (self.try_contig(left), self.try_contig(right)) else {
                    continue;
                };
                // The right mate is only compared to the left, not to this contig.
                if contig.scaffold != left.scaffold || left.scaffold != right.scaffold {
                    continue;
                }
                if let (Some(&l), Some(&r)) = (index.get(&left.id), index.get(&right.id)) {
                    sets.union(i, l);
                    sets.union(i, r);
                }
            }
        }

        let count = sets.renumber();
        let labels = members
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, sets.component(i)))
            .collect();
        Components { count, labels }
    }

    /// Trusted edges of `contig` whose other end is not in the same
    /// scaffold. Each one is logged.
    pub fn check_trusted_edges(&self, contig: ContigId) -> Vec<EdgeId> {
        let scaffold = self.contig(contig).scaffold;
        let mut bad = Vec::new();
        for edge in self.contig_edges(contig, EdgeEnd::Both, EdgeFilter::TrustedOrTentative) {
            let Some(other) = edge.other(contig) else { continue };
            let other_scaffold = self.contig(other).scaffold;
            if other_scaffold != scaffold {
                warn!(
                    edge = %edge.id, contig = %contig, scaffold = ?scaffold,
                    other = %other, other_scaffold = ?other_scaffold,
                    support = edge.support, status = ?edge.status,
                    "trusted edge leaves scaffold",
                );
                bad.push(edge.id);
            }
        }
        bad
    }

    /// [`ScaffoldGraph::check_trusted_edges`] over every scaffolded contig.
    pub fn check_all_trusted_edges(&self) -> Vec<EdgeId> {
        self.contigs
            .iter_live()
            .filter(|c| c.is_scaffolded())
            .flat_map(|c| self.check_trusted_edges(c.id))
            .collect()
    }

    /// Number of trusted or tentatively trusted edges from `contig` to
    /// contigs placed in a scaffold other than `scaffold`.
    pub fn count_foreign_edges(&self, scaffold: ScaffoldId, contig: ContigId) -> usize {
        self.contig_edges(contig, EdgeEnd::Both, EdgeFilter::TrustedOrTentative)
            .filter_map(|e| e.other(contig))
            .filter(|other| {
                self.contig(*other).scaffold.is_some_and(|s| s != scaffold)
            })
            .count()
    }
}
