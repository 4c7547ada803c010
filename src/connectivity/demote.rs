//! Dissolving small single-contig scaffolds so their contigs become
//! placement candidates again.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DemotePolicy;
use crate::graph::ScaffoldGraph;
use crate::model::*;

/// Counts from one demotion sweep. A non-zero `demoted` means inter-scaffold
/// edges must be rebuilt by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoteStats {
    pub considered: usize,
    pub singletons: usize,
    pub demoted: usize,
}

impl ScaffoldGraph {
    pub fn demote_small_singletons(&mut self, policy: &DemotePolicy) -> DemoteStats {
        let mut stats = DemoteStats::default();

        for scaffold in self.scaffold_ids() {
            stats.considered += 1;
            let record = self.scaffold(scaffold);
            if record.num_elements() != 1 {
                continue;
            }
            let Some(head) = record.head() else { continue };

            let contig = self.contig(head);
            if contig.num_units > 1 {
                continue;
            }
            stats.singletons += 1;

            if contig.unit_mark == UnitMark::ForcedUnique && !policy.allow_forced_unique {
                continue;
            }
            let clearly_unique = contig.unit_mark != UnitMark::ForcedRepeat
                && contig.coverage_stat > policy.unique_coverage_cutoff;
            if clearly_unique || contig.length.mean > policy.max_length {
                continue;
            }

            debug!(
                contig = %head, scaffold = %scaffold,
                coverage_stat = contig.coverage_stat, length = %contig.length,
                "demoting singleton",
            );
            let contig = self.contig_mut(head);
            contig.flags.unique = false;
            contig.scaffold = None;
            contig.a_next = None;
            contig.b_next = None;
            self.kill_scaffold(scaffold);
            stats.demoted += 1;
        }

        info!(
            considered = stats.considered, singletons = stats.singletons, demoted = stats.demoted,
            "demotion sweep finished",
        );
        stats
    }
}
