//! Breaking a disconnected scaffold into one scaffold per component.

use tracing::{info, warn};

use crate::chain::{ChainDirection, Recontig};
use crate::graph::ScaffoldGraph;
use crate::mates::MatePlacements;
use crate::model::*;

impl ScaffoldGraph {
    /// Split `scaffold` if its evidence does not hold it together. Returns
    /// the component count; with more than one component the original
    /// scaffold is dead afterwards and each component lives in a fresh
    /// scaffold whose origin is its first contig's near end.
    pub fn split_if_disconnected(
        &mut self,
        scaffold: ScaffoldId,
        filter: EdgeFilter,
        mates: &impl MatePlacements,
    ) -> usize {
        let parts = self.analyze_connectivity(scaffold, filter, mates);
        if parts.is_connected() {
            return parts.count;
        }

        let members = self.members(scaffold);
        warn!(scaffold = %scaffold, components = parts.count, members = members.len(), "scaffold is not connected, splitting");

        for component in 0..parts.count {
            let target = self.create_scaffold();
            let mut origin = None;

            for &id in members.iter().filter(|c| parts.label(**c) == Some(component)) {
                let (offset_a, offset_b) = {
                    let contig = self.contig(id);
                    let origin = *origin.get_or_insert(contig.near_offset());
                    (contig.offset_a.rebase(origin), contig.offset_b.rebase(origin))
                };
                self.remove_contig(scaffold, id, false);
                self.insert_contig(target, id, offset_a, offset_b, ChainDirection::Forward, Recontig::Off);
            }

            assert!(!self.scaffold(target).is_empty(), "split produced empty scaffold {target}");
            info!(
                scaffold = %scaffold, into = %target,
                members = self.scaffold(target).num_elements(),
                length = %self.scaffold(target).length(),
                "split component",
            );

            self.kill_if_only_surrogate(target);
        }

        self.kill_scaffold(scaffold);
        parts.count
    }

    /// Tear down a scaffold whose only member is a single-unit surrogate: the
    /// surrogate is deleted and its repeat base forgets it. Returns whether
    /// the scaffold was killed.
    pub fn kill_if_only_surrogate(&mut self, scaffold: ScaffoldId) -> bool {
        let Some(record) = self.scaffold_record(scaffold).filter(|s| s.chain().is_some()) else {
            return false;
        };
        if record.num_elements() != 1 {
            return false;
        }
        let Some(head) = record.head() else {
            return false;
        };

        let contig = self.contig(head);
        let Some(base) = contig.surrogate_of.filter(|_| contig.num_units == 1) else {
            return false;
        };
        warn!(scaffold = %scaffold, contig = %head, base = %base, "scaffold holds only a surrogate, removing it");

        self.remove_contig(scaffold, head, false);
        self.bases.get_mut(base).forget_instance(head);
        self.delete_contig(head);
        self.kill_scaffold(scaffold);
        true
    }
}
