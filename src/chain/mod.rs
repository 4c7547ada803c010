//! # Chain Maintenance
//!
//! Each live scaffold threads its contigs on a doubly linked list ordered by
//! `min(offset_a.mean, offset_b.mean)`. `a_next` points toward the scaffold
//! A end (the origin), `b_next` toward the B end.
//!
//! ```text
//!   head                                      tail
//!    │                                         │
//!   [c0] ⇄ b_next/a_next ⇄ [c1] ⇄ … ⇄ [cN]
//!   min 0          ≤       min …   ≤   min …
//! ```
//!
//! Insertions splice a contig in front of the first member whose sort key
//! exceeds its own. Removals relink neighbours and, when the bound may have
//! shrunk, re-derive the scaffold length from the members.

pub mod length;

use tracing::{debug, info, warn};

use crate::graph::ScaffoldGraph;
use crate::model::*;
use crate::storage::NodeStore;

// ============================================================================
// Traversal
// ============================================================================

/// Which end of the chain a walk starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainDirection {
    /// Head to tail, following `b_next`.
    Forward,
    /// Tail to head, following `a_next`.
    Reverse,
}

/// Walks the member ids of one scaffold.
///
/// # Panics
///
/// On a link to a dead contig or a cycle: the chain is malformed.
pub struct ChainIter<'g> {
    contigs: &'g NodeStore<ContigId, Contig>,
    next: Option<ContigId>,
    direction: ChainDirection,
    remaining: usize,
}

impl Iterator for ChainIter<'_> {
    type Item = ContigId;

    fn next(&mut self) -> Option<ContigId> {
        let id = self.next?;
        assert!(self.remaining > 0, "chain cycle detected at contig {id}");
        self.remaining -= 1;

        let contig = self.contigs.get(id);
        self.next = match self.direction {
            ChainDirection::Forward => contig.b_next,
            ChainDirection::Reverse => contig.a_next,
        };
        Some(id)
    }
}

// ============================================================================
// Re-contigging hook
// ============================================================================

/// Fuses a contig being placed with neighbours it has qualifying evidence
/// to. Implemented by the contigging phase.
pub trait ContigMerger {
    /// Called after the contig's offsets are recorded and before it is
    /// linked. Return true if the merger has placed the result itself and
    /// the plain insertion must be skipped.
    fn merge_on_insert(
        &mut self,
        graph: &mut ScaffoldGraph,
        scaffold: ScaffoldId,
        contig: ContigId,
    ) -> bool;
}

/// Whether an insertion may fuse the contig with dovetailing neighbours.
pub enum Recontig<'m> {
    Off,
    Dovetail(&'m mut dyn ContigMerger),
}

enum Splice {
    Empty,
    Before(ContigId),
    Append(ContigId),
}

// ============================================================================
// ScaffoldGraph: chain operations
// ============================================================================

impl ScaffoldGraph {
    /// Walk the members of `scaffold`.
    ///
    /// # Panics
    ///
    /// If the scaffold is dead.
    pub fn chain(&self, scaffold: ScaffoldId, direction: ChainDirection) -> ChainIter<'_> {
        let record = self.scaffold(scaffold);
        let start = match direction {
            ChainDirection::Forward => record.head(),
            ChainDirection::Reverse => record.tail(),
        };
        ChainIter {
            contigs: &self.contigs,
            next: start,
            direction,
            remaining: self.contigs.len(),
        }
    }

    /// Member ids head to tail, detached from the graph borrow.
    pub fn members(&self, scaffold: ScaffoldId) -> Vec<ContigId> {
        self.chain(scaffold, ChainDirection::Forward).collect()
    }

    pub fn contains_contig(&self, scaffold: ScaffoldId, contig: ContigId) -> bool {
        self.chain(scaffold, ChainDirection::Forward).any(|c| c == contig)
    }

    /// Place `contig` in `scaffold` with the given end offsets.
    ///
    /// Inserting a contig already on the chain is a no-op. Offsets that
    /// disagree with the contig's own length are logged; a variance mismatch
    /// is repaired by rewriting the far end's variance.
    ///
    /// `direction` picks the end the insertion scan starts from. Only a
    /// forward scan can splice into the middle of a chain; a reverse scan is
    /// only valid when the contig belongs at the tail.
    ///
    /// # Panics
    ///
    /// If the scaffold or contig is dead, if the contig sits in another
    /// scaffold, or if a reverse scan would need to splice.
    pub fn insert_contig(
        &mut self,
        scaffold: ScaffoldId,
        contig: ContigId,
        mut offset_a: Length,
        mut offset_b: Length,
        direction: ChainDirection,
        recontig: Recontig<'_>,
    ) {
        assert!(self.scaffold_record(scaffold).is_some_and(|s| s.chain().is_some()),
            "insert into dead scaffold {scaffold}");
        assert!(self.try_contig(contig).is_some(), "insert of dead contig {contig}");

        let tolerances = self.config.insert.clone();
        let length = self.contig(contig).length;

        let end_variance = (offset_a.variance - offset_b.variance).abs();
        if (end_variance - length.variance).abs() > tolerances.variance_slack {
            warn!(
                contig = %contig, scaffold = %scaffold,
                offset_a = %offset_a, offset_b = %offset_b, length = %length,
                "end variances disagree with contig length, fixing far end",
            );
            if offset_a.mean < offset_b.mean {
                offset_b.variance = offset_a.variance + length.variance;
            } else {
                offset_a.variance = offset_b.variance + length.variance;
            }
        }

        let extent = (offset_a.mean - offset_b.mean).abs();
        if extent > tolerances.length_ratio * length.mean {
            warn!(
                contig = %contig, scaffold = %scaffold, extent, length = length.mean,
                "placed extent much longer than contig",
            );
        }

        if self.contains_contig(scaffold, contig) {
            return;
        }
        if let Some(other) = self.contig(contig).scaffold {
            panic!("contig {contig} already belongs to scaffold {other}");
        }

        {
            let record = self.contig_mut(contig);
            record.offset_a = offset_a;
            record.offset_b = offset_b;
        }

        if let Recontig::Dovetail(merger) = recontig {
            if merger.merge_on_insert(self, scaffold, contig) {
                debug!(contig = %contig, scaffold = %scaffold, "placed by re-contigging");
                return;
            }
        }

        self.link_into_chain(scaffold, contig, direction);
    }

    fn link_into_chain(&mut self, scaffold: ScaffoldId, contig: ContigId, direction: ChainDirection) {
        let (key, far) = {
            let record = self.contig(contig);
            (record.min_mean(), record.far_offset())
        };
        let (head, tail) = {
            let record = self.scaffold(scaffold);
            (record.head(), record.tail())
        };

        let splice = match (head, tail) {
            (None, _) | (_, None) => Splice::Empty,
            (Some(_), Some(tail)) => match direction {
                ChainDirection::Forward => self
                    .chain(scaffold, ChainDirection::Forward)
                    .find(|c| self.contig(*c).min_mean() > key)
                    .map_or(Splice::Append(tail), Splice::Before),
                ChainDirection::Reverse => {
                    assert!(
                        self.contig(tail).min_mean() <= key,
                        "reverse scan cannot place contig {contig} inside scaffold {scaffold}",
                    );
                    Splice::Append(tail)
                }
            },
        };

        match splice {
            Splice::Empty => {
                let record = self.contig_mut(contig);
                record.a_next = None;
                record.b_next = None;
                let chain = self.scaffold_mut(scaffold).chain_mut();
                chain.head = Some(contig);
                chain.tail = Some(contig);
                chain.length = far;
            }
            Splice::Before(next) => {
                let prev = self.contig(next).a_next;
                {
                    let record = self.contig_mut(contig);
                    record.a_next = prev;
                    record.b_next = Some(next);
                }
                if let Some(prev) = prev {
                    self.contig_mut(prev).b_next = Some(contig);
                }
                self.contig_mut(next).a_next = Some(contig);
                let chain = self.scaffold_mut(scaffold).chain_mut();
                if chain.head == Some(next) {
                    chain.head = Some(contig);
                }
            }
            Splice::Append(tail) => {
                self.contig_mut(tail).b_next = Some(contig);
                let record = self.contig_mut(contig);
                record.a_next = Some(tail);
                record.b_next = None;
                self.scaffold_mut(scaffold).chain_mut().tail = Some(contig);
            }
        }

        {
            let record = self.contig_mut(contig);
            record.scaffold = Some(scaffold);
            record.flags.chaff = false;
        }
        let chain = self.scaffold_mut(scaffold).chain_mut();
        chain.num_elements += 1;
        // Containment decouples the largest mean from the largest variance.
        chain.length = chain.length.max_components(far);

        if let Some(prev) = self.contig(contig).a_next {
            let prev = self.contig(prev);
            let record = self.contig(contig);
            let prev_variance = prev.offset_a.variance.max(prev.offset_b.variance);
            let own_variance = record.offset_a.variance.min(record.offset_b.variance);
            if prev_variance > own_variance {
                debug!(
                    contig = %contig, previous = %prev.id, prev_variance, own_variance,
                    "variance decreases along chain",
                );
            }
        }
        debug!(
            contig = %contig, scaffold = %scaffold,
            a_next = ?self.contig(contig).a_next, b_next = ?self.contig(contig).b_next,
            "inserted",
        );
    }

    /// Unlink `contig` from `scaffold`.
    ///
    /// With `adjust_positions`, removing the head moves the scaffold origin
    /// to the new head so coordinates keep starting at zero. Returns whether
    /// the caller must re-check connectivity; currently always false.
    ///
    /// # Panics
    ///
    /// If the scaffold is dead or empty, or the contig is not a member.
    pub fn remove_contig(&mut self, scaffold: ScaffoldId, contig: ContigId, adjust_positions: bool) -> bool {
        let (head, tail, length) = {
            let record = self
                .scaffold_record(scaffold)
                .filter(|s| s.chain().is_some())
                .unwrap_or_else(|| panic!("remove from dead scaffold {scaffold}"));
            (record.head(), record.tail(), record.length())
        };
        assert!(head.is_some() && tail.is_some(), "remove from empty scaffold {scaffold}");

        let (a_next, b_next, far_mean) = {
            let record = self.contig(contig);
            assert_eq!(record.scaffold, Some(scaffold), "contig {contig} is not in scaffold {scaffold}");
            (record.a_next, record.b_next, record.max_mean())
        };

        let mut interior = true;
        let mut new_origin = None;

        if head == Some(contig) {
            self.scaffold_mut(scaffold).chain_mut().head = b_next;
            if let Some(next) = b_next {
                let record = self.contig_mut(next);
                assert_eq!(record.a_next, Some(contig), "broken link at contig {next}");
                record.a_next = None;
                new_origin = Some((next, record.near_offset()));
            }
            interior = false;
        }

        if tail == Some(contig) {
            self.scaffold_mut(scaffold).chain_mut().tail = a_next;
            if let Some(prev) = a_next {
                let record = self.contig_mut(prev);
                assert_eq!(record.b_next, Some(contig), "broken link at contig {prev}");
                record.b_next = None;
                // The new tail need not carry the largest offset.
                self.recompute_length(scaffold);
            }
            interior = false;
        }

        if interior {
            let prev = a_next.unwrap_or_else(|| panic!("interior contig {contig} has no predecessor"));
            let next = b_next.unwrap_or_else(|| panic!("interior contig {contig} has no successor"));
            self.contig_mut(next).a_next = Some(prev);
            self.contig_mut(prev).b_next = Some(next);

            if (far_mean - length.mean).abs() < self.config.remove.recompute_window {
                self.recompute_length(scaffold);
            }
        }

        {
            let record = self.contig_mut(contig);
            record.scaffold = None;
            record.a_next = None;
            record.b_next = None;
        }

        if let (Some((next, origin)), true) = (new_origin, adjust_positions) {
            self.shift_offsets(scaffold, next, origin);
            info!(
                contig = %contig, scaffold = %scaffold, origin = %origin,
                length = %self.scaffold(scaffold).length(),
                "removed head, scaffold renormalized",
            );
        }

        let chain = self.scaffold_mut(scaffold).chain_mut();
        chain.num_elements -= 1;
        if chain.num_elements == 0 {
            chain.length = Length::ZERO;
        }
        false
    }

    /// Move every member from `from` to the tail, and the scaffold length,
    /// so that `origin` becomes position zero.
    pub fn shift_offsets(&mut self, scaffold: ScaffoldId, from: ContigId, origin: Length) {
        let mut cursor = Some(from);
        let mut steps = self.contigs.len();
        while let Some(id) = cursor {
            assert!(steps > 0, "chain cycle detected at contig {id}");
            steps -= 1;

            let record = self.contig_mut(id);
            assert_eq!(record.scaffold, Some(scaffold), "contig {id} is not in scaffold {scaffold}");
            record.offset_a = record.offset_a.rebase(origin);
            record.offset_b = record.offset_b.rebase(origin);
            cursor = record.b_next;
        }
        let chain = self.scaffold_mut(scaffold).chain_mut();
        chain.length = chain.length.rebase(origin);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn place(graph: &mut ScaffoldGraph, s: ScaffoldId, a: (f64, f64), b: (f64, f64)) -> ContigId {
        let length = Length::new((b.0 - a.0).abs(), (b.1 - a.1).abs());
        let c = graph.add_contig(length);
        graph.insert_contig(
            s, c, Length::new(a.0, a.1), Length::new(b.0, b.1),
            ChainDirection::Forward, Recontig::Off,
        );
        c
    }

    struct Absorb;

    impl ContigMerger for Absorb {
        fn merge_on_insert(&mut self, _: &mut ScaffoldGraph, _: ScaffoldId, _: ContigId) -> bool {
            true
        }
    }

    struct Decline(usize);

    impl ContigMerger for Decline {
        fn merge_on_insert(&mut self, _: &mut ScaffoldGraph, _: ScaffoldId, _: ContigId) -> bool {
            self.0 += 1;
            false
        }
    }

    #[test]
    fn test_insert_orders_by_min_offset() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = place(&mut graph, s, (100.0, 10.0), (250.0, 25.0));
        let c = place(&mut graph, s, (50.0, 5.0), (80.0, 8.0));

        assert_eq!(graph.members(s), vec![a, c, b]);
        assert_eq!(graph.chain(s, ChainDirection::Reverse).collect::<Vec<_>>(), vec![b, c, a]);
        assert_eq!(graph.scaffold(s).length(), Length::new(250.0, 25.0));
        assert_eq!(graph.scaffold(s).num_elements(), 3);
        assert!(!graph.contig(c).flags.chaff);
    }

    #[test]
    fn test_insert_before_head_moves_head() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let b = place(&mut graph, s, (100.0, 10.0), (200.0, 20.0));
        let a = place(&mut graph, s, (10.0, 1.0), (60.0, 6.0));

        assert_eq!(graph.scaffold(s).head(), Some(a));
        assert_eq!(graph.contig(b).a_next, Some(a));
        assert_eq!(graph.contig(a).a_next, None);
    }

    #[test]
    fn test_reversed_contig_sorts_by_near_end() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = place(&mut graph, s, (300.0, 30.0), (150.0, 15.0));
        let c = place(&mut graph, s, (120.0, 12.0), (140.0, 14.0));

        assert_eq!(graph.members(s), vec![a, c, b]);
        assert_eq!(graph.scaffold(s).length(), Length::new(300.0, 30.0));
    }

    #[test]
    fn test_variance_mismatch_rewrites_far_end() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let c = graph.add_contig(Length::new(100.0, 10.0));
        graph.insert_contig(
            s, c, Length::new(0.0, 2.0), Length::new(100.0, 40.0),
            ChainDirection::Forward, Recontig::Off,
        );

        assert_eq!(graph.contig(c).offset_b, Length::new(100.0, 12.0));
        assert_eq!(graph.scaffold(s).length(), Length::new(100.0, 12.0));
    }

    #[test]
    fn test_variance_mismatch_on_reversed_contig_rewrites_offset_a() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let c = graph.add_contig(Length::new(100.0, 10.0));
        graph.insert_contig(
            s, c, Length::new(100.0, 40.0), Length::new(0.0, 2.0),
            ChainDirection::Forward, Recontig::Off,
        );

        let contig = graph.contig(c);
        assert_eq!(contig.offset_b, Length::new(0.0, 2.0));
        assert_eq!(contig.offset_a.variance, contig.offset_b.variance + contig.length.variance);
        assert_eq!(contig.offset_a, Length::new(100.0, 12.0));
        assert_eq!(graph.scaffold(s).length(), Length::new(100.0, 12.0));
    }

    #[test]
    fn test_reinsert_is_noop() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let _b = place(&mut graph, s, (100.0, 10.0), (250.0, 25.0));
        let before = graph.scaffold(s).clone();

        graph.insert_contig(
            s, a, Length::new(500.0, 50.0), Length::new(600.0, 60.0),
            ChainDirection::Forward, Recontig::Off,
        );

        assert_eq!(graph.scaffold(s), &before);
        assert_eq!(graph.contig(a).offset_a, Length::ZERO);
    }

    #[test]
    fn test_reverse_scan_appends_at_tail() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = graph.add_contig(Length::new(100.0, 10.0));
        graph.insert_contig(
            s, b, Length::new(150.0, 15.0), Length::new(250.0, 25.0),
            ChainDirection::Reverse, Recontig::Off,
        );

        assert_eq!(graph.members(s), vec![a, b]);
        assert_eq!(graph.scaffold(s).tail(), Some(b));
    }

    #[test]
    #[should_panic(expected = "reverse scan cannot place")]
    fn test_reverse_scan_cannot_splice() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        place(&mut graph, s, (100.0, 10.0), (200.0, 20.0));
        let b = graph.add_contig(Length::new(50.0, 5.0));
        graph.insert_contig(
            s, b, Length::new(0.0, 0.0), Length::new(50.0, 5.0),
            ChainDirection::Reverse, Recontig::Off,
        );
    }

    #[test]
    #[should_panic(expected = "insert into dead scaffold")]
    fn test_insert_into_dead_scaffold_panics() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        graph.kill_scaffold(s);
        let c = graph.add_contig(Length::new(50.0, 5.0));
        graph.insert_contig(s, c, Length::ZERO, Length::new(50.0, 5.0), ChainDirection::Forward, Recontig::Off);
    }

    #[test]
    #[should_panic(expected = "already belongs to scaffold")]
    fn test_insert_member_of_other_scaffold_panics() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let t = graph.create_scaffold();
        let c = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        graph.insert_contig(t, c, Length::ZERO, Length::new(100.0, 10.0), ChainDirection::Forward, Recontig::Off);
    }

    #[test]
    fn test_merger_can_take_over_insertion() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let c = graph.add_contig(Length::new(100.0, 10.0));
        graph.insert_contig(
            s, c, Length::new(40.0, 4.0), Length::new(140.0, 14.0),
            ChainDirection::Forward, Recontig::Dovetail(&mut Absorb),
        );

        assert!(graph.scaffold(s).is_empty());
        assert_eq!(graph.contig(c).offset_a, Length::new(40.0, 4.0));

        let mut decline = Decline(0);
        graph.insert_contig(
            s, c, Length::new(40.0, 4.0), Length::new(140.0, 14.0),
            ChainDirection::Forward, Recontig::Dovetail(&mut decline),
        );
        assert_eq!(decline.0, 1);
        assert_eq!(graph.members(s), vec![c]);
    }

    #[test]
    fn test_remove_only_contig_zeroes_scaffold() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));

        assert!(!graph.remove_contig(s, a, true));
        assert_eq!(graph.scaffold(s).num_elements(), 0);
        assert_eq!(graph.scaffold(s).length(), Length::ZERO);
        assert_eq!(graph.scaffold(s).head(), None);
        assert_eq!(graph.contig(a).scaffold, None);
    }

    #[test]
    fn test_remove_head_renormalizes() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = place(&mut graph, s, (150.0, 15.0), (250.0, 25.0));
        let c = place(&mut graph, s, (300.0, 30.0), (400.0, 40.0));

        graph.remove_contig(s, a, true);

        assert_eq!(graph.members(s), vec![b, c]);
        assert_eq!(graph.contig(b).offset_a, Length::ZERO);
        assert_eq!(graph.contig(b).offset_b, Length::new(100.0, 10.0));
        assert_eq!(graph.contig(c).offset_a, Length::new(150.0, 15.0));
        assert_eq!(graph.scaffold(s).length(), Length::new(250.0, 25.0));
    }

    #[test]
    fn test_remove_head_without_adjust_keeps_positions() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = place(&mut graph, s, (150.0, 15.0), (250.0, 25.0));

        graph.remove_contig(s, a, false);

        assert_eq!(graph.contig(b).offset_a, Length::new(150.0, 15.0));
        assert_eq!(graph.scaffold(s).head(), Some(b));
    }

    #[test]
    fn test_remove_tail_recomputes_length() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (500.0, 50.0));
        let _b = place(&mut graph, s, (100.0, 10.0), (200.0, 20.0));
        let c = place(&mut graph, s, (400.0, 40.0), (700.0, 70.0));

        graph.remove_contig(s, c, false);

        // `a` contains `b`, so the bound comes from `a`, not the new tail.
        assert_eq!(graph.scaffold(s).length(), Length::new(500.0, 50.0));
        assert_eq!(graph.contig(a).b_next.map(|n| graph.contig(n).b_next), Some(None));
    }

    #[test]
    fn test_remove_interior_near_bound_recomputes() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let a = place(&mut graph, s, (0.0, 0.0), (300.0, 30.0));
        let b = place(&mut graph, s, (100.0, 10.0), (1000.0, 100.0));
        let c = place(&mut graph, s, (200.0, 20.0), (400.0, 40.0));

        graph.remove_contig(s, b, false);

        assert_eq!(graph.members(s), vec![a, c]);
        assert_eq!(graph.scaffold(s).length(), Length::new(400.0, 40.0));
    }

    #[test]
    fn test_remove_interior_far_from_bound_keeps_length() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        let _a = place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let b = place(&mut graph, s, (150.0, 15.0), (250.0, 25.0));
        let _c = place(&mut graph, s, (300.0, 30.0), (900.0, 90.0));

        graph.remove_contig(s, b, false);

        assert_eq!(graph.scaffold(s).length(), Length::new(900.0, 90.0));
        assert_eq!(graph.scaffold(s).num_elements(), 2);
    }

    #[test]
    #[should_panic(expected = "is not in scaffold")]
    fn test_remove_non_member_panics() {
        let mut graph = ScaffoldGraph::new();
        let s = graph.create_scaffold();
        place(&mut graph, s, (0.0, 0.0), (100.0, 10.0));
        let loose = graph.add_contig(Length::new(100.0, 10.0));
        graph.remove_contig(s, loose, false);
    }
}
