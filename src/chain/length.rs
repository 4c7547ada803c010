//! Scaffold length bookkeeping.
//!
//! Two notions of length coexist. The *bound* is the component-wise maximum
//! over every member end offset and is what chain edits maintain. The
//! *extent* is the span between the nearest and furthest ends by mean, used
//! to grow a scaffold after its members have been re-solved.

use tracing::{debug, warn};

use super::ChainDirection;
use crate::graph::ScaffoldGraph;
use crate::model::*;

impl ScaffoldGraph {
    /// Reset the scaffold length to the component-wise maximum of every
    /// member end offset. An empty scaffold gets [`Length::ZERO`].
    pub fn recompute_length(&mut self, scaffold: ScaffoldId) -> Length {
        let bound = self
            .chain(scaffold, ChainDirection::Forward)
            .map(|c| self.contig(c))
            .fold(Length::ZERO, |acc, c| {
                acc.max_components(c.offset_a).max_components(c.offset_b)
            });

        let chain = self.scaffold_mut(scaffold).chain_mut();
        if chain.length != bound {
            debug!(scaffold = %scaffold, from = %chain.length, to = %bound, "length recomputed");
        }
        chain.length = bound;
        bound
    }

    /// Grow the scaffold length to the member extent if that is longer.
    /// Never shrinks.
    ///
    /// # Panics
    ///
    /// If the extent would carry a negative variance: the far end is less
    /// certain than the near end in every well-formed scaffold.
    pub fn grow_length_from_extent(&mut self, scaffold: ScaffoldId) -> Length {
        let mut near: Option<Length> = None;
        let mut far: Option<Length> = None;
        for id in self.chain(scaffold, ChainDirection::Forward) {
            let contig = self.contig(id);
            let (lo, hi) = (contig.near_offset(), contig.far_offset());
            if near.is_none_or(|n| lo.mean < n.mean) {
                near = Some(lo);
            }
            if far.is_none_or(|f| hi.mean > f.mean) {
                far = Some(hi);
            }
        }

        let chain = self.scaffold_mut(scaffold).chain_mut();
        let (Some(near), Some(far)) = (near, far) else {
            return chain.length;
        };

        let extent = Length::span(far, near);
        if extent.mean > chain.length.mean {
            debug!(scaffold = %scaffold, from = %chain.length, to = %extent, "length grown to extent");
            chain.length = extent;
        }
        chain.length
    }

    /// Clamp member positions that cannot be right and make the length cover
    /// every member. Returns the number of contigs repositioned.
    ///
    /// The head is expected to start at the origin; any member with a
    /// negative offset is reset to `[0, intrinsic length]`.
    pub fn sanitize_positions(&mut self, scaffold: ScaffoldId) -> usize {
        let members = self.members(scaffold);
        let mut repositioned = 0;

        for (i, id) in members.into_iter().enumerate() {
            let bound = self.scaffold(scaffold).length();
            let contig = self.contig_mut(id);
            let (a, b) = (contig.offset_a, contig.offset_b);
            let negative = a.is_negative() || b.is_negative();
            let head_off_origin = i == 0 && a.mean > 0.1 && b.mean > 0.1;

            if a.mean > bound.mean || b.mean > bound.mean {
                warn!(contig = %id, scaffold = %scaffold, offset_a = %a, offset_b = %b, length = %bound,
                    "contig extends past scaffold length");
            }
            if negative || head_off_origin {
                warn!(contig = %id, scaffold = %scaffold, offset_a = %a, offset_b = %b, "resetting position");
                contig.offset_a = Length::ZERO;
                contig.offset_b = contig.length;
                repositioned += 1;
            }

            let (a, b) = (contig.offset_a, contig.offset_b);
            let chain = self.scaffold_mut(scaffold).chain_mut();
            chain.length = chain.length.max_components(a).max_components(b);
        }
        repositioned
    }

    /// [`ScaffoldGraph::recompute_length`] over every live scaffold.
    pub fn recompute_all_lengths(&mut self) {
        for scaffold in self.scaffold_ids() {
            self.recompute_length(scaffold);
        }
    }

    /// [`ScaffoldGraph::grow_length_from_extent`] over every live, non-empty
    /// scaffold.
    pub fn grow_all_lengths_from_extent(&mut self) {
        for scaffold in self.scaffold_ids() {
            if !self.scaffold(scaffold).is_empty() {
                self.grow_length_from_extent(scaffold);
            }
        }
    }
}
