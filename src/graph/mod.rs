//! # Scaffold Graph
//!
//! The record stores plus the adjacency needed to walk evidence edges.
//! Chain maintenance, connectivity and repair add their operations to
//! [`ScaffoldGraph`] from their own modules; this module only owns the
//! records and the plain create/lookup/delete surface.
//!
//! ```text
//!  contigs ──┬── adjacency ── edges (contig ↔ contig evidence)
//!            │
//!  scaffolds ┴── scaffold_edges (scaffold ↔ scaffold evidence)
//!            │
//!  bases ────┘   (repeat units surrogate contigs are instances of)
//! ```

pub mod shared;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::config::ScaffoldConfig;
use crate::model::*;
use crate::storage::NodeStore;
use crate::{Error, Result};

pub use shared::SharedScaffoldGraph;

// ============================================================================
// ScaffoldGraph
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ScaffoldGraph {
    pub(crate) contigs: NodeStore<ContigId, Contig>,
    pub(crate) scaffolds: NodeStore<ScaffoldId, Scaffold>,
    pub(crate) edges: NodeStore<EdgeId, EvidenceEdge>,
    /// contig → evidence edges touching it
    adjacency: HashMap<ContigId, SmallVec<[EdgeId; 4]>>,
    pub(crate) scaffold_edges: NodeStore<ScaffoldEdgeId, ScaffoldEdge>,
    pub(crate) bases: NodeStore<BaseId, RepeatBase>,
    pub(crate) config: ScaffoldConfig,
}

impl ScaffoldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScaffoldConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    // ========================================================================
    // Contigs
    // ========================================================================

    /// Allocate an unplaced contig of the given intrinsic length.
    pub fn add_contig(&mut self, length: Length) -> ContigId {
        self.contigs.append(|id| Contig::new(id, length))
    }

    /// Allocate a contig with extra attributes set by `customize`.
    pub fn add_contig_with(
        &mut self,
        length: Length,
        customize: impl FnOnce(Contig) -> Contig,
    ) -> ContigId {
        self.contigs.append(|id| customize(Contig::new(id, length)))
    }

    pub fn contig(&self, id: ContigId) -> &Contig {
        self.contigs.get(id)
    }

    pub fn contig_mut(&mut self, id: ContigId) -> &mut Contig {
        self.contigs.get_mut(id)
    }

    pub fn try_contig(&self, id: ContigId) -> Option<&Contig> {
        self.contigs.try_get(id)
    }

    pub fn contig_count(&self) -> usize {
        self.contigs.len()
    }

    /// Scaffold currently holding `contig`.
    pub fn scaffold_of(&self, contig: ContigId) -> Result<ScaffoldId> {
        self.try_contig(contig)
            .and_then(|c| c.scaffold)
            .ok_or_else(|| Error::NotFound(format!("scaffold of contig {contig}")))
    }

    /// Tombstone a contig along with its evidence edges.
    ///
    /// # Panics
    ///
    /// If the contig is still a scaffold member.
    pub fn delete_contig(&mut self, id: ContigId) {
        assert!(
            self.contig(id).scaffold.is_none(),
            "contig {id} must leave its scaffold before deletion",
        );
        let edges = self.adjacency.remove(&id).unwrap_or_default();
        for edge in edges {
            self.delete_edge(edge);
        }
        self.contigs.delete(id);
    }

    // ========================================================================
    // Repeat bases and surrogates
    // ========================================================================

    pub fn add_repeat_base(&mut self, num_reads: u32) -> BaseId {
        self.bases.append(|id| RepeatBase::new(id, num_reads))
    }

    pub fn repeat_base(&self, id: BaseId) -> &RepeatBase {
        self.bases.get(id)
    }

    /// Allocate a single-unit contig as a placed instance of `base`.
    pub fn add_surrogate(&mut self, base: BaseId, length: Length) -> ContigId {
        let contig = self.contigs.append(|id| Contig {
            surrogate_of: Some(base),
            ..Contig::new(id, length)
        });
        self.bases.get_mut(base).instances.push(contig);
        contig
    }

    // ========================================================================
    // Scaffolds
    // ========================================================================

    /// Create a live, empty scaffold.
    pub fn create_scaffold(&mut self) -> ScaffoldId {
        self.scaffolds.append(Scaffold::new)
    }

    pub fn scaffold(&self, id: ScaffoldId) -> &Scaffold {
        self.scaffolds.get(id)
    }

    pub fn scaffold_mut(&mut self, id: ScaffoldId) -> &mut Scaffold {
        self.scaffolds.get_mut(id)
    }

    /// Look up a scaffold whether or not it is dead.
    pub fn scaffold_record(&self, id: ScaffoldId) -> Option<&Scaffold> {
        self.scaffolds.record(id)
    }

    pub fn scaffold_ids(&self) -> Vec<ScaffoldId> {
        self.scaffolds.live_ids().collect()
    }

    pub fn scaffold_count(&self) -> usize {
        self.scaffolds.len()
    }

    /// Tombstone a scaffold after deleting its edges. Members must already
    /// have been detached.
    pub fn kill_scaffold(&mut self, id: ScaffoldId) {
        self.delete_scaffold_edges(id);
        self.scaffolds.delete(id);
    }

    // ========================================================================
    // Contig evidence edges
    // ========================================================================

    /// Add an evidence edge built from its freshly assigned id.
    ///
    /// # Panics
    ///
    /// If either endpoint is not a live contig.
    pub fn add_edge(&mut self, build: impl FnOnce(EdgeId) -> EvidenceEdge) -> EdgeId {
        let id = self.edges.append(build);
        let (a, b) = {
            let edge = self.edges.get(id);
            (edge.a, edge.b)
        };
        self.contig(a);
        self.contig(b);
        self.adjacency.entry(a).or_default().push(id);
        if a != b {
            self.adjacency.entry(b).or_default().push(id);
        }
        id
    }

    /// Trusted edge with default orientation and the given support.
    pub fn link(&mut self, a: ContigId, b: ContigId, distance: Length, support: u32) -> EdgeId {
        self.add_edge(|id| EvidenceEdge::new(id, a, b, distance).with_support(support))
    }

    pub fn edge(&self, id: EdgeId) -> &EvidenceEdge {
        self.edges.get(id)
    }

    pub fn delete_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.try_get(id) else {
            return false;
        };
        let (a, b) = (edge.a, edge.b);
        for end in [a, b] {
            if let Some(list) = self.adjacency.get_mut(&end) {
                list.retain(|e| *e != id);
            }
        }
        self.edges.delete(id)
    }

    /// Live evidence edges touching `contig` at `end`, restricted to `filter`.
    pub fn contig_edges(
        &self,
        contig: ContigId,
        end: EdgeEnd,
        filter: EdgeFilter,
    ) -> impl Iterator<Item = &EvidenceEdge> + '_ {
        self.adjacency
            .get(&contig)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.edges.try_get(*id))
            .filter(move |e| filter.admits(e.status) && e.touches(contig, end))
    }

    // ========================================================================
    // Scaffold evidence edges
    // ========================================================================

    pub fn add_scaffold_edge(
        &mut self,
        a: ScaffoldId,
        b: ScaffoldId,
        distance: Length,
        support: u32,
    ) -> ScaffoldEdgeId {
        let id = self.scaffold_edges.append(|id| ScaffoldEdge {
            id,
            a,
            b,
            distance,
            support,
            dead: false,
        });
        self.scaffold_mut(a).edges.push(id);
        if a != b {
            self.scaffold_mut(b).edges.push(id);
        }
        id
    }

    pub fn scaffold_edge(&self, id: ScaffoldEdgeId) -> &ScaffoldEdge {
        self.scaffold_edges.get(id)
    }

    pub fn delete_scaffold_edge(&mut self, id: ScaffoldEdgeId) -> bool {
        let Some(edge) = self.scaffold_edges.try_get(id) else {
            return false;
        };
        let (a, b) = (edge.a, edge.b);
        for end in [a, b] {
            if self.scaffolds.try_get(end).is_some() {
                self.scaffolds.get_mut(end).edges.retain(|e| *e != id);
            }
        }
        self.scaffold_edges.delete(id)
    }

    /// Delete every inter-scaffold edge touching `id`. Returns the count.
    pub fn delete_scaffold_edges(&mut self, id: ScaffoldId) -> usize {
        let edges = self.scaffold(id).edges.clone();
        edges.into_iter().filter(|e| self.delete_scaffold_edge(*e)).count()
    }
}

// ============================================================================
// Tests
// ============================================================================
