//! # scaffold-graph: Scaffold Consistency Engine
//!
//! Keeps genome-assembly scaffolds consistent: each scaffold is an
//! offset-sorted chain of contigs whose positions are (mean, variance)
//! estimates. The engine inserts and removes contigs, checks that evidence
//! still holds a scaffold together, splits it when it does not, and
//! iterates an offset solver until the chain is ordered again.
//!
//! ## Design Principles
//!
//! 1. **Arena records**: contigs, scaffolds and edges live in tombstoning
//!    stores keyed by dense ids; links are `Option<Id>`, never pointers
//! 2. **Pure model**: `model` holds data only; every multi-record edit is a
//!    `ScaffoldGraph` method
//! 3. **Seams as traits**: the offset solver, mate placements and contig
//!    merging are collaborators behind `OffsetSolver`, `MatePlacements` and
//!    `ContigMerger`
//! 4. **Programmer errors panic**: dead records, broken links and other
//!    violated preconditions are assertions, not `Error`s
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffold_graph::{
//!     AdjacentGapSolver, ChainDirection, EdgeFilter, Length, NoPlacements, Recontig,
//!     ScaffoldGraph,
//! };
//!
//! let mut graph = ScaffoldGraph::new();
//! let scaffold = graph.create_scaffold();
//! let a = graph.add_contig(Length::new(100.0, 10.0));
//! let b = graph.add_contig(Length::new(150.0, 15.0));
//!
//! graph.insert_contig(scaffold, a, Length::ZERO, Length::new(100.0, 10.0),
//!     ChainDirection::Forward, Recontig::Off);
//! graph.insert_contig(scaffold, b, Length::new(120.0, 12.0), Length::new(270.0, 27.0),
//!     ChainDirection::Forward, Recontig::Off);
//! graph.link(a, b, Length::new(20.0, 2.0), 3);
//!
//! assert_eq!(graph.split_if_disconnected(scaffold, EdgeFilter::Trusted, &NoPlacements), 1);
//!
//! let report = graph.repair_scaffold(scaffold, &mut AdjacentGapSolver)?;
//! assert!(report.converged);
//! assert_eq!(graph.scaffold(scaffold).length(), Length::new(270.0, 27.0));
//! # Ok::<(), scaffold_graph::Error>(())
//! ```
//!
//! ## Operations
//!
//! | Module | Adds |
//! |--------|------|
//! | `chain` | insert, remove, traversal, length propagation |
//! | `connectivity` | component analysis, splitting, demotion, edge checks |
//! | `repair` | scan/reinsert/solve loop |
//! | `solver` | `OffsetSolver` and the adjacent-gap reference solver |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod graph;
pub mod chain;
pub mod connectivity;
pub mod repair;
pub mod solver;
pub mod mates;
pub mod config;

// ============================================================================
// Re-exports: Model (the records)
// ============================================================================

pub use model::{
    Contig, Scaffold, EvidenceEdge, ScaffoldEdge, RepeatBase, Length,
    ContigId, ScaffoldId, EdgeId, ScaffoldEdgeId, BaseId, ReadId,
    EdgeEnd, EdgeFilter, EdgeStatus, Orientation, PairOrientation, UnitMark,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use chain::{ChainDirection, ChainIter, ContigMerger, Recontig};
pub use connectivity::{Components, DemoteStats};
pub use repair::RepairReport;
pub use solver::{AdjacentGapSolver, OffsetSolver, SolveFailure, SolveStatus};
pub use mates::{MatePlacements, NoPlacements, PlacementTable};
pub use config::{ScaffoldConfig, SolveOptions, DemotePolicy};

// ============================================================================
// Top-level Graph handle
// ============================================================================

/// The primary entry point: all records plus every engine operation.
/// Wrap it in [`SharedScaffoldGraph`] to hand it between threads.
pub use graph::{ScaffoldGraph, SharedScaffoldGraph};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Solver failed on scaffold {scaffold}: {failure}")]
    SolverFailed { scaffold: ScaffoldId, failure: SolveFailure },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
