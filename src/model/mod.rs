//! # Scaffold Graph Model
//!
//! Plain records that every other module passes around: identifiers,
//! length-with-variance values, contigs, scaffolds and evidence edges.
//!
//! Design rule: this module is pure data. No I/O and no chain surgery.
//! Everything that mutates more than one record lives on `ScaffoldGraph`.

pub mod ids;
pub mod length;
pub mod contig;
pub mod scaffold;
pub mod edge;

pub use ids::{BaseId, ContigId, EdgeId, ReadId, ScaffoldEdgeId, ScaffoldId};
pub use length::Length;
pub use contig::{Contig, ContigFlags, Orientation, RepeatBase, UnitMark};
pub use scaffold::{Chain, Scaffold, ScaffoldState};
pub use edge::{
    EdgeEnd, EdgeFilter, EdgeStatus, EvidenceEdge, PairOrientation, ScaffoldEdge,
};
