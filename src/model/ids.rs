//! Opaque identifiers for every record kind in the scaffold graph.

use serde::{Deserialize, Serialize};

use crate::storage::StoreId;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl StoreId for $name {
            fn from_index(index: usize) -> Self {
                Self(u32::try_from(index).expect("node store exceeds u32 id space"))
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

record_id!(
    /// Contig identifier. Allocated by the contig store, never reused.
    ContigId
);
record_id!(
    /// Scaffold identifier. Dead scaffolds keep their id.
    ScaffoldId
);
record_id!(
    /// Contig-to-contig evidence edge.
    EdgeId
);
record_id!(
    /// Scaffold-to-scaffold evidence edge.
    ScaffoldEdgeId
);
record_id!(
    /// Repeat base unit that surrogate contigs are instances of.
    BaseId
);

/// Sequencing read identifier (reads live outside the graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadId(pub u64);

impl std::fmt::Display for ReadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
