//! Engine configuration.
//!
//! Every tolerance the chain, repair and demotion code uses lives here.
//! Defaults reproduce the assembler's historical constants; a JSON document
//! may override any subset of them.
//!
//! ```rust
//! use scaffold_graph::ScaffoldConfig;
//!
//! let config = ScaffoldConfig::from_json(r#"{ "repair": { "max_iterations": 5 } }"#).unwrap();
//! assert_eq!(config.repair.max_iterations, 5);
//! assert_eq!(config.repair.min_improvement, 0.005);
//! ```

use serde::{Deserialize, Serialize};

use crate::model::EdgeFilter;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub insert: InsertTolerances,
    pub remove: RemoveTolerances,
    pub repair: RepairConfig,
    pub solver: SolveOptions,
    pub demote: DemotePolicy,
}

/// Geometry checks applied when a contig is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsertTolerances {
    /// Allowed disagreement between the end-to-end variance and the
    /// contig's own length variance before the far end is rewritten.
    pub variance_slack: f64,
    /// End-to-end distance above `length_ratio * length.mean` is logged.
    pub length_ratio: f64,
}

impl Default for InsertTolerances {
    fn default() -> Self {
        Self { variance_slack: 1.0, length_ratio: 1.2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveTolerances {
    /// Removing an interior contig whose far end is this close to the
    /// scaffold length forces a full length recompute.
    pub recompute_window: f64,
}

impl Default for RemoveTolerances {
    fn default() -> Self {
        Self { recompute_window: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    pub max_iterations: usize,
    /// Relative least-square error improvement below which repair stops.
    pub min_improvement: f64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self { max_iterations: 20, min_improvement: 0.005 }
    }
}

/// Options handed to the offset solver on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Edges the solver may use as distance evidence.
    pub filter: EdgeFilter,
    /// Keep the current gap for adjacent contigs with no evidence between
    /// them instead of failing the solve.
    pub keep_unsupported_gaps: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { filter: EdgeFilter::TrustedOrTentative, keep_unsupported_gaps: true }
    }
}

/// Which single-contig scaffolds may be dissolved back into the unplaced pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemotePolicy {
    pub max_length: f64,
    /// Coverage statistic above which a contig counts as definitely unique.
    pub unique_coverage_cutoff: i32,
    pub allow_forced_unique: bool,
}

impl Default for DemotePolicy {
    fn default() -> Self {
        Self { max_length: 2000.0, unique_coverage_cutoff: 10, allow_forced_unique: false }
    }
}

impl ScaffoldConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScaffoldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repair.max_iterations == 0 {
            return Err(Error::InvalidConfig("repair.max_iterations must be at least 1".into()));
        }
        let non_negative = [
            ("insert.variance_slack", self.insert.variance_slack),
            ("insert.length_ratio", self.insert.length_ratio),
            ("remove.recompute_window", self.remove.recompute_window),
            ("repair.min_improvement", self.repair.min_improvement),
            ("demote.max_length", self.demote.max_length),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }
}
