//! # Consistency Repair
//!
//! Scan, detect, repair, re-solve until a scaffold is consistent, the
//! solver stops improving, or the iteration cap is hit.
//!
//! ```text
//!  ┌──────────────► scan chain ──── all in order ──► done (converged)
//!  │                    │
//!  │              out of order
//!  │                    ▼
//!  │          remove + reinsert each
//!  │                    ▼
//!  │                 solver ────── failure ──► Err(SolverFailed)
//!  │                    │
//!  └── improving ◄──────┴──── stalled / cap ──► done (not converged)
//! ```
//!
//! Each scan also applies local corrections: a member at a negative
//! position is reset to `[0, intrinsic length]` and the scaffold length is
//! grown to cover every member.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::chain::{ChainDirection, Recontig};
use crate::graph::ScaffoldGraph;
use crate::model::*;
use crate::solver::{OffsetSolver, SolveStatus};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairReport {
    pub scaffold: ScaffoldId,
    pub iterations: usize,
    /// The last scan found every member in order.
    pub converged: bool,
    /// Reinsertions across all iterations.
    pub reinserted: usize,
    /// Members whose offset grows past an earlier member while their
    /// variance shrinks below it.
    pub variance_violations: Vec<ContigId>,
    pub least_square_error: f64,
}

impl ScaffoldGraph {
    pub fn repair_scaffold<S: OffsetSolver + ?Sized>(
        &mut self,
        scaffold: ScaffoldId,
        solver: &mut S,
    ) -> Result<RepairReport> {
        let mut report = RepairReport {
            scaffold,
            iterations: 0,
            converged: true,
            reinserted: 0,
            variance_violations: Vec::new(),
            least_square_error: self.scaffold(scaffold).least_square_error(),
        };
        if self.scaffold(scaffold).num_elements() <= 1 {
            return Ok(report);
        }

        let limits = self.config.repair.clone();
        let options = self.config.solver.clone();
        let mut previous = report.least_square_error;

        report.converged = false;
        loop {
            if report.iterations == limits.max_iterations {
                warn!(scaffold = %scaffold, iterations = report.iterations, "repair hit iteration cap");
                break;
            }
            report.iterations += 1;

            let queued = self.scan_for_disorder(scaffold);
            if queued.is_empty() {
                report.converged = true;
                break;
            }
            debug!(
                scaffold = %scaffold, iteration = report.iterations,
                out_of_order = queued.len(), error = previous,
                "reinserting out-of-order contigs",
            );

            for id in queued {
                let (offset_a, offset_b) = {
                    let contig = self.contig(id);
                    (contig.offset_a, contig.offset_b)
                };
                self.remove_contig(scaffold, id, false);
                self.insert_contig(scaffold, id, offset_a, offset_b, ChainDirection::Forward, Recontig::Off);
                report.reinserted += 1;
            }

            if let SolveStatus::Failed(failure) = solver.solve(self, scaffold, &options) {
                error!(scaffold = %scaffold, iteration = report.iterations, %failure, "offset solve failed");
                return Err(Error::SolverFailed { scaffold, failure });
            }

            let current = self.scaffold(scaffold).least_square_error();
            let improvement = if report.iterations == 1 || previous <= 0.0 {
                1.0
            } else {
                (previous - current) / previous
            };
            debug!(scaffold = %scaffold, improvement, error = current, "solved");
            previous = current;

            if improvement <= limits.min_improvement {
                debug!(scaffold = %scaffold, improvement, "repair stalled");
                break;
            }
        }

        report.variance_violations = self.variance_violations(scaffold);
        report.least_square_error = self.scaffold(scaffold).least_square_error();
        Ok(report)
    }

    /// [`ScaffoldGraph::repair_scaffold`] over every live scaffold, stopping
    /// at the first solver failure.
    pub fn repair_all<S: OffsetSolver + ?Sized>(&mut self, solver: &mut S) -> Result<Vec<RepairReport>> {
        let mut reports = Vec::new();
        for scaffold in self.scaffold_ids() {
            reports.push(self.repair_scaffold(scaffold, solver)?);
        }
        Ok(reports)
    }

    /// One repair scan: local corrections, then the members whose sort key
    /// falls behind the last in-order member.
    fn scan_for_disorder(&mut self, scaffold: ScaffoldId) -> Vec<ContigId> {
        let mut running = f64::NEG_INFINITY;
        let mut queued = Vec::new();

        for id in self.members(scaffold) {
            let bound = self.scaffold(scaffold).length();
            let contig = self.contig_mut(id);

            if contig.offset_a.mean > bound.mean || contig.offset_b.mean > bound.mean {
                warn!(
                    contig = %id, scaffold = %scaffold,
                    offset_a = %contig.offset_a, offset_b = %contig.offset_b, length = %bound,
                    "contig extends past scaffold length",
                );
            }
            if contig.offset_a.is_negative() || contig.offset_b.is_negative() {
                warn!(
                    contig = %id, scaffold = %scaffold,
                    offset_a = %contig.offset_a, offset_b = %contig.offset_b,
                    "contig at negative position, resetting",
                );
                contig.offset_a = Length::ZERO;
                contig.offset_b = contig.length;
            }

            let (a, b, key) = (contig.offset_a, contig.offset_b, contig.min_mean());
            let chain = self.scaffold_mut(scaffold).chain_mut();
            chain.length = chain.length.max_components(a).max_components(b);

            if key < running {
                queued.push(id);
            } else {
                running = key;
            }
        }
        queued
    }

    fn variance_violations(&self, scaffold: ScaffoldId) -> Vec<ContigId> {
        let mut mean = -1.0;
        let mut variance = -1.0;
        let mut violations = Vec::new();

        for id in self.chain(scaffold, ChainDirection::Forward) {
            let contig = self.contig(id);
            let (a, b) = (contig.offset_a, contig.offset_b);
            if (a.mean > mean && a.variance < variance) || (b.mean > mean && b.variance < variance) {
                warn!(contig = %id, scaffold = %scaffold, offset_a = %a, offset_b = %b, "variance decreases along scaffold");
                violations.push(id);
            }
            if mean < a.mean || mean < b.mean {
                mean = a.mean.max(b.mean);
                variance = a.variance.max(b.variance);
            }
        }
        violations
    }
}
