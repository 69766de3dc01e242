//! # ecosystem-compute
//!
//! Combines signals reported by partner systems into aggregation, consensus
//! and strategic correlation signals, plus a confidence score and a token
//! estimate. Every invocation is a synchronous, in-memory transformation with
//! no state carried between calls.
//!
//! ## Pipeline
//! 1. `grouping`: partition by `(partner, category)`
//! 2. `aggregation`: confidence-weighted mean per group, index entries
//! 3. `consensus`: per-category alignment across systems
//! 4. `correlation`: Pearson pairs per cross-system query
//! 5. `orchestrator`: scope filter, confidence blend, token estimate
//!
//! `engine::EcosystemEngine` wraps the pipeline with configuration, budget
//! checks and parallel batches.

pub mod aggregation;
pub mod budget;
pub mod consensus;
pub mod correlation;
pub mod engine;
pub mod grouping;
pub mod orchestrator;

pub use budget::BudgetReport;
pub use engine::{EcosystemEngine, EngineRun};
pub use orchestrator::{compute, compute_at, compute_with};
