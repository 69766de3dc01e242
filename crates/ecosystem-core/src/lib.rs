//! # ecosystem-core
//!
//! Shared building blocks for ecosystem signal computation.
//!
//! ## Modules
//! - `models`: signals, queries, options and every derived result type
//! - `config`: EcosystemConfig with compute, budget and observability sections
//! - `errors`: EcosystemError and the EcosystemResult alias
//! - `traits`: ISignalEngine, the engine boundary consumed by callers
//! - `observability`: tracing subscriber installation

pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

pub use config::EcosystemConfig;
pub use errors::{EcosystemError, EcosystemResult};
