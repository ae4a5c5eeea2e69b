//! Name-to-identifier resolution.
//!
//! [`scoring`] ranks search candidates with a small heuristic;
//! [`engine::Resolver`] drives the per-name pipeline: exact lookup, bounded
//! search, ranking, synonym deep-verification, structure fetch, and status
//! assignment.

pub mod engine;
pub mod scoring;

pub use engine::{EnrichReport, Resolver, ResolverConfig};
pub use scoring::{rank_candidates, score_candidate};
