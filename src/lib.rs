//! Computational engine for running hackathon project judging.
//!
//! Provides the four pure components behind an event organizer's workflow:
//! feasibility validation of a schedule/capacity plan, judge-to-project
//! assignment, project status classification, and stack-ranked leaderboards.
//! Persistence, auth, and UI belong to the host application — this crate
//! receives typed record collections and returns computed values.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Judge`, `Project`, `Criterion`, `Score`,
//!   `Assignment`, `Report`, `EventConfig`
//! - **`timeline`**: Named event instants and minute-precision interval math
//! - **`validation`**: The feasibility "stress test" — twelve independent
//!   rule checks over the event configuration
//! - **`assignment`**: Greedy randomized judge↔project coverage planning
//! - **`ranking`**: Stack-ranked leaderboard aggregation and per-project
//!   judging-status classification
//!
//! # Purity
//!
//! Every operation is a synchronous total function over an immutable
//! snapshot of its inputs. The only non-determinism is the assignment
//! engine's random jitter, and its RNG is caller-injected.

pub mod assignment;
pub mod models;
pub mod ranking;
pub mod timeline;
pub mod validation;
