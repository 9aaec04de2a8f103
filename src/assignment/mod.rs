//! Judge-to-project assignment planning.
//!
//! Produces the coverage plan: for every active project, one assignment
//! per required judging round, chosen by a greedy randomized heuristic
//! that balances per-judge load against table proximity.
//!
//! # Usage
//!
//! ```
//! use judgeflow::assignment::plan_assignments;
//! use judgeflow::models::{Judge, Project};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let judges = vec![Judge::new("j1"), Judge::new("j2")];
//! let projects = vec![Project::new("p1").with_table("1")];
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! let plan = plan_assignments(&judges, &projects, 2, &mut rng);
//! assert_eq!(plan.len(), 2);
//! ```

mod engine;

pub use engine::plan_assignments;
