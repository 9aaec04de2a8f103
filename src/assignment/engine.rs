//! Greedy randomized assignment planner.
//!
//! # Algorithm
//!
//! 1. Sort active projects into table order (numeric tables numerically,
//!    then non-numeric labels lexicographically).
//! 2. For each project, for each required round, score every judge not
//!    already assigned to that project and take the highest scorer.
//! 3. Candidate score = `-50·load + proximity + jitter[0, 20)`.
//!
//! The proximity term keeps each judge's walk through the venue locally
//! coherent: `+100` for a table within 10 of their last one, `+50` for a
//! judge with nothing assigned yet (may start anywhere), otherwise a
//! linear `-distance` penalty that discourages long jumps without ever
//! forbidding them.
//!
//! The jitter breaks ties randomly so repeated plans do not collapse into
//! pathological patterns. It is the crate's only non-determinism and the
//! RNG is caller-injected; pass a seeded RNG for reproducible plans.
//!
//! No backtracking, no global reassignment — a heuristic, not an optimum.
//! Re-running regenerates the whole plan; callers clear prior assignments
//! first.
//!
//! # Complexity
//! O(p · n · j) where p=projects, n=rounds, j=judges.

use rand::Rng;
use std::collections::HashMap;

use crate::models::{Assignment, Judge, Project};

/// Score penalty per assignment a judge already holds.
const LOAD_PENALTY: f64 = 50.0;
/// Bonus for a table within [`NEAR_RADIUS`] of the judge's last one.
const NEAR_BONUS: f64 = 100.0;
/// Bonus for a judge with no assignments yet.
const FRESH_BONUS: f64 = 50.0;
/// Table distance still counted as "staying in the flow".
const NEAR_RADIUS: i64 = 10;
/// Upper bound (exclusive) of the uniform random jitter.
const JITTER_MAX: f64 = 20.0;

/// Per-judge accumulator threaded through the single planning pass.
///
/// Explicit local state, never module state: the planner is reentrant and
/// two concurrent plans cannot observe each other.
#[derive(Debug, Default)]
struct PlannerState {
    /// Assignments handed to each judge so far.
    load: HashMap<String, usize>,
    /// Numeric table of each judge's most recent assignment.
    last_table: HashMap<String, i64>,
}

impl PlannerState {
    fn load_of(&self, judge_id: &str) -> usize {
        self.load.get(judge_id).copied().unwrap_or(0)
    }

    fn record(&mut self, judge_id: &str, table: Option<i64>) {
        *self.load.entry(judge_id.to_string()).or_insert(0) += 1;
        if let Some(t) = table {
            self.last_table.insert(judge_id.to_string(), t);
        }
    }
}

/// Plans judge coverage for every active project.
///
/// Returns one pending [`Assignment`] per project per round, never
/// pairing the same judge with the same project twice. No-show projects
/// are skipped even if present in the input. With no judges or no active
/// projects the plan is simply empty. A project that has already seen
/// every judge gets fewer rounds than requested rather than a repeat
/// visit.
pub fn plan_assignments<R: Rng>(
    judges: &[Judge],
    active_projects: &[Project],
    rounds_per_project: u32,
    rng: &mut R,
) -> Vec<Assignment> {
    let mut projects: Vec<&Project> = active_projects.iter().filter(|p| !p.no_show).collect();
    projects.sort_by_key(|p| p.table_sort_key());

    let mut plan = Vec::new();
    let mut state = PlannerState::default();

    for project in projects {
        let table = project.table_number();
        let mut taken: Vec<&str> = Vec::new();

        for _ in 0..rounds_per_project {
            let best = judges
                .iter()
                .filter(|j| !taken.contains(&j.id.as_str()))
                .map(|j| (j, candidate_score(j, table, &state, rng)))
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let Some((judge, _)) = best else {
                break; // every judge has seen this project already
            };

            taken.push(&judge.id);
            state.record(&judge.id, table);
            plan.push(Assignment::new(&judge.id, &project.id));
        }
    }

    plan
}

fn candidate_score<R: Rng>(
    judge: &Judge,
    table: Option<i64>,
    state: &PlannerState,
    rng: &mut R,
) -> f64 {
    let load = state.load_of(&judge.id);
    let last = state.last_table.get(&judge.id).copied();

    let proximity = match (table, last) {
        (Some(t), Some(l)) => {
            let distance = (t - l).abs();
            if distance <= NEAR_RADIUS {
                NEAR_BONUS
            } else if load == 0 {
                FRESH_BONUS
            } else {
                -(distance as f64)
            }
        }
        // Without two known tables there is no distance to judge by.
        _ if load == 0 => FRESH_BONUS,
        _ => 0.0,
    };

    -LOAD_PENALTY * load as f64 + proximity + rng.random_range(0.0..JITTER_MAX)
}
