//! Category-aware stack-ranked leaderboard.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Criterion, Project, Score};

/// Points awarded by rank within one judge's set; rank 6+ gets nothing.
const RANK_POINTS: [u32; 5] = [5, 4, 3, 2, 1];
/// Raw totals closer than this are the same rank.
const SCORE_EPSILON: f64 = 1e-9;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Ranked project.
    pub project_id: String,
    /// Project name, denormalized for display.
    pub project_name: String,
    /// Table label, denormalized for display.
    pub table: String,
    /// Number of score submissions received.
    pub times_judged: u32,
    /// Sum of stack-rank points across all judges who scored the project.
    pub rank_points: u32,
    /// Mean weighted raw total; used only to break rank-point ties.
    pub raw_avg: f64,
}

/// Builds the stack-ranked leaderboard from the current score snapshot.
///
/// `category_filter = None` is the overall view. Selection works in two
/// layers:
///
/// - **Criteria**: general criteria (name not in `organizer_categories`)
///   always count. A category-scoped criterion counts only when the
///   filter names its category exactly — so in the overall view,
///   category-specific scores never skew the global ranking.
/// - **Projects**: no-shows are always out; with a filter, only projects
///   tagged with that category are ranked.
///
/// Each in-scope score record becomes one weighted raw total per
/// (judge, project); each judge's totals are stack-ranked descending with
/// competition ranking (ties share the rank of their first occurrence)
/// and converted to points via the fixed 5-4-3-2-1 table; a project's
/// `rank_points` is the sum over judges. Final order: `rank_points`
/// descending, then `raw_avg` descending.
///
/// Deterministic for a given input — ties beyond `raw_avg` keep the
/// project scope order. Projects in scope with no submissions still get a
/// row (zero points, zero average).
pub fn build_leaderboard(
    projects: &[Project],
    scores: &[Score],
    criteria: &[Criterion],
    organizer_categories: &[String],
    category_filter: Option<&str>,
) -> Vec<LeaderboardRow> {
    // Criterion inclusion set: criterion id → weight.
    let included: HashMap<&str, f64> = criteria
        .iter()
        .filter(|c| {
            !c.is_category_scoped(organizer_categories)
                || category_filter == Some(c.name.as_str())
        })
        .map(|c| (c.id.as_str(), c.weight))
        .collect();

    // Project scope, preserving input order for stable final ties.
    let scope: Vec<&Project> = projects
        .iter()
        .filter(|p| !p.no_show)
        .filter(|p| category_filter.map_or(true, |cat| p.has_category(cat)))
        .collect();
    let in_scope: HashMap<&str, usize> = scope
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();

    // One weighted raw total per (judge, project), grouped by judge.
    let mut by_judge: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
    let mut times_judged = vec![0u32; scope.len()];
    let mut raw_sum = vec![0f64; scope.len()];

    for score in scores {
        let Some(&slot) = in_scope.get(score.project_id.as_str()) else {
            continue;
        };
        let raw: f64 = score
            .values
            .iter()
            .filter_map(|(cid, value)| {
                included.get(cid.as_str()).map(|w| *value as f64 * w)
            })
            .sum();

        by_judge
            .entry(score.judge_id.as_str())
            .or_default()
            .push((score.project_id.as_str(), raw));
        times_judged[slot] += 1;
        raw_sum[slot] += raw;
    }

    // Stack-rank each judge's totals and accumulate points per project.
    let mut rank_points: HashMap<&str, u32> = HashMap::new();
    for totals in by_judge.values_mut() {
        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut rank = 0usize;
        for (i, &(project_id, raw)) in totals.iter().enumerate() {
            let tied_with_prev = i > 0 && (totals[i - 1].1 - raw).abs() < SCORE_EPSILON;
            if !tied_with_prev {
                rank = i + 1; // competition ranking: first occurrence sets the rank
            }
            let points = if rank <= RANK_POINTS.len() {
                RANK_POINTS[rank - 1]
            } else {
                0
            };
            *rank_points.entry(project_id).or_insert(0) += points;
        }
    }

    let mut rows: Vec<LeaderboardRow> = scope
        .iter()
        .enumerate()
        .map(|(i, p)| LeaderboardRow {
            project_id: p.id.clone(),
            project_name: p.name.clone(),
            table: p.table.clone(),
            times_judged: times_judged[i],
            rank_points: rank_points.get(p.id.as_str()).copied().unwrap_or(0),
            raw_avg: if times_judged[i] > 0 {
                raw_sum[i] / times_judged[i] as f64
            } else {
                0.0
            },
        })
        .collect();

    rows.sort_by(|a, b| {
        b.rank_points.cmp(&a.rank_points).then(
            b.raw_avg
                .partial_cmp(&a.raw_avg)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    rows
}
