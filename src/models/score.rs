//! Score submissions and their keyed collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One judge's submission for one project.
///
/// At most one score exists per `(judge_id, project_id)` pair; a judge
/// revising their assessment replaces the earlier submission in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    /// Submitting judge.
    pub judge_id: String,
    /// Scored project.
    pub project_id: String,
    /// Criterion ID → integer value on that criterion's scale.
    pub values: HashMap<String, i64>,
    /// Free-text note for deliberations.
    pub note: String,
    /// When the score was submitted.
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Score {
    /// Creates an empty score for a (judge, project) pair.
    pub fn new(judge_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            judge_id: judge_id.into(),
            project_id: project_id.into(),
            values: HashMap::new(),
            note: String::new(),
            submitted_at: None,
        }
    }

    /// Sets the value for a criterion.
    pub fn with_value(mut self, criterion_id: impl Into<String>, value: i64) -> Self {
        self.values.insert(criterion_id.into(), value);
        self
    }

    /// Sets the free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the submission timestamp.
    pub fn with_submitted_at(mut self, t: DateTime<Utc>) -> Self {
        self.submitted_at = Some(t);
        self
    }
}

/// Keyed score collection.
///
/// Owns the unique-key invariant: `upsert` replaces any existing score for
/// the same `(judge_id, project_id)` pair instead of appending a duplicate.
/// Blind appends would silently corrupt rank-point accounting downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBook {
    scores: Vec<Score>,
}

impl ScoreBook {
    /// Creates an empty score book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a score, replacing any prior submission by the same judge
    /// for the same project.
    pub fn upsert(&mut self, score: Score) {
        match self
            .scores
            .iter_mut()
            .find(|s| s.judge_id == score.judge_id && s.project_id == score.project_id)
        {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
    }

    /// All scores, in insertion order.
    pub fn as_slice(&self) -> &[Score] {
        &self.scores
    }

    /// The score a judge submitted for a project, if any.
    pub fn get(&self, judge_id: &str, project_id: &str) -> Option<&Score> {
        self.scores
            .iter()
            .find(|s| s.judge_id == judge_id && s.project_id == project_id)
    }

    /// All scores submitted for a project.
    pub fn for_project(&self, project_id: &str) -> Vec<&Score> {
        self.scores
            .iter()
            .filter(|s| s.project_id == project_id)
            .collect()
    }

    /// All scores submitted by a judge.
    pub fn for_judge(&self, judge_id: &str) -> Vec<&Score> {
        self.scores
            .iter()
            .filter(|s| s.judge_id == judge_id)
            .collect()
    }

    /// Removes all scores submitted by a judge.
    ///
    /// For host applications that delete a judge and must not leave
    /// orphaned submissions behind. Returns the number removed.
    pub fn remove_judge(&mut self, judge_id: &str) -> usize {
        let before = self.scores.len();
        self.scores.retain(|s| s.judge_id != judge_id);
        before - self.scores.len()
    }

    /// Number of scores.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
