//! Judge-to-project assignments and their keyed collection.

use serde::{Deserialize, Serialize};

/// Completion state of a judging visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// The visit has not happened yet.
    Pending,
    /// The judge has submitted a score for this project.
    Completed,
}

/// One required judging visit: a judge paired with a project.
///
/// A project needing `n` rounds gets `n` assignments, each to a different
/// judge — the same `(judge_id, project_id)` pair never appears twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned judge.
    pub judge_id: String,
    /// Project to visit.
    pub project_id: String,
    /// Visit state.
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Creates a pending assignment.
    pub fn new(judge_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            judge_id: judge_id.into(),
            project_id: project_id.into(),
            status: AssignmentStatus::Pending,
        }
    }

    /// Whether the visit is still pending.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == AssignmentStatus::Pending
    }
}

/// Keyed assignment collection.
///
/// Mirrors `ScoreBook`: `upsert` keeps `(judge_id, project_id)` unique.
/// Re-planning replaces the whole book — callers `clear()` first and feed
/// the engine's fresh plan back in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentBook {
    assignments: Vec<Assignment>,
}

impl AssignmentBook {
    /// Creates an empty assignment book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a generated plan, upserting each entry.
    pub fn from_plan(plan: Vec<Assignment>) -> Self {
        let mut book = Self::new();
        for a in plan {
            book.upsert(a);
        }
        book
    }

    /// Inserts an assignment, replacing any existing one for the same
    /// (judge, project) pair.
    pub fn upsert(&mut self, assignment: Assignment) {
        match self.assignments.iter_mut().find(|a| {
            a.judge_id == assignment.judge_id && a.project_id == assignment.project_id
        }) {
            Some(existing) => *existing = assignment,
            None => self.assignments.push(assignment),
        }
    }

    /// Marks a visit completed. Returns `false` if no such assignment exists.
    pub fn mark_completed(&mut self, judge_id: &str, project_id: &str) -> bool {
        match self
            .assignments
            .iter_mut()
            .find(|a| a.judge_id == judge_id && a.project_id == project_id)
        {
            Some(a) => {
                a.status = AssignmentStatus::Completed;
                true
            }
            None => false,
        }
    }

    /// All assignments, in insertion order.
    pub fn as_slice(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Assignments for a judge (their visit list).
    pub fn for_judge(&self, judge_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.judge_id == judge_id)
            .collect()
    }

    /// Assignments for a project (its judging coverage).
    pub fn for_project(&self, project_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.project_id == project_id)
            .collect()
    }

    /// Number of assignments currently held by a judge.
    pub fn load(&self, judge_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.judge_id == judge_id)
            .count()
    }

    /// Drops every assignment. Required before regenerating a plan.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_unique_key() {
        let mut book = AssignmentBook::new();
        book.upsert(Assignment::new("j1", "p1"));
        book.upsert(Assignment::new("j1", "p1"));
        book.upsert(Assignment::new("j2", "p1"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_mark_completed() {
        let mut book = AssignmentBook::new();
        book.upsert(Assignment::new("j1", "p1"));

        assert!(book.mark_completed("j1", "p1"));
        assert!(!book.mark_completed("j1", "p9"));
        assert_eq!(book.as_slice()[0].status, AssignmentStatus::Completed);
    }

    #[test]
    fn test_load_and_queries() {
        let mut book = AssignmentBook::new();
        book.upsert(Assignment::new("j1", "p1"));
        book.upsert(Assignment::new("j1", "p2"));
        book.upsert(Assignment::new("j2", "p1"));

        assert_eq!(book.load("j1"), 2);
        assert_eq!(book.for_project("p1").len(), 2);
        assert_eq!(book.for_judge("j2").len(), 1);

        book.clear();
        assert!(book.is_empty());
    }
}
