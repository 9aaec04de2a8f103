//! Judge-raised project reports.
//!
//! During judging a judge can flag a project instead of scoring it —
//! nobody at the table, or the team is mid-demo with another judge.
//! Reports queue for organizer triage; verifying a no-show report is how
//! a project's `no_show` flag gets set.

use serde::{Deserialize, Serialize};

/// What the judge observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Nobody at the table.
    NoShow,
    /// Team busy or anything else needing organizer attention.
    Other,
}

/// Triage state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Awaiting organizer review.
    Pending,
    /// Organizer confirmed the observation.
    Verified,
    /// Organizer rejected the observation.
    Dismissed,
}

/// A flag raised by a judge against a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier.
    pub id: String,
    /// Reporting judge.
    pub judge_id: String,
    /// Flagged project.
    pub project_id: String,
    /// What was observed.
    pub kind: ReportKind,
    /// Triage state.
    pub status: ReportStatus,
    /// Optional detail from the judge.
    pub note: String,
}

impl Report {
    /// Creates a pending report.
    pub fn new(
        id: impl Into<String>,
        judge_id: impl Into<String>,
        project_id: impl Into<String>,
        kind: ReportKind,
    ) -> Self {
        Self {
            id: id.into(),
            judge_id: judge_id.into(),
            project_id: project_id.into(),
            kind,
            status: ReportStatus::Pending,
            note: String::new(),
        }
    }

    /// Sets the judge's note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Marks the report verified.
    pub fn verify(&mut self) {
        self.status = ReportStatus::Verified;
    }

    /// Marks the report dismissed.
    pub fn dismiss(&mut self) {
        self.status = ReportStatus::Dismissed;
    }

    /// Whether this report, once verified, should set the project's
    /// `no_show` flag. The engine never mutates the record store itself;
    /// the caller applies the flag.
    pub fn applies_no_show(&self) -> bool {
        self.status == ReportStatus::Verified && self.kind == ReportKind::NoShow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut r = Report::new("r1", "j1", "p1", ReportKind::NoShow).with_note("empty table");
        assert_eq!(r.status, ReportStatus::Pending);
        assert!(!r.applies_no_show());

        r.verify();
        assert!(r.applies_no_show());

        r.dismiss();
        assert!(!r.applies_no_show());
    }

    #[test]
    fn test_other_kind_never_flags_no_show() {
        let mut r = Report::new("r2", "j1", "p1", ReportKind::Other);
        r.verify();
        assert!(!r.applies_no_show());
    }
}
