//! Judging domain models.
//!
//! Core record types exchanged with the host application. The engine treats
//! every collection it receives as an immutable snapshot; the two `*Book`
//! collections exist so callers can maintain the unique
//! `(judge_id, project_id)` key invariant by upserting instead of appending.
//!
//! | Type | Role |
//! |------|------|
//! | `Judge` | A person scoring projects |
//! | `Project` | A team's entry, addressed by table label |
//! | `Criterion` | A judging rubric line with a weight and scale |
//! | `Score` | One judge's submission for one project |
//! | `Assignment` | One required judging visit |
//! | `Report` | A judge-raised flag (no-show etc.) awaiting triage |
//! | `EventConfig` | Everything the feasibility validator inspects |

mod assignment;
mod criterion;
mod event;
mod judge;
mod project;
mod report;
mod score;

pub use assignment::{Assignment, AssignmentBook, AssignmentStatus};
pub use criterion::{Criterion, ScoreScale};
pub use event::{EventConfig, Organizer, OrganizerRole};
pub use judge::Judge;
pub use project::Project;
pub use report::{Report, ReportKind, ReportStatus};
pub use score::{Score, ScoreBook};
