//! Event configuration for the feasibility stress test.

use serde::{Deserialize, Serialize};

use crate::models::Judge;
use crate::timeline::Timeline;

/// Organizer duty that must be staffed during judging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizerRole {
    /// Overall event lead.
    Lead,
    /// Runs the judging floor.
    Judging,
    /// Venue, tables, food.
    Logistics,
    /// Announcements and attendee comms.
    Communications,
}

impl OrganizerRole {
    /// Every role. Each must be staffed by exactly one organizer.
    pub const ALL: [OrganizerRole; 4] = [
        OrganizerRole::Lead,
        OrganizerRole::Judging,
        OrganizerRole::Logistics,
        OrganizerRole::Communications,
    ];

    /// Role name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OrganizerRole::Lead => "lead",
            OrganizerRole::Judging => "judging",
            OrganizerRole::Logistics => "logistics",
            OrganizerRole::Communications => "communications",
        }
    }
}

/// An organizer staffing one role, reachable by phone during the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizer {
    /// Display name.
    pub name: String,
    /// Contact phone. Duplicate-role detection keys on this.
    pub phone: String,
    /// Staffed role.
    pub role: OrganizerRole,
}

impl Organizer {
    /// Creates an organizer.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        role: OrganizerRole,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            role,
        }
    }
}

/// Everything the feasibility validator inspects: the timeline, the judge
/// roster, venue capacity, coverage policy, staffing, and the attendance
/// estimate the project count is projected from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventConfig {
    /// Named event instants.
    pub timeline: Timeline,
    /// Registered judges.
    pub judges: Vec<Judge>,
    /// Tables available on the judging floor.
    pub table_count: u32,
    /// Required judging rounds per project.
    pub judges_per_project: u32,
    /// Organizer staffing.
    pub organizers: Vec<Organizer>,
    /// Estimated attendee check-ins (projects are projected at one per
    /// five attendees).
    pub estimated_check_ins: u32,
}

impl EventConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeline.
    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Adds a judge.
    pub fn with_judge(mut self, judge: Judge) -> Self {
        self.judges.push(judge);
        self
    }

    /// Sets the table count.
    pub fn with_table_count(mut self, count: u32) -> Self {
        self.table_count = count;
        self
    }

    /// Sets the required rounds per project.
    pub fn with_judges_per_project(mut self, n: u32) -> Self {
        self.judges_per_project = n;
        self
    }

    /// Adds an organizer.
    pub fn with_organizer(mut self, organizer: Organizer) -> Self {
        self.organizers.push(organizer);
        self
    }

    /// Sets the estimated check-ins.
    pub fn with_estimated_check_ins(mut self, count: u32) -> Self {
        self.estimated_check_ins = count;
        self
    }
}
