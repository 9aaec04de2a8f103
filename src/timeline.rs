//! Event timeline and minute-precision interval math.
//!
//! The timeline is the set of named wall-clock instants an organizer pins
//! down when planning the event: submission deadlines, judge logistics,
//! the judging window, and the wind-down milestones.
//!
//! # Time Model
//! All points are absolute UTC timestamps. Every point is optional —
//! interval math over an unset endpoint degrades to zero minutes rather
//! than failing, so partially-filled plans can still be stress-tested.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named wall-clock instants of the event plan.
///
/// All fields are optional; organizers fill them in incrementally. A gap
/// with a missing endpoint measures as zero minutes, so the feasibility
/// validator treats it like any other too-tight gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Soft project-submission deadline.
    pub soft_deadline: Option<DateTime<Utc>>,
    /// Hard project-submission deadline.
    pub hard_deadline: Option<DateTime<Utc>>,
    /// Judges arrive at the venue.
    pub judge_arrival: Option<DateTime<Utc>>,
    /// Judge orientation/briefing begins.
    pub judge_orientation: Option<DateTime<Utc>>,
    /// Judging rounds begin.
    pub judging_start: Option<DateTime<Utc>>,
    /// Judging rounds end.
    pub judging_end: Option<DateTime<Utc>>,
    /// Organizer deliberations begin.
    pub deliberations: Option<DateTime<Utc>>,
    /// Closing ceremony begins.
    pub closing_ceremony: Option<DateTime<Utc>>,
    /// Hard venue cutoff (everyone out).
    pub venue_cutoff: Option<DateTime<Utc>>,
}

impl Timeline {
    /// Creates an empty timeline (no points set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the soft submission deadline.
    pub fn with_soft_deadline(mut self, t: DateTime<Utc>) -> Self {
        self.soft_deadline = Some(t);
        self
    }

    /// Sets the hard submission deadline.
    pub fn with_hard_deadline(mut self, t: DateTime<Utc>) -> Self {
        self.hard_deadline = Some(t);
        self
    }

    /// Sets the judge arrival time.
    pub fn with_judge_arrival(mut self, t: DateTime<Utc>) -> Self {
        self.judge_arrival = Some(t);
        self
    }

    /// Sets the judge orientation time.
    pub fn with_judge_orientation(mut self, t: DateTime<Utc>) -> Self {
        self.judge_orientation = Some(t);
        self
    }

    /// Sets the judging start time.
    pub fn with_judging_start(mut self, t: DateTime<Utc>) -> Self {
        self.judging_start = Some(t);
        self
    }

    /// Sets the judging end time.
    pub fn with_judging_end(mut self, t: DateTime<Utc>) -> Self {
        self.judging_end = Some(t);
        self
    }

    /// Sets the deliberations time.
    pub fn with_deliberations(mut self, t: DateTime<Utc>) -> Self {
        self.deliberations = Some(t);
        self
    }

    /// Sets the closing ceremony time.
    pub fn with_closing_ceremony(mut self, t: DateTime<Utc>) -> Self {
        self.closing_ceremony = Some(t);
        self
    }

    /// Sets the venue hard cutoff.
    pub fn with_venue_cutoff(mut self, t: DateTime<Utc>) -> Self {
        self.venue_cutoff = Some(t);
        self
    }

    /// Total judging window in minutes.
    #[inline]
    pub fn judging_minutes(&self) -> f64 {
        minutes_between(self.judging_start, self.judging_end)
    }
}

/// Minutes elapsed from `a` to `b` as a real number.
///
/// Returns `0.0` if either endpoint is unset. No ordering is enforced:
/// a negative result means `b` precedes `a`, and callers interpret the
/// sign themselves.
pub fn minutes_between(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => (b - a).num_seconds() as f64 / 60.0,
        _ => 0.0,
    }
}
