//! Feasibility validation ("stress test") for an event plan.
//!
//! Evaluates twelve independent rules over an [`EventConfig`] and returns
//! a pass/fail verdict, the full list of violations, and the derived
//! capacity metrics. Checks never short-circuit: the error set is a
//! deterministic function of the configuration, so every applicable
//! violation is reported together.
//!
//! Violations are data, not control flow — the validator itself cannot
//! fail. Each violation carries a stable single-letter code (A–L) so
//! tests and callers can match rules without parsing prose.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{EventConfig, OrganizerRole};
use crate::timeline::minutes_between;

/// Minimum minutes a judge needs per project, transition included.
const MIN_MINUTES_PER_PROJECT: f64 = 5.0;
/// Fraction of registered judges expected to actually show up.
const JUDGE_SHOW_RATE: f64 = 0.8;
/// Estimated attendees per submitted project.
const ATTENDEES_PER_PROJECT: f64 = 5.0;
/// Spare-table headroom factor over the projected project count.
const TABLE_HEADROOM: f64 = 1.3;

/// Stable identifier for each feasibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    /// A: minutes per project below the judging+transition floor.
    MinutesPerProject,
    /// B: more projected projects than tables.
    TableCapacity,
    /// C: judge arrival → orientation gap too short.
    ArrivalGap,
    /// D: orientation → judging start gap too short.
    OrientationGap,
    /// E: hard deadline → judging start gap too short.
    DeadlineToJudging,
    /// F: judging window too short overall.
    JudgingWindow,
    /// G: not enough spare tables over the projection.
    TableHeadroom,
    /// H: soft deadline → hard deadline gap too short.
    DeadlineSpread,
    /// I: judging end → closing ceremony gap too short.
    CeremonyGap,
    /// J: closing ceremony → venue cutoff gap too short.
    CutoffGap,
    /// K: fewer than two judging rounds per project.
    JudgeCoverage,
    /// L: organizer roles unfilled, double-filled, or double-booked.
    Staffing,
}

impl RuleCode {
    /// Single-letter code used in rendered messages.
    pub fn letter(&self) -> char {
        match self {
            RuleCode::MinutesPerProject => 'A',
            RuleCode::TableCapacity => 'B',
            RuleCode::ArrivalGap => 'C',
            RuleCode::OrientationGap => 'D',
            RuleCode::DeadlineToJudging => 'E',
            RuleCode::JudgingWindow => 'F',
            RuleCode::TableHeadroom => 'G',
            RuleCode::DeadlineSpread => 'H',
            RuleCode::CeremonyGap => 'I',
            RuleCode::CutoffGap => 'J',
            RuleCode::JudgeCoverage => 'K',
            RuleCode::Staffing => 'L',
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Violated rule.
    pub code: RuleCode,
    /// Human-readable description with concrete numbers.
    pub message: String,
}

impl RuleViolation {
    fn new(code: RuleCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.letter(), self.message)
    }
}

/// Capacity quantities derived from the configuration.
///
/// Returned alongside the verdict so organizers see the arithmetic behind
/// a failure, not just the verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityMetrics {
    /// `ceil(0.8 × registered judges)` — judges expected after no-shows.
    pub effective_judges: u32,
    /// `ceil(check-ins ÷ 5)` — projects expected from attendance.
    pub projected_projects: u32,
    /// Judging window length in minutes.
    pub total_judging_minutes: f64,
    /// Judge-minutes available per required judge-visit; the core
    /// capacity-balance number.
    pub minutes_per_project: f64,
}

/// Outcome of the stress test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Whether every rule passed.
    pub passed: bool,
    /// All violations, in rule order A–L.
    pub errors: Vec<RuleViolation>,
    /// Derived capacity quantities.
    pub metrics: FeasibilityMetrics,
}

/// Runs the twelve-rule stress test over an event configuration.
///
/// Rules:
/// - **A** — at least 5 minutes per project per visit
/// - **B** — projected projects fit on the tables
/// - **C** — ≥30 min from judge arrival to orientation
/// - **D** — ≥60 min from orientation to judging start
/// - **E** — ≥60 min from hard deadline to judging start
/// - **F** — judging window ≥90 min
/// - **G** — tables ≥ 1.3× projected projects
/// - **H** — ≥60 min from soft to hard deadline
/// - **I** — ≥60 min from judging end to closing ceremony
/// - **J** — ≥60 min from closing ceremony to venue cutoff
/// - **K** — at least 2 judging rounds per project
/// - **L** — each organizer role staffed exactly once, no phone under
///   two roles
///
/// All rules run unconditionally; `passed` is simply "no violations".
/// Unset timeline points evaluate as zero-minute gaps, so an incomplete
/// plan fails the gap rules it has not pinned down yet.
pub fn validate_feasibility(config: &EventConfig) -> FeasibilityReport {
    let metrics = derive_metrics(config);
    let mut errors = Vec::new();
    let t = &config.timeline;

    // A: judging + transition floor.
    if metrics.minutes_per_project < MIN_MINUTES_PER_PROJECT {
        errors.push(RuleViolation::new(
            RuleCode::MinutesPerProject,
            format!(
                "only {:.1} minutes per project per visit; need at least {:.0} \
                 including transition time",
                metrics.minutes_per_project, MIN_MINUTES_PER_PROJECT
            ),
        ));
    }

    // B: every project needs a table.
    if metrics.projected_projects > config.table_count {
        errors.push(RuleViolation::new(
            RuleCode::TableCapacity,
            format!(
                "{} projected projects but only {} tables",
                metrics.projected_projects, config.table_count
            ),
        ));
    }

    // C: judges need time to settle in before the briefing.
    let arrival_gap = minutes_between(t.judge_arrival, t.judge_orientation);
    if arrival_gap < 30.0 {
        errors.push(RuleViolation::new(
            RuleCode::ArrivalGap,
            format!(
                "{arrival_gap:.0} minutes from judge arrival to orientation; need at least 30"
            ),
        ));
    }

    // D: briefing plus floor setup before judging starts.
    let orientation_gap = minutes_between(t.judge_orientation, t.judging_start);
    if orientation_gap < 60.0 {
        errors.push(RuleViolation::new(
            RuleCode::OrientationGap,
            format!(
                "{orientation_gap:.0} minutes from orientation to judging start; need at least 60"
            ),
        ));
    }

    // E: teams need a breather between submitting and being judged.
    // Lower bound only; a long gap is not a violation.
    let deadline_gap = minutes_between(t.hard_deadline, t.judging_start);
    if deadline_gap < 60.0 {
        errors.push(RuleViolation::new(
            RuleCode::DeadlineToJudging,
            format!(
                "{deadline_gap:.0} minutes from hard deadline to judging start; need at least 60"
            ),
        ));
    }

    // F: judging window floor.
    if metrics.total_judging_minutes < 90.0 {
        errors.push(RuleViolation::new(
            RuleCode::JudgingWindow,
            format!(
                "judging window is {:.0} minutes; need at least 90",
                metrics.total_judging_minutes
            ),
        ));
    }

    // G: spare tables for walk-ups and broken demos.
    let tables_needed = (metrics.projected_projects as f64 * TABLE_HEADROOM).ceil() as u32;
    if config.table_count < tables_needed {
        errors.push(RuleViolation::new(
            RuleCode::TableHeadroom,
            format!(
                "{} tables but {} needed (1.3x headroom over {} projected projects)",
                config.table_count, tables_needed, metrics.projected_projects
            ),
        ));
    }

    // H: the soft deadline has to mean something.
    let deadline_spread = minutes_between(t.soft_deadline, t.hard_deadline);
    if deadline_spread < 60.0 {
        errors.push(RuleViolation::new(
            RuleCode::DeadlineSpread,
            format!(
                "{deadline_spread:.0} minutes from soft to hard deadline; need at least 60"
            ),
        ));
    }

    // I: deliberation time before the ceremony.
    let ceremony_gap = minutes_between(t.judging_end, t.closing_ceremony);
    if ceremony_gap < 60.0 {
        errors.push(RuleViolation::new(
            RuleCode::CeremonyGap,
            format!(
                "{ceremony_gap:.0} minutes from judging end to closing ceremony; need at least 60"
            ),
        ));
    }

    // J: teardown margin before the venue kicks everyone out.
    let cutoff_gap = minutes_between(t.closing_ceremony, t.venue_cutoff);
    if cutoff_gap < 60.0 {
        errors.push(RuleViolation::new(
            RuleCode::CutoffGap,
            format!(
                "{cutoff_gap:.0} minutes from closing ceremony to venue cutoff; need at least 60"
            ),
        ));
    }

    // K: a single opinion per project is not a ranking.
    if config.judges_per_project < 2 {
        errors.push(RuleViolation::new(
            RuleCode::JudgeCoverage,
            format!(
                "{} judge(s) per project; need at least 2 for a meaningful ranking",
                config.judges_per_project
            ),
        ));
    }

    // L: staffing — each role exactly once, no phone double-booked.
    check_staffing(config, &mut errors);

    FeasibilityReport {
        passed: errors.is_empty(),
        errors,
        metrics,
    }
}

fn derive_metrics(config: &EventConfig) -> FeasibilityMetrics {
    let effective_judges = (JUDGE_SHOW_RATE * config.judges.len() as f64).ceil() as u32;
    let projected_projects =
        (config.estimated_check_ins as f64 / ATTENDEES_PER_PROJECT).ceil() as u32;
    let total_judging_minutes = config.timeline.judging_minutes();

    let visits = projected_projects as f64 * config.judges_per_project as f64;
    let minutes_per_project = if visits > 0.0 {
        effective_judges as f64 * total_judging_minutes / visits
    } else {
        0.0
    };

    FeasibilityMetrics {
        effective_judges,
        projected_projects,
        total_judging_minutes,
        minutes_per_project,
    }
}

fn check_staffing(config: &EventConfig, errors: &mut Vec<RuleViolation>) {
    for role in OrganizerRole::ALL {
        let count = config.organizers.iter().filter(|o| o.role == role).count();
        if count != 1 {
            errors.push(RuleViolation::new(
                RuleCode::Staffing,
                format!(
                    "role '{}' is staffed by {} organizers; need exactly 1",
                    role.name(),
                    count
                ),
            ));
        }
    }

    let mut roles_by_phone: HashMap<&str, Vec<OrganizerRole>> = HashMap::new();
    for o in &config.organizers {
        let roles = roles_by_phone.entry(o.phone.as_str()).or_default();
        if !roles.contains(&o.role) {
            roles.push(o.role);
        }
    }
    for (phone, roles) in roles_by_phone {
        if roles.len() > 1 {
            errors.push(RuleViolation::new(
                RuleCode::Staffing,
                format!("phone {phone} is listed under {} roles", roles.len()),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Judge, Organizer};
    use crate::timeline::Timeline;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, hour, min, 0).unwrap()
    }

    /// A plan that satisfies every rule.
    fn sane_config() -> EventConfig {
        let timeline = Timeline::new()
            .with_soft_deadline(at(10, 0))
            .with_hard_deadline(at(11, 0))
            .with_judge_arrival(at(10, 0))
            .with_judge_orientation(at(10, 45))
            .with_judging_start(at(12, 0))
            .with_judging_end(at(14, 0))
            .with_deliberations(at(14, 0))
            .with_closing_ceremony(at(15, 0))
            .with_venue_cutoff(at(16, 0));

        let mut config = EventConfig::new()
            .with_timeline(timeline)
            .with_table_count(30)
            .with_judges_per_project(3)
            .with_estimated_check_ins(100)
            .with_organizer(Organizer::new("Ana", "555-0100", OrganizerRole::Lead))
            .with_organizer(Organizer::new("Ben", "555-0101", OrganizerRole::Judging))
            .with_organizer(Organizer::new("Cyd", "555-0102", OrganizerRole::Logistics))
            .with_organizer(Organizer::new(
                "Dee",
                "555-0103",
                OrganizerRole::Communications,
            ));
        for i in 0..15 {
            config = config.with_judge(Judge::new(format!("j{i}")));
        }
        config
    }

    fn codes(report: &FeasibilityReport) -> Vec<char> {
        report.errors.iter().map(|e| e.code.letter()).collect()
    }

    #[test]
    fn test_sane_config_passes() {
        let report = validate_feasibility(&sane_config());
        assert!(report.passed, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_derived_metrics_worked_example() {
        // 100 check-ins → 20 projects; 15 judges → 12 effective;
        // 120-minute window, 3 rounds → 12*120/(20*3) = 24.0 min/project.
        let report = validate_feasibility(&sane_config());
        assert_eq!(report.metrics.projected_projects, 20);
        assert_eq!(report.metrics.effective_judges, 12);
        assert!((report.metrics.total_judging_minutes - 120.0).abs() < 1e-10);
        assert!((report.metrics.minutes_per_project - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_rule_a_minutes_per_project() {
        // One registered judge: 1*120/(20*3) = 2 minutes per visit.
        let mut config = sane_config();
        config.judges = vec![Judge::new("only")];
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['A']);
    }

    #[test]
    fn test_rule_b_implies_g() {
        // Too few tables outright violates both the fit rule and the
        // headroom rule; B never fires alone.
        let mut config = sane_config();
        config.table_count = 19;
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['B', 'G']);
    }

    #[test]
    fn test_rule_c_arrival_gap() {
        let mut config = sane_config();
        config.timeline.judge_orientation = Some(at(10, 20));
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['C']);
    }

    #[test]
    fn test_rule_d_orientation_gap() {
        let mut config = sane_config();
        config.timeline.judge_orientation = Some(at(11, 30));
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['D']);
    }

    #[test]
    fn test_rule_e_deadline_to_judging() {
        let mut config = sane_config();
        config.timeline.hard_deadline = Some(at(11, 30));
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['E']);
    }

    #[test]
    fn test_rule_e_no_upper_bound() {
        // A huge gap between hard deadline and judging start is fine.
        let mut config = sane_config();
        config.timeline.soft_deadline = Some(at(7, 0));
        config.timeline.hard_deadline = Some(at(8, 0));
        let report = validate_feasibility(&config);
        assert!(report.passed);
    }

    #[test]
    fn test_rule_f_judging_window() {
        let mut config = sane_config();
        config.timeline.judging_end = Some(at(13, 0));
        // Window shrinks to 60 minutes; I still holds (120 to ceremony)
        // and A still holds (12*60/60 = 12 min/visit).
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['F']);
    }

    #[test]
    fn test_rule_g_table_headroom() {
        // 20 projected projects fit 22 tables (B ok) but headroom wants 26.
        let mut config = sane_config();
        config.table_count = 22;
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['G']);
    }

    #[test]
    fn test_rule_h_deadline_spread() {
        let mut config = sane_config();
        config.timeline.soft_deadline = Some(at(10, 30));
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['H']);
    }

    #[test]
    fn test_rule_i_ceremony_gap() {
        let mut config = sane_config();
        config.timeline.closing_ceremony = Some(at(14, 30));
        // Cutoff at 16:00 keeps J satisfied (90 minutes).
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['I']);
    }

    #[test]
    fn test_rule_j_cutoff_gap() {
        let mut config = sane_config();
        config.timeline.venue_cutoff = Some(at(15, 30));
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['J']);
    }

    #[test]
    fn test_rule_k_judge_coverage() {
        let mut config = sane_config();
        config.judges_per_project = 1;
        // Fewer required visits raises minutes per project, so A still holds.
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['K']);
    }

    #[test]
    fn test_rule_l_unfilled_role() {
        let mut config = sane_config();
        config
            .organizers
            .retain(|o| o.role != OrganizerRole::Communications);
        let report = validate_feasibility(&config);
        assert_eq!(codes(&report), vec!['L']);
        assert!(report.errors[0].message.contains("communications"));
    }

    #[test]
    fn test_rule_l_double_booked_phone() {
        let mut config = sane_config();
        // Dee covers communications AND logistics from the same phone.
        config.organizers.retain(|o| o.role != OrganizerRole::Logistics);
        config
            .organizers
            .push(Organizer::new("Dee", "555-0103", OrganizerRole::Logistics));
        let report = validate_feasibility(&config);
        assert!(codes(&report).iter().all(|&c| c == 'L'));
        assert!(report.errors.iter().any(|e| e.message.contains("555-0103")));
    }

    #[test]
    fn test_empty_config_accumulates_everything() {
        // No timeline, no judges, no tables, no staff: every gap reads as
        // zero and nothing short-circuits.
        let report = validate_feasibility(&EventConfig::new());
        assert!(!report.passed);
        let found = codes(&report);
        for c in ['A', 'C', 'D', 'E', 'F', 'H', 'I', 'J', 'K', 'L'] {
            assert!(found.contains(&c), "missing code {c}");
        }
        // B and G hold trivially: zero projected projects fit zero tables.
        assert!(!found.contains(&'B'));
        assert!(!found.contains(&'G'));
    }

    #[test]
    fn test_violation_display_prefix() {
        let mut config = sane_config();
        config.judges_per_project = 1;
        let report = validate_feasibility(&config);
        assert!(report.errors[0].to_string().starts_with("K: "));
    }

    #[test]
    fn test_report_serializes() {
        let report = validate_feasibility(&sane_config());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"passed\":true"));
    }
}
