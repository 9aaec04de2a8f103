//! Project judging-status classification.

use serde::{Deserialize, Serialize};

use crate::models::{Project, Score};

/// Judging completeness of a project, as shown on the organizer board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Flagged no-show, regardless of any scores on record.
    Purple,
    /// No scoring submissions yet.
    Red,
    /// Some submissions, but fewer than the required rounds.
    Yellow,
    /// Fully judged.
    Green,
}

/// Classifies how completely a project has been judged.
///
/// Total over every input: no-show wins over everything, then the
/// submission count against `required_rounds` decides.
pub fn classify_status(project: &Project, scores: &[Score], required_rounds: u32) -> ProjectStatus {
    if project.no_show {
        return ProjectStatus::Purple;
    }

    let submissions = scores
        .iter()
        .filter(|s| s.project_id == project.id)
        .count() as u32;

    if submissions == 0 {
        ProjectStatus::Red
    } else if submissions < required_rounds {
        ProjectStatus::Yellow
    } else {
        ProjectStatus::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_for(project_id: &str, n: usize) -> Vec<Score> {
        (0..n)
            .map(|i| Score::new(format!("j{i}"), project_id))
            .collect()
    }

    #[test]
    fn test_no_show_is_purple_regardless_of_scores() {
        let p = Project::new("p1").with_no_show(true);
        assert_eq!(classify_status(&p, &scores_for("p1", 5), 3), ProjectStatus::Purple);
        assert_eq!(classify_status(&p, &[], 3), ProjectStatus::Purple);
    }

    #[test]
    fn test_zero_scores_is_red() {
        let p = Project::new("p1");
        assert_eq!(classify_status(&p, &[], 3), ProjectStatus::Red);
        // Scores for other projects do not count.
        assert_eq!(classify_status(&p, &scores_for("p2", 4), 3), ProjectStatus::Red);
    }

    #[test]
    fn test_under_judged_is_yellow() {
        let p = Project::new("p1");
        assert_eq!(classify_status(&p, &scores_for("p1", 1), 3), ProjectStatus::Yellow);
        assert_eq!(classify_status(&p, &scores_for("p1", 2), 3), ProjectStatus::Yellow);
    }

    #[test]
    fn test_fully_judged_is_green() {
        let p = Project::new("p1");
        assert_eq!(classify_status(&p, &scores_for("p1", 3), 3), ProjectStatus::Green);
        assert_eq!(classify_status(&p, &scores_for("p1", 4), 3), ProjectStatus::Green);
    }
}
