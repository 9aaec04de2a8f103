//! Project (team entry) model.

use serde::{Deserialize, Serialize};

/// A team's entry, physically located at a table.
///
/// The table label is free-form ("12", "A3", "Balcony") but sorts
/// numerically whenever a leading integer can be parsed from it — the
/// assignment engine uses that ordering to walk judges through the venue
/// in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Free-form table label.
    pub table: String,
    /// Organizer categories this project competes in.
    pub categories: Vec<String>,
    /// Team member names.
    pub team_members: Vec<String>,
    /// Whether the team failed to show up for judging.
    ///
    /// No-show projects are excluded from assignment and ranking but stay
    /// addressable by ID until an organizer un-flags them.
    pub no_show: bool,
}

impl Project {
    /// Creates a new project with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            table: String::new(),
            categories: Vec::new(),
            team_members: Vec::new(),
            no_show: false,
        }
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the table label.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Adds a category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Adds a team member.
    pub fn with_team_member(mut self, member: impl Into<String>) -> Self {
        self.team_members.push(member.into());
        self
    }

    /// Marks the project as a no-show.
    pub fn with_no_show(mut self, no_show: bool) -> Self {
        self.no_show = no_show;
        self
    }

    /// Whether the project competes in the given category.
    #[inline]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Numeric table position, when the label starts with an integer.
    ///
    /// `"12"` → 12, `"14B"` → 14, `"Balcony"` → `None`.
    pub fn table_number(&self) -> Option<i64> {
        let digits: String = self
            .table
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Total-order sort key: numeric tables first in numeric order, then
    /// non-numeric labels lexicographically.
    pub fn table_sort_key(&self) -> (bool, i64, String) {
        match self.table_number() {
            Some(n) => (false, n, self.table.clone()),
            None => (true, 0, self.table.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_number_parsing() {
        assert_eq!(Project::new("p").with_table("12").table_number(), Some(12));
        assert_eq!(Project::new("p").with_table(" 7 ").table_number(), Some(7));
        assert_eq!(Project::new("p").with_table("14B").table_number(), Some(14));
        assert_eq!(Project::new("p").with_table("Balcony").table_number(), None);
        assert_eq!(Project::new("p").with_table("").table_number(), None);
    }

    #[test]
    fn test_table_sort_order() {
        let mut projects = vec![
            Project::new("a").with_table("Balcony"),
            Project::new("b").with_table("10"),
            Project::new("c").with_table("2"),
            Project::new("d").with_table("Atrium"),
        ];
        projects.sort_by_key(|p| p.table_sort_key());
        let order: Vec<&str> = projects.iter().map(|p| p.table.as_str()).collect();
        // Numeric tables first in numeric (not lexicographic) order.
        assert_eq!(order, vec!["2", "10", "Atrium", "Balcony"]);
    }

    #[test]
    fn test_has_category() {
        let p = Project::new("p").with_category("Sustainability");
        assert!(p.has_category("Sustainability"));
        assert!(!p.has_category("Health"));
    }
}
