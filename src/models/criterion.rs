//! Judging criterion model.
//!
//! A criterion is either *general* (applies to every project) or
//! *category-scoped*: when its name exactly matches one of the organizer
//! categories, it only applies to projects tagged with that category.
//! The match is by name — renaming a category without renaming the
//! matching criterion silently turns it general. Known sharp edge.

use serde::{Deserialize, Serialize};

/// Inclusive integer range of valid score values.
///
/// Replaces a display-only text label ("1-3") with an enumerable range.
/// The range is advisory: score submissions are not rejected for falling
/// outside it, matching the observed behavior of the scoring flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreScale {
    /// Lowest valid value (inclusive).
    pub min: i64,
    /// Highest valid value (inclusive).
    pub max: i64,
}

impl ScoreScale {
    /// Creates a scale over `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether a value falls inside the scale.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Display label, e.g. `"1-3"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

impl Default for ScoreScale {
    /// The canonical hackathon scale: 1 to 3.
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

/// A judging rubric line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique criterion identifier.
    pub id: String,
    /// Criterion name. A name matching an organizer category makes the
    /// criterion category-scoped.
    pub name: String,
    /// Guidance text shown to judges.
    pub description: String,
    /// Valid score range.
    pub scale: ScoreScale,
    /// Relative weight applied to raw scores. Always positive.
    pub weight: f64,
}

impl Criterion {
    /// Creates a new criterion with the default scale and weight 1.0.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            scale: ScoreScale::default(),
            weight: 1.0,
        }
    }

    /// Sets the guidance text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the score scale.
    pub fn with_scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the weight. Non-positive input falls back to the default 1.0.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = if weight > 0.0 { weight } else { 1.0 };
        self
    }

    /// Whether this criterion is scoped to one of the organizer categories.
    pub fn is_category_scoped(&self, organizer_categories: &[String]) -> bool {
        organizer_categories.iter().any(|c| c == &self.name)
    }
}
