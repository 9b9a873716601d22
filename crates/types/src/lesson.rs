//! The lesson-plan record handed to the rendering core.
//!
//! Values arrive from an external generation step (usually as JSON with
//! camelCase keys) and are never mutated by the renderers.

use serde::{Deserialize, Serialize};

/// One timed step of the lesson procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Free-form text with inline markup.
    pub description: String,
}

impl Activity {
    pub fn new(name: impl Into<String>, duration: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonPlan {
    pub title: String,
    pub objective: String,
    pub grade_level: String,
    pub subject: String,
    /// Presentation order; duplicates are allowed.
    pub materials: Vec<String>,
    /// Presentation order.
    pub activities: Vec<Activity>,
    pub assessment: String,
    pub homework: String,
    pub summary: String,
}

impl LessonPlan {
    /// The first whitespace-delimited token of `grade_level` ("9" for "9th Grade").
    ///
    /// Falls back to the full string when there is no token to take.
    pub fn grade_short_label(&self) -> &str {
        self.grade_level
            .split_whitespace()
            .next()
            .unwrap_or(&self.grade_level)
    }
}
