use folio_types::Color;
use serde::{Deserialize, Serialize};

/// Values a renderer prints that do not come from the lesson plan.
///
/// Every field has a default, so a partial TOML/JSON table deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// First line of the header block.
    ///
    /// Defaults to `"EDUCATIONAL INSTITUTION NAME"`.
    pub institution_name: String,
    /// Second line of the header block. Defaults to `"DAILY LESSON PLAN"`.
    pub product_title: String,
    /// Defaults to `"TEACHER NAME"`.
    pub teacher_name: String,
    /// Value printed after `PERIODS:`. Defaults to `"__"`.
    pub period: String,
    /// Value printed after `DATE/TIMELINE:`, a blank to fill in by hand.
    pub date_placeholder: String,
    /// The single line shown under Resources when a plan lists no materials.
    pub empty_materials: String,
    /// Section heading text and rules. Accepts `"#RRGGBB"`, `"#RGB"` or an
    /// `{ r, g, b }` table.
    pub heading_color: Color,
    /// Emit a Summary section when the plan has a non-blank summary.
    pub include_summary: bool,
    /// Emit a Homework section when the plan has non-blank homework.
    pub include_homework: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            institution_name: "EDUCATIONAL INSTITUTION NAME".to_string(),
            product_title: "DAILY LESSON PLAN".to_string(),
            teacher_name: "TEACHER NAME".to_string(),
            period: "__".to_string(),
            date_placeholder: "____________________".to_string(),
            empty_materials: "No materials required.".to_string(),
            heading_color: Color::HEADING_BLUE,
            include_summary: true,
            include_homework: true,
        }
    }
}
