use crate::error::ExportError;
use folio_types::LessonPlan;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Many(Vec<LessonPlan>),
    One(Box<LessonPlan>),
}

/// Parses a JSON document holding one lesson plan or an array of them.
pub fn parse_plans(json: &str) -> Result<Vec<LessonPlan>, ExportError> {
    let plans = match serde_json::from_str(json)? {
        PlanFile::Many(plans) => plans,
        PlanFile::One(plan) => vec![*plan],
    };
    Ok(plans)
}

pub fn load_plans(path: &Path) -> Result<Vec<LessonPlan>, ExportError> {
    let plans = parse_plans(&fs::read_to_string(path)?)?;
    log::debug!("Loaded {} plan(s) from {}", plans.len(), path.display());
    Ok(plans)
}
