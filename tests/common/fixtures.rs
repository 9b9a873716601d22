use folio::{Activity, LessonPlan};

/// A complete plan exercising every inline construct.
pub fn sample_plan(title: &str) -> LessonPlan {
    LessonPlan {
        title: title.to_string(),
        objective: "Compare *fractions* with unlike denominators".to_string(),
        grade_level: "5 Elementary".to_string(),
        subject: "Mathematics".to_string(),
        materials: vec!["Fraction strips".to_string(), "**Whiteboard**".to_string()],
        activities: vec![
            Activity::new("Warm-up", 5, "Recall that $\\frac{1}{2}$ is one half"),
            Activity::new("Guided practice", 20, "Show $$ a/b < c/d $$ on the board"),
            Activity::new("Exit ticket", 10, "Costs $5 and $10 are *not* math"),
        ],
        assessment: "Order **three** fractions".to_string(),
        homework: "Worksheet 4".to_string(),
        summary: "Comparing fractions".to_string(),
    }
}

pub fn plan_without_materials(title: &str) -> LessonPlan {
    LessonPlan {
        materials: vec![],
        ..sample_plan(title)
    }
}

pub fn plan_with_activities(names: &[String]) -> LessonPlan {
    LessonPlan {
        activities: names
            .iter()
            .enumerate()
            .map(|(i, name)| Activity::new(name.as_str(), i as u32 + 1, format!("Do {name}")))
            .collect(),
        ..sample_plan("Ordering")
    }
}

pub const SAMPLE_PLAN_JSON: &str = r#"{
    "title": "Plate Tectonics",
    "objective": "Describe **plate** boundaries",
    "gradeLevel": "8 Secondary",
    "subject": "Earth Science",
    "materials": ["Map", "Clay"],
    "activities": [
        {"name": "Demo", "duration": 15, "description": "Push the *clay* together"}
    ],
    "assessment": "Label boundaries",
    "homework": "",
    "summary": ""
}"#;
