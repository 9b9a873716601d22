use crate::header::HeaderFields;
use crate::traits::{Fragment, RendersSections};
use folio_markup::tokenize;
use folio_types::{Activity, LessonPlan};

/// The titled sections of a rendered lesson plan, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Resources,
    Procedure,
    Assessment,
    Homework,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY",
            Section::Resources => "RESOURCES",
            Section::Procedure => "LESSON PROCEDURE & TIMINGS",
            Section::Assessment => "ASSESSMENT",
            Section::Homework => "HOMEWORK",
        }
    }
}

fn activity_line(activity: &Activity) -> String {
    format!(
        "{} ({} mins)",
        activity.name.to_uppercase(),
        activity.duration
    )
}

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Renders the blocks for one plan: header, then every enabled section in
/// canonical order.
pub fn render_fragment<R>(renderer: &R, plan: &LessonPlan) -> Vec<R::Block>
where
    R: RendersSections + ?Sized,
{
    let config = renderer.config();
    let mut blocks = renderer.header(&HeaderFields::new(plan, config));

    if config.include_summary && has_text(&plan.summary) {
        blocks.push(renderer.section_heading(Section::Summary));
        blocks.push(renderer.rich_text(&tokenize(&plan.summary)));
    }

    blocks.push(renderer.section_heading(Section::Resources));
    if plan.materials.is_empty() {
        blocks.push(renderer.placeholder(&config.empty_materials));
    } else {
        let items: Vec<_> = plan.materials.iter().map(|m| tokenize(m)).collect();
        blocks.extend(renderer.bullet_list(&items));
    }

    blocks.push(renderer.section_heading(Section::Procedure));
    for activity in &plan.activities {
        blocks.push(renderer.activity_heading(&activity_line(activity)));
        blocks.push(renderer.rich_text(&tokenize(&activity.description)));
    }

    blocks.push(renderer.section_heading(Section::Assessment));
    blocks.push(renderer.rich_text(&tokenize(&plan.assessment)));

    if config.include_homework && has_text(&plan.homework) {
        blocks.push(renderer.section_heading(Section::Homework));
        blocks.push(renderer.rich_text(&tokenize(&plan.homework)));
    }

    log::debug!(
        "Rendered plan '{}': {} activities, {} materials, {} blocks",
        plan.title,
        plan.activities.len(),
        plan.materials.len(),
        blocks.len()
    );
    blocks
}

/// Renders a single plan as a complete document.
pub fn render_plan<R>(renderer: &R, plan: &LessonPlan) -> R::Document
where
    R: RendersSections + ?Sized,
{
    render_batch(renderer, std::slice::from_ref(plan))
}

/// Renders several plans into one document, in the order given. Every plan
/// after the first is marked to start after a forced break.
pub fn render_batch<R>(renderer: &R, plans: &[LessonPlan]) -> R::Document
where
    R: RendersSections + ?Sized,
{
    let fragments = plans
        .iter()
        .enumerate()
        .map(|(index, plan)| Fragment {
            break_before: index > 0,
            blocks: render_fragment(renderer, plan),
        })
        .collect();
    renderer.assemble(fragments)
}
