use crate::config::RenderConfig;
use folio_markup::{Span, plain_text, tokenize};
use folio_types::LessonPlan;

/// A `LABEL: value` header entry. The value keeps its inline styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledField {
    pub label: &'static str,
    pub value: Vec<Span>,
}

impl LabeledField {
    fn plain(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: vec![Span::plain(value)],
        }
    }

    fn markup(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: tokenize(value),
        }
    }

    /// `"{label}: "`, the prefix every backend prints before the value.
    pub fn prefix(&self) -> String {
        format!("{}: ", self.label)
    }

    /// The entry as unstyled text.
    pub fn text(&self) -> String {
        format!("{}{}", self.prefix(), plain_text(&self.value))
    }
}

/// The nine fields of the header block, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    pub institution: String,
    pub product_title: String,
    pub grade: LabeledField,
    pub subject: LabeledField,
    pub periods: LabeledField,
    pub date: LabeledField,
    pub topic: LabeledField,
    pub objective: LabeledField,
    pub teacher: LabeledField,
}

impl HeaderFields {
    pub fn new(plan: &LessonPlan, config: &RenderConfig) -> Self {
        Self {
            institution: config.institution_name.clone(),
            product_title: config.product_title.clone(),
            grade: LabeledField::plain("GRADE", plan.grade_short_label()),
            subject: LabeledField::plain("SUBJECT", &plan.subject),
            periods: LabeledField::plain("PERIODS", &config.period),
            date: LabeledField::plain("DATE/TIMELINE", &config.date_placeholder),
            topic: LabeledField::markup("LESSON TOPIC", &plan.title),
            objective: LabeledField::markup("LEARNING OBJECTIVE", &plan.objective),
            teacher: LabeledField {
                label: "TEACHER",
                value: vec![Span::bold(config.teacher_name.as_str())],
            },
        }
    }

    /// The four short fields that share one header row.
    pub fn row_fields(&self) -> [&LabeledField; 4] {
        [&self.grade, &self.subject, &self.periods, &self.date]
    }

    /// All nine fields as unstyled text.
    pub fn texts(&self) -> Vec<String> {
        let mut texts = vec![self.institution.clone(), self.product_title.clone()];
        texts.extend(self.row_fields().iter().map(|f| f.text()));
        texts.push(self.topic.text());
        texts.push(self.objective.text());
        texts.push(self.teacher.text());
        texts
    }
}
