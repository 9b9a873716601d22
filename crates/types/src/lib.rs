pub mod color;
pub mod lesson;

pub use color::Color;
pub use lesson::{Activity, LessonPlan};
