pub mod dimension;
pub mod font;
pub mod inline;
pub mod text;

pub use dimension::Margins;
pub use font::{FontStyle, FontWeight};
pub use inline::InlineStyle;
pub use text::{TextAlign, TextRole, TextScale};
