use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// What a run of text *is*, independent of how a backend shows it.
///
/// Backends without a dedicated math face express [`TextRole::Math`]
/// through slant instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    #[default]
    Body,
    Math,
}

/// Relative size class. Each backend maps these to its own point sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextScale {
    #[default]
    Body,
    /// Set-off formulas, one step larger than body text.
    Display,
}
