//! Page spacing primitives.
use serde::{Deserialize, Serialize};

/// Page or block margins, in the unit of whichever backend owns them.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Vertical `y` on top and bottom, horizontal `x` on left and right.
    pub fn symmetric(y: f32, x: f32) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            right: 0.0,
            bottom,
            left: 0.0,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}
