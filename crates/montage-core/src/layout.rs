//! Canvas layout aspect presets.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Aspect-ratio presets for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutAspect {
    #[default]
    Square,
    Portrait,
    Landscape,
    Story,
}

impl LayoutAspect {
    /// All presets in picker order.
    pub const ALL: [LayoutAspect; 4] = [
        LayoutAspect::Square,
        LayoutAspect::Portrait,
        LayoutAspect::Landscape,
        LayoutAspect::Story,
    ];

    /// Width/height ratio of the preset.
    pub fn ratio(self) -> (f64, f64) {
        match self {
            LayoutAspect::Square => (1.0, 1.0),
            LayoutAspect::Portrait => (4.0, 5.0),
            LayoutAspect::Landscape => (1.91, 1.0),
            LayoutAspect::Story => (9.0, 16.0),
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            LayoutAspect::Square => "Square",
            LayoutAspect::Portrait => "Portrait",
            LayoutAspect::Landscape => "Landscape",
            LayoutAspect::Story => "Story",
        }
    }

    /// Compact ratio notation, e.g. `4:5`.
    pub fn notation(self) -> &'static str {
        match self {
            LayoutAspect::Square => "1:1",
            LayoutAspect::Portrait => "4:5",
            LayoutAspect::Landscape => "1.91:1",
            LayoutAspect::Story => "9:16",
        }
    }

    /// Canvas size for a given width, height derived from the ratio.
    pub fn canvas_size(self, width: f64) -> Size {
        let (w, h) = self.ratio();
        Size::new(width, width * h / w)
    }
}
