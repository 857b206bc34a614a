const FADE_DISTANCE_PX: f64 = 300.0;
const TRANSLATE_DIVISOR: f64 = 6.0;
const MAX_TRANSLATE_PX: f64 = 40.0;

/// Opacity and upward shift of the hero header for a given page scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

impl HeaderStyle {
    pub fn from_scroll(scroll_y: f64) -> Self {
        let scroll_y = if scroll_y.is_finite() {
            scroll_y.max(0.0)
        } else {
            0.0
        };

        Self {
            opacity: (1.0 - scroll_y / FADE_DISTANCE_PX).max(0.0),
            translate_y: (scroll_y / TRANSLATE_DIVISOR).min(MAX_TRANSLATE_PX),
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY(-{:.2}px);",
            self.opacity, self.translate_y
        )
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self::from_scroll(0.0)
    }
}
