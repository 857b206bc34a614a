pub const DRAG_MULTIPLIER: f64 = 1.5;
pub const DRAGGING_CLASS: &str = "dragging";

/// Click-and-drag panning for a horizontally scrolling container. Positions are
/// page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    active: bool,
    start_x: f64,
    start_scroll_left: f64,
}

impl DragScroll {
    pub fn begin(&mut self, page_x: f64, offset_left: f64, scroll_left: f64) {
        self.active = true;
        self.start_x = page_x - offset_left;
        self.start_scroll_left = scroll_left;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scroll_for(&self, page_x: f64, offset_left: f64) -> Option<f64> {
        if !self.active {
            return None;
        }

        let x = page_x - offset_left;
        let walk = (x - self.start_x) * DRAG_MULTIPLIER;
        Some(self.start_scroll_left - walk)
    }
}
