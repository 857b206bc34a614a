pub const WHEEL_STEP: f64 = 0.2;
pub const VISIBLE_COUNT: usize = 5;
pub const STACK_GAP_PX: usize = 10;
pub const SPREAD_WIDTH_PX: usize = 220;
pub const STACKED_SCALE: f64 = 0.95;
pub const TRAILING_SCALE: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Forward,
    Backward,
}

impl WheelDirection {
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

// One notch stacks one image, so the step count doubles as the stacked count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryOffset {
    steps: usize,
}

impl GalleryOffset {
    pub fn advance(self, direction: WheelDirection, image_count: usize) -> Self {
        match direction {
            WheelDirection::Backward => Self {
                steps: self.steps.saturating_sub(1),
            },
            WheelDirection::Forward => {
                let next = self.steps + 1;
                if next >= image_count {
                    self
                } else {
                    Self { steps: next }
                }
            }
        }
    }

    pub fn value(self) -> f64 {
        self.steps as f64 * WHEEL_STEP
    }

    pub fn overlap_count(self, image_count: usize) -> usize {
        self.steps.min(image_count)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Stacked,
    Spread,
    Trailing,
}

impl Placement {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Stacked => "is-stacked",
            Self::Spread => "is-spread",
            Self::Trailing => "is-trailing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    pub placement: Placement,
    pub left_px: usize,
    pub scale: Option<f64>,
    pub z_index: usize,
    pub unfiltered: bool,
}

impl ImageLayout {
    pub fn to_css(&self) -> String {
        let mut css = format!("left: {}px;", self.left_px);
        if let Some(scale) = self.scale {
            css.push_str(&format!(" transform: scale({scale});"));
        }
        if self.unfiltered {
            css.push_str(" filter: none;");
        }
        css.push_str(&format!(" z-index: {};", self.z_index));
        css
    }
}

pub fn layout(offset: GalleryOffset, image_count: usize) -> Vec<ImageLayout> {
    let overlap = offset.overlap_count(image_count);
    let show = VISIBLE_COUNT.min(image_count - overlap);

    (0..image_count)
        .map(|idx| {
            if idx < overlap {
                ImageLayout {
                    placement: Placement::Stacked,
                    left_px: idx * STACK_GAP_PX,
                    scale: Some(STACKED_SCALE),
                    z_index: idx,
                    unfiltered: false,
                }
            } else if idx < overlap + show {
                ImageLayout {
                    placement: Placement::Spread,
                    left_px: overlap * STACK_GAP_PX + (idx - overlap) * SPREAD_WIDTH_PX,
                    scale: None,
                    z_index: idx,
                    unfiltered: true,
                }
            } else {
                ImageLayout {
                    placement: Placement::Trailing,
                    left_px: overlap * STACK_GAP_PX
                        + show * SPREAD_WIDTH_PX
                        + (idx - overlap - show) * STACK_GAP_PX,
                    scale: Some(TRAILING_SCALE),
                    z_index: 0,
                    unfiltered: false,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: usize = 21;

    fn scrolled(notches: usize) -> GalleryOffset {
        (0..notches).fold(GalleryOffset::default(), |offset, _| {
            offset.advance(WheelDirection::Forward, COUNT)
        })
    }

    fn placements(layouts: &[ImageLayout]) -> (usize, usize, usize) {
        layouts.iter().fold((0, 0, 0), |(s, p, t), item| match item.placement {
            Placement::Stacked => (s + 1, p, t),
            Placement::Spread => (s, p + 1, t),
            Placement::Trailing => (s, p, t + 1),
        })
    }

    #[test]
    fn wheel_direction_follows_delta_sign() {
        assert_eq!(WheelDirection::from_delta(120.0), Some(WheelDirection::Forward));
        assert_eq!(WheelDirection::from_delta(-3.5), Some(WheelDirection::Backward));
        assert_eq!(WheelDirection::from_delta(0.0), None);
        assert_eq!(WheelDirection::from_delta(f64::NAN), None);
    }

    #[test]
    fn backward_at_start_clamps_to_zero() {
        let offset = GalleryOffset::default().advance(WheelDirection::Backward, COUNT);
        assert_eq!(offset, GalleryOffset::default());
        assert_eq!(offset.value(), 0.0);
    }

    #[test]
    fn forward_stops_before_every_image_is_stacked() {
        let offset = scrolled(100);
        assert_eq!(offset.overlap_count(COUNT), COUNT - 1);
        assert!((offset.value() - 4.0).abs() < 1e-9);
        assert!(offset.value() <= COUNT as f64 / 5.0);
        assert_eq!(offset.advance(WheelDirection::Forward, COUNT), offset);
    }

    #[test]
    fn overlap_count_tracks_notches_exactly() {
        for notches in 0..COUNT {
            assert_eq!(scrolled(notches).overlap_count(COUNT), notches);
        }
        assert_eq!(scrolled(7).overlap_count(4), 4);
    }

    #[test]
    fn offset_value_does_not_drift() {
        let there_and_back = (0..13)
            .fold(scrolled(13), |offset, _| {
                offset.advance(WheelDirection::Backward, COUNT)
            });
        assert_eq!(there_and_back, GalleryOffset::default());
        assert_eq!(scrolled(15).value(), 15.0 * WHEEL_STEP);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let offset = GalleryOffset::default().advance(WheelDirection::Forward, 0);
        assert_eq!(offset, GalleryOffset::default());
        assert!(layout(offset, 0).is_empty());
    }

    #[test]
    fn initial_layout_spreads_first_five() {
        let layouts = layout(GalleryOffset::default(), COUNT);
        assert_eq!(placements(&layouts), (0, 5, 16));

        let lefts: Vec<usize> = layouts.iter().take(7).map(|item| item.left_px).collect();
        assert_eq!(lefts, vec![0, 220, 440, 660, 880, 1100, 1110]);
        assert_eq!(layouts[6].z_index, 0);
        assert_eq!(layouts[6].scale, Some(TRAILING_SCALE));
    }

    #[test]
    fn stacked_images_sit_left_of_the_window() {
        let layouts = layout(scrolled(3), COUNT);
        assert_eq!(placements(&layouts), (3, 5, 13));

        assert_eq!(layouts[2].left_px, 20);
        assert_eq!(layouts[2].z_index, 2);
        assert_eq!(layouts[2].scale, Some(STACKED_SCALE));
        assert_eq!(layouts[3].left_px, 30);
        assert!(layouts[3].unfiltered);
        assert_eq!(layouts[8].left_px, 30 + 5 * 220);
    }

    #[test]
    fn window_shrinks_near_the_end() {
        let layouts = layout(scrolled(18), COUNT);
        assert_eq!(placements(&layouts), (18, 3, 0));

        let layouts = layout(scrolled(30), COUNT);
        assert_eq!(placements(&layouts), (20, 1, 0));
    }

    #[test]
    fn left_edges_never_decrease() {
        for notches in 0..COUNT {
            let layouts = layout(scrolled(notches), COUNT);
            assert!(layouts
                .windows(2)
                .all(|pair| pair[0].left_px <= pair[1].left_px));
        }
    }

    #[test]
    fn css_reflects_placement() {
        let layouts = layout(scrolled(1), COUNT);
        assert_eq!(
            layouts[0].to_css(),
            "left: 0px; transform: scale(0.95); z-index: 0;"
        );
        assert_eq!(layouts[1].to_css(), "left: 10px; filter: none; z-index: 1;");
        assert_eq!(
            layouts[6].to_css(),
            "left: 1110px; transform: scale(0.9); z-index: 0;"
        );
    }
}
