//! Animated values that survive between frames.
//!
//! Ratatui widgets are rebuilt every frame, so the springs behind the
//! card-resize and strip-offset transitions live here, owned by the host
//! next to its [`CarouselState`](crate::CarouselState). Rendering retargets
//! them; the host's tick advances them.

use crate::carousel::geometry::StripGeometry;
use crate::carousel::spring::Spring;
use crate::ui::style::Dimensions;

#[derive(Debug, Clone)]
pub struct CarouselMotion {
    enabled: bool,
    offset: Option<Spring>,
    heights: Vec<Spring>,
    screen_width: f32,
}

impl Default for CarouselMotion {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CarouselMotion {
    /// With `enabled == false` every transition snaps immediately.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            offset: None,
            heights: Vec::new(),
            screen_width: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Point the springs at the layout for the current state. While a drag
    /// is in progress the offset follows the pointer exactly.
    pub fn sync(
        &mut self,
        geometry: &StripGeometry,
        dimensions: &Dimensions,
        active_card_index: usize,
        screen_drag: f32,
    ) {
        let dragging = screen_drag != 0.0;
        let target = geometry.offset(active_card_index, screen_drag, dragging);
        let resized = self.screen_width != geometry.screen_width;
        self.screen_width = geometry.screen_width;

        let animate = self.enabled && !dragging && !resized;
        let offset = self.offset.get_or_insert_with(|| Spring::carousel(target));
        if animate {
            offset.set_target(target);
        } else {
            offset.snap_to(target);
        }

        let n = geometry.number_of_items;
        self.heights.truncate(n);
        while self.heights.len() < n {
            let index = self.heights.len();
            let height = dimensions.card_height_for(index == active_card_index);
            self.heights.push(Spring::carousel(height));
        }
        for (index, spring) in self.heights.iter_mut().enumerate() {
            let height = dimensions.card_height_for(index == active_card_index);
            if self.enabled && !resized {
                spring.set_target(height);
            } else {
                spring.snap_to(height);
            }
        }
    }

    /// Advance every spring by `dt` seconds. Returns `true` while anything
    /// is still moving.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut moving = false;
        if let Some(offset) = self.offset.as_mut() {
            moving |= offset.step(dt);
        }
        for spring in self.heights.iter_mut() {
            moving |= spring.step(dt);
        }
        moving
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_some_and(|s| !s.is_settled()) || self.heights.iter().any(|s| !s.is_settled())
    }

    pub fn offset(&self) -> Option<f32> {
        self.offset.map(|s| s.value())
    }

    pub fn card_height(&self, index: usize) -> Option<f32> {
        self.heights.get(index).map(Spring::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::CarouselStyle;

    fn setup() -> (StripGeometry, Dimensions) {
        let dims = CarouselStyle {
            card_width: Some(200.0),
            inactive_card_height: Some(100.0),
            ..CarouselStyle::default()
        }
        .resolve(320.0);
        let geometry = StripGeometry {
            number_of_items: 3,
            card_width: dims.card_width,
            spacing: dims.spacing,
            inactive_card_width: dims.inactive_card_width,
            screen_width: 320.0,
        };
        (geometry, dims)
    }

    #[test]
    fn test_first_sync_starts_at_rest() {
        let (geometry, dims) = setup();
        let mut motion = CarouselMotion::default();
        motion.sync(&geometry, &dims, 0, 0.0);
        assert!(!motion.is_animating());
        assert_eq!(motion.offset(), Some(geometry.base_offset(0)));
        assert_eq!(motion.card_height(0), Some(dims.card_height));
        assert_eq!(motion.card_height(1), Some(100.0));
    }

    #[test]
    fn test_index_change_animates_to_new_offset() {
        let (geometry, dims) = setup();
        let mut motion = CarouselMotion::default();
        motion.sync(&geometry, &dims, 0, 0.0);
        motion.sync(&geometry, &dims, 1, 0.0);
        assert!(motion.is_animating());
        assert_eq!(motion.offset(), Some(geometry.base_offset(0)));

        motion.advance(0.05);
        let midway = motion.offset().unwrap();
        assert!(midway < geometry.base_offset(0) && midway > geometry.base_offset(1));

        while motion.advance(1.0 / 60.0) {}
        assert_eq!(motion.offset(), Some(geometry.base_offset(1)));
        assert_eq!(motion.card_height(1), Some(dims.card_height));
        assert_eq!(motion.card_height(0), Some(100.0));
    }

    #[test]
    fn test_drag_tracks_pointer_exactly() {
        let (geometry, dims) = setup();
        let mut motion = CarouselMotion::default();
        motion.sync(&geometry, &dims, 0, 0.0);
        motion.sync(&geometry, &dims, 0, -30.0);
        assert_eq!(motion.offset(), Some(geometry.base_offset(0) - 30.0));
    }

    #[test]
    fn test_disabled_motion_snaps() {
        let (geometry, dims) = setup();
        let mut motion = CarouselMotion::new(false);
        motion.sync(&geometry, &dims, 0, 0.0);
        motion.sync(&geometry, &dims, 2, 0.0);
        assert!(!motion.is_animating());
        assert_eq!(motion.offset(), Some(geometry.base_offset(2)));
    }
}
