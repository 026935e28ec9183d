//! Horizontal drag gesture interpretation.
//!
//! A drag moves through two phases. While `Dragging`, every move writes
//! the live translation into [`CarouselState::screen_drag`]. On release
//! the drag offset is cleared and the final translation decides whether
//! the carousel advances, retreats or snaps back.

use crate::carousel::state::CarouselState;

/// Distance in pixels a drag must exceed to switch cards.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Medium,
}

/// Tactile confirmation of a card switch.
pub trait HapticFeedback {
    fn impact(&mut self, style: ImpactStyle);
}

/// Feedback sink that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl HapticFeedback for NoFeedback {
    fn impact(&mut self, _style: ImpactStyle) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        translation: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Advanced { from: usize, to: usize },
    Retreated { from: usize, to: usize },
    SnappedBack,
}

impl SwipeOutcome {
    pub fn changed_card(&self) -> bool {
        !matches!(self, SwipeOutcome::SnappedBack)
    }
}

#[derive(Debug, Default, Clone)]
pub struct DragGesture {
    phase: DragPhase,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn begin(&mut self, state: &mut CarouselState) {
        self.phase = DragPhase::Dragging { translation: 0.0 };
        state.set_screen_drag(0.0);
    }

    /// Record the current horizontal translation. A move without a prior
    /// `begin` starts the drag implicitly.
    pub fn update(&mut self, state: &mut CarouselState, translation: f32) {
        self.phase = DragPhase::Dragging { translation };
        state.set_screen_drag(translation);
    }

    /// Finish the drag with its final translation. `screen_drag` is always
    /// reset to zero, whether or not the card changes.
    pub fn end(
        &mut self,
        state: &mut CarouselState,
        translation: f32,
        number_of_items: usize,
        feedback: &mut dyn HapticFeedback,
    ) -> SwipeOutcome {
        self.phase = DragPhase::Idle;
        state.set_screen_drag(0.0);

        let outcome = if translation < -SWIPE_THRESHOLD {
            advance(state, number_of_items, feedback)
        } else if translation > SWIPE_THRESHOLD {
            retreat(state, number_of_items, feedback)
        } else {
            SwipeOutcome::SnappedBack
        };
        tracing::debug!(translation, ?outcome, "drag ended");
        outcome
    }

    /// Abandon the drag, e.g. when the host loses pointer capture. Behaves
    /// like a release with zero translation so no offset is left behind.
    pub fn cancel(&mut self, state: &mut CarouselState, number_of_items: usize) -> SwipeOutcome {
        if !self.is_dragging() && state.screen_drag() == 0.0 {
            return SwipeOutcome::SnappedBack;
        }
        self.end(state, 0.0, number_of_items, &mut NoFeedback)
    }
}

/// Move to the next card unless already on the last one.
pub fn advance(
    state: &mut CarouselState,
    number_of_items: usize,
    feedback: &mut dyn HapticFeedback,
) -> SwipeOutcome {
    let Some(current) = state.clamp_active_card_index(number_of_items) else {
        return SwipeOutcome::SnappedBack;
    };
    if current + 1 >= number_of_items {
        return SwipeOutcome::SnappedBack;
    }
    state.set_active_card_index(current + 1);
    feedback.impact(ImpactStyle::Medium);
    SwipeOutcome::Advanced {
        from: current,
        to: current + 1,
    }
}

/// Move to the previous card unless already on the first one.
pub fn retreat(
    state: &mut CarouselState,
    number_of_items: usize,
    feedback: &mut dyn HapticFeedback,
) -> SwipeOutcome {
    let Some(current) = state.clamp_active_card_index(number_of_items) else {
        return SwipeOutcome::SnappedBack;
    };
    if current == 0 {
        return SwipeOutcome::SnappedBack;
    }
    state.set_active_card_index(current - 1);
    feedback.impact(ImpactStyle::Medium);
    SwipeOutcome::Retreated {
        from: current,
        to: current - 1,
    }
}
