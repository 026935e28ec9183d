//! Shared, observable carousel state.
//!
//! The host creates one [`CarouselState`] per carousel on screen and keeps
//! it for as long as the carousel is shown. Widgets read it; only the drag
//! gesture handlers write to it. Subscribers are told about every change
//! so the host knows when to redraw.

use std::fmt;

/// Handle returned by [`CarouselState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A single field change, delivered to subscribers after it is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateChange {
    ActiveCardIndex { old: usize, new: usize },
    ScreenDrag { old: f32, new: f32 },
}

type Observer = Box<dyn FnMut(&StateChange)>;

pub struct CarouselState {
    active_card_index: usize,
    screen_drag: f32,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CarouselState {
    /// No validation happens here; the carousel clamps the index against
    /// its item count before using it.
    pub fn new(active_card_index: usize, screen_drag: f32) -> Self {
        Self {
            active_card_index,
            screen_drag,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn active_card_index(&self) -> usize {
        self.active_card_index
    }

    pub fn screen_drag(&self) -> f32 {
        self.screen_drag
    }

    pub fn set_active_card_index(&mut self, index: usize) {
        if self.active_card_index == index {
            return;
        }
        let old = self.active_card_index;
        self.active_card_index = index;
        self.notify(StateChange::ActiveCardIndex { old, new: index });
    }

    pub fn set_screen_drag(&mut self, drag: f32) {
        if self.screen_drag == drag {
            return;
        }
        let old = self.screen_drag;
        self.screen_drag = drag;
        self.notify(StateChange::ScreenDrag { old, new: drag });
    }

    /// Pull the active index back into `[0, count - 1]`. Returns the
    /// resulting index, or `None` when there are no items at all.
    pub fn clamp_active_card_index(&mut self, count: usize) -> Option<usize> {
        let last = count.checked_sub(1)?;
        if self.active_card_index > last {
            tracing::warn!(
                index = self.active_card_index,
                count,
                "active card index out of range, clamping"
            );
            self.set_active_card_index(last);
        }
        Some(self.active_card_index)
    }

    /// Register a callback invoked after every field change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, change: StateChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(0, 0.0)
    }
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("active_card_index", &self.active_card_index)
            .field("screen_drag", &self.screen_drag)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_setters_notify_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = CarouselState::new(0, 0.0);
        let sink = seen.clone();
        state.subscribe(move |change| sink.borrow_mut().push(*change));

        state.set_active_card_index(2);
        state.set_active_card_index(2);
        state.set_screen_drag(-12.5);
        state.set_screen_drag(-12.5);

        assert_eq!(
            *seen.borrow(),
            vec![
                StateChange::ActiveCardIndex { old: 0, new: 2 },
                StateChange::ScreenDrag { old: 0.0, new: -12.5 },
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut state = CarouselState::default();
        let sink = count.clone();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set_screen_drag(4.0);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_screen_drag(8.0);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_clamp_active_card_index() {
        let mut state = CarouselState::new(7, 0.0);
        assert_eq!(state.clamp_active_card_index(3), Some(2));
        assert_eq!(state.active_card_index(), 2);
        assert_eq!(state.clamp_active_card_index(5), Some(2));
        assert_eq!(state.clamp_active_card_index(0), None);
    }
}
