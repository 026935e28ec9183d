use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::view;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use swifty_carousel::{advance, retreat, SwipeOutcome};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let mut actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::CarouselChanged(change) => {
            state.on_carousel_change(change);
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state, Instant::now());
            vec![]
        }
    };

    if state.bell.take() {
        actions.push(Action::Bell);
    }
    actions
}

fn handle_tick(state: &mut AppState, now: Instant) {
    let dt = now.duration_since(state.last_tick).as_secs_f32();
    state.last_tick = now;
    if state.motion.is_animating() {
        state.motion.advance(dt);
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            cancel_drag(state);
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        CEvent::FocusLost => {
            cancel_drag(state);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Right | KeyCode::Char('l') if state.config.behavior.keyboard_navigation => {
            if !state.gesture.is_dragging() {
                let n = state.card_count();
                let outcome = advance(&mut state.carousel, n, &mut state.bell);
                log_outcome("keyboard", outcome);
            }
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') if state.config.behavior.keyboard_navigation => {
            if !state.gesture.is_dragging() {
                let n = state.card_count();
                let outcome = retreat(&mut state.carousel, n, &mut state.bell);
                log_outcome("keyboard", outcome);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let strip = view::strip_area(state);
            if state.cards.is_empty() || !strip.contains(Position::new(mouse.column, mouse.row)) {
                return;
            }
            state.pointer = Some(PointerDrag {
                origin_column: mouse.column,
            });
            state.gesture.begin(&mut state.carousel);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(pointer) = state.pointer else {
                return;
            };
            let translation = translation_px(state, pointer, mouse.column);
            state.gesture.update(&mut state.carousel, translation);
            state.dirty = true;
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(pointer) = state.pointer.take() else {
                return;
            };
            let translation = translation_px(state, pointer, mouse.column);
            let n = state.card_count();
            let outcome = state
                .gesture
                .end(&mut state.carousel, translation, n, &mut state.bell);
            log_outcome("drag", outcome);
            state.dirty = true;
        }
        _ => {}
    }
}

/// Horizontal pointer travel since the button went down, in pixels.
fn translation_px(state: &AppState, pointer: PointerDrag, column: u16) -> f32 {
    let columns = column as i32 - pointer.origin_column as i32;
    columns as f32 * state.config.display.column_px
}

fn cancel_drag(state: &mut AppState) {
    if state.pointer.take().is_some() || state.gesture.is_dragging() {
        let n = state.card_count();
        state.gesture.cancel(&mut state.carousel, n);
        state.dirty = true;
        tracing::debug!("drag interrupted");
    }
}

fn log_outcome(source: &str, outcome: SwipeOutcome) {
    if outcome.changed_card() {
        tracing::info!(source, ?outcome, "switched card");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn app() -> AppState {
        let mut config = AppConfig::default();
        config.behavior.bell_on_swipe = true;
        AppState::new(config, Rect::new(0, 0, 80, 24))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn drag(state: &mut AppState, from: u16, to: u16) -> Vec<Action> {
        let row = view::strip_area(state).y + 2;
        handle_event(state, mouse(MouseEventKind::Down(MouseButton::Left), from, row));
        handle_event(state, mouse(MouseEventKind::Drag(MouseButton::Left), to, row));
        handle_event(state, mouse(MouseEventKind::Up(MouseButton::Left), to, row))
    }

    #[test]
    fn test_drag_left_past_threshold_advances() {
        // 8 columns * 8px = 64px > 50px
        let mut state = app();
        let actions = drag(&mut state, 40, 32);
        assert_eq!(state.carousel.active_card_index(), 1);
        assert_eq!(state.carousel.screen_drag(), 0.0);
        assert_eq!(actions, vec![Action::Bell]);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        // 4 columns * 8px = 32px
        let mut state = app();
        let actions = drag(&mut state, 40, 36);
        assert_eq!(state.carousel.active_card_index(), 0);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_drag_right_on_first_card_stays() {
        let mut state = app();
        drag(&mut state, 30, 50);
        assert_eq!(state.carousel.active_card_index(), 0);
    }

    #[test]
    fn test_live_drag_updates_screen_drag() {
        let mut state = app();
        let row = view::strip_area(&state).y + 1;
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, row));
        handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 37, row));
        assert_eq!(state.carousel.screen_drag(), -24.0);
        assert!(state.gesture.is_dragging());
    }

    #[test]
    fn test_press_outside_strip_is_ignored() {
        let mut state = app();
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, 23));
        handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 23));
        assert!(state.pointer.is_none());
        assert_eq!(state.carousel.screen_drag(), 0.0);
    }

    #[test]
    fn test_focus_lost_cancels_drag() {
        let mut state = app();
        let row = view::strip_area(&state).y + 1;
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, row));
        handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 10, row));
        handle_event(&mut state, AppEvent::Terminal(CEvent::FocusLost));
        assert_eq!(state.carousel.screen_drag(), 0.0);
        assert_eq!(state.carousel.active_card_index(), 0);
        assert!(!state.gesture.is_dragging());
        assert!(state.pointer.is_none());
    }

    #[test]
    fn test_resize_cancels_drag() {
        let mut state = app();
        let row = view::strip_area(&state).y + 1;
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 40, row));
        handle_event(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 10, row));
        assert_eq!(state.carousel.screen_drag(), -240.0);

        state.dirty = false;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 30)));
        assert_eq!(state.carousel.screen_drag(), 0.0);
        assert_eq!(state.carousel.active_card_index(), 0);
        assert!(!state.gesture.is_dragging());
        assert!(state.pointer.is_none());
        assert_eq!(state.viewport, Rect::new(0, 0, 100, 30));
        assert!(state.dirty);

        // The release after the resize no longer belongs to a drag.
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 10, row);
        let actions = handle_event(&mut state, up);
        assert_eq!(state.carousel.active_card_index(), 0);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_arrow_keys_step_within_bounds() {
        let mut state = app();
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.carousel.active_card_index(), 0);
        for _ in 0..10 {
            handle_event(&mut state, key(KeyCode::Right));
        }
        assert_eq!(state.carousel.active_card_index(), state.card_count() - 1);
    }

    #[test]
    fn test_keyboard_navigation_can_be_disabled() {
        let mut config = AppConfig::default();
        config.behavior.keyboard_navigation = false;
        let mut state = AppState::new(config, Rect::new(0, 0, 80, 24));
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.carousel.active_card_index(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn test_tick_marks_dirty_while_animating() {
        let mut state = app();
        let area = state.viewport;
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(area.width, area.height))
                .unwrap();
        terminal.draw(|f| view::render(f, &mut state)).unwrap();
        assert!(!state.motion.is_animating());

        handle_event(&mut state, key(KeyCode::Right));
        terminal.draw(|f| view::render(f, &mut state)).unwrap();
        assert!(state.motion.is_animating());

        state.dirty = false;
        let later = state.last_tick + Duration::from_millis(16);
        handle_tick(&mut state, later);
        assert!(state.dirty);
    }
}
