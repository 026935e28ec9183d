use crossterm::event::Event as CrosstermEvent;
use swifty_carousel::StateChange;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Carousel state changed (forwarded by the state subscription)
    CarouselChanged(StateChange),

    /// Frame tick for animations
    Tick,
}
