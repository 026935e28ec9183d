//! Ratatui widgets for the carousel: the card chrome, the horizontal
//! strip, the paging dots and the composed [`SwiftyCarousel`].

pub mod card;
pub mod metrics;
pub mod motion;
pub mod paging_indicator;
pub mod strip;
pub mod style;
pub mod swifty_carousel;
pub mod theme;

pub use swifty_carousel::SwiftyCarousel;
