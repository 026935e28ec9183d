//! A paged card-swiper carousel for ratatui.
//!
//! The crate is split in two halves:
//!
//! - [`carousel`] holds the toolkit-independent core: the observable
//!   [`CarouselState`], the strip offset arithmetic in [`StripGeometry`],
//!   the Idle/Dragging [`DragGesture`] state machine and the [`Spring`]
//!   used for transitions.
//! - [`ui`] renders that core as ratatui widgets: [`CarouselCard`],
//!   [`Carousel`], [`PagingIndicator`] and the [`SwiftyCarousel`]
//!   composition most hosts use directly.
//!
//! The host owns the [`CarouselState`] and a [`CarouselMotion`], forwards
//! pointer events into a [`DragGesture`] and redraws when the state
//! notifies a change or the motion is still animating.

pub mod carousel;
pub mod ui;

pub use carousel::constants::Constants;
pub use carousel::geometry::StripGeometry;
pub use carousel::gesture::{
    advance, retreat, DragGesture, DragPhase, HapticFeedback, ImpactStyle, NoFeedback,
    SwipeOutcome, SWIPE_THRESHOLD,
};
pub use carousel::spring::Spring;
pub use carousel::state::{CarouselState, StateChange, SubscriptionId};
pub use ui::card::{CardContent, CarouselCard};
pub use ui::metrics::CellMetrics;
pub use ui::motion::CarouselMotion;
pub use ui::paging_indicator::PagingIndicator;
pub use ui::strip::Carousel;
pub use ui::style::{CarouselStyle, Dimensions};
pub use ui::swifty_carousel::SwiftyCarousel;
