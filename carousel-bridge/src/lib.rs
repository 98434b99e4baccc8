//! Host-side adapter for a page-by-page carousel.
//!
//! The host drives the carousel through a flat attribute store and listens
//! for string events. This crate sits between that store and a carousel
//! engine:
//! - [`CarouselControl::did_update`] reads the pending command attribute and
//!   forwards each new command exactly once to a [`CarouselController`];
//! - [`CarouselControl::build`] turns attributes into a
//!   [`RenderConfiguration`], wraps the children into an [`ItemSource`] and
//!   lays out an [`IndicatorStrip`] when enabled;
//! - page changes and scroll progress travel back as `change` and
//!   `scrolled` events through an [`EventSink`].
//!
//! On the host side, [`CommandEncoder`] produces the command strings and
//! [`ChangeEvent`] / [`ScrolledEvent`] decode the event payloads.
//!
//! # Quick Example
//!
//! ```no_run
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use carousel_bridge::{
//!     AttributeMap, CarouselControl, CarouselController, CommandEncoder,
//!     Curve, Theme, names,
//! };
//!
//! struct Engine;
//!
//! impl CarouselController for Engine {
//!     fn jump_to_page(&mut self, _index: i64) {}
//!     fn animate_to_page(&mut self, _index: i64, _: Duration, _: Curve) {}
//!     fn next_page(&mut self, _: Duration, _: Curve) {}
//!     fn previous_page(&mut self, _: Duration, _: Curve) {}
//! }
//!
//! let sink = Rc::new(|name: &str, data: &str| println!("{name} {data}"));
//! let mut control = CarouselControl::new(Engine, sink);
//!
//! let mut encoder = CommandEncoder::new();
//! let attrs = AttributeMap::new()
//!     .with(names::ENABLE_INDICATOR, true)
//!     .with(names::PENDING_COMMAND, encoder.jump_to_page(2));
//!
//! control.did_update(&attrs);
//! let view = control.build(&attrs, &Theme::default(), &["a", "b", "c"], |_, c| *c);
//! assert!(view.indicator().is_some());
//! ```

pub mod attributes;
mod command;
mod control;
mod controller;
mod curve;
mod error;
mod events;
mod indicator;
mod interpreter;
mod items;
mod kinds;
mod options;
mod theme;

#[cfg(test)]
mod testing;

pub use attributes::{AttributeMap, Attributes, names};
pub use command::{
    Animation, Command, CommandEncoder, DEFAULT_ANIMATE_TO_DURATION,
    DEFAULT_COMMAND_DURATION, JUMP_ACTION, NEXT_ACTION, PREVIOUS_ACTION,
};
pub use control::{Carousel, CarouselControl, CarouselView};
pub use controller::CarouselController;
pub use curve::Curve;
pub use error::{Error, Result};
pub use events::{
    CHANGE_EVENT, ChangeEvent, EventSink, HostEvent, PageChangedReason,
    SCROLLED_EVENT, ScrolledEvent, format_scroll_offset,
};
pub use indicator::{
    DOT_PITCH, IndicatorDot, IndicatorScroll, IndicatorStrip, LEADING_MARGIN,
    SCROLL_CURVE, SCROLL_DURATION, TAP_CURVE, TAP_DURATION, scroll_target,
};
pub use interpreter::CommandInterpreter;
pub use items::{ItemSource, LazyItems};
pub use kinds::{ClipBehavior, EnlargeStrategy, ScrollAxis};
pub use options::{
    CarouselOptions, DEFAULT_ASPECT_RATIO, DEFAULT_AUTO_PLAY_ANIMATION_DURATION,
    DEFAULT_AUTO_PLAY_INTERVAL, DEFAULT_ENLARGE_FACTOR,
    DEFAULT_VIEWPORT_FRACTION, IndicatorOptions, MIN_INDICATOR_WIDTH,
    PageChangedHandler, RenderConfiguration, ScrolledHandler,
};
pub use theme::{
    ACTIVE_DOT_OPACITY, Brightness, Color, INACTIVE_DOT_OPACITY, Theme,
    parse_hex_color,
};
