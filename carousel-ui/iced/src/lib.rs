//! [`iced`] rendering for [`carousel_bridge`] indicator strips.
//!
//! [`IndicatorView`] draws the dots of an [`IndicatorStrip`] and reports
//! taps by index; feed them back through
//! [`CarouselControl::tap_indicator`]. [`carousel_frame`] stacks the
//! carousel element above its indicator.
//!
//! [`IndicatorStrip`]: carousel_bridge::IndicatorStrip
//! [`CarouselControl::tap_indicator`]: carousel_bridge::CarouselControl::tap_indicator
//!
//! # Quick Example
//!
//! ```no_run
//! use carousel_bridge::IndicatorStrip;
//! use carousel_ui_iced::{IndicatorView, carousel_frame};
//! use iced::Element;
//! use iced::widget::text;
//!
//! #[derive(Clone)]
//! enum Message {
//!     DotPressed(usize),
//! }
//!
//! fn view<'a>(page: &'a str, strip: &'a IndicatorStrip) -> Element<'a, Message> {
//!     carousel_frame(
//!         text(page),
//!         Some(IndicatorView::new(strip).on_press(Message::DotPressed)),
//!     )
//! }
//! ```

mod view;

pub use view::{DOT_SIZE, IndicatorView, carousel_frame, to_iced_color, visible_dots};
