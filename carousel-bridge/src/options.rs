use std::fmt::{self, Debug};
use std::time::Duration;

use crate::attributes::{Attributes, names};
use crate::curve::Curve;
use crate::events::PageChangedReason;
use crate::kinds::{ClipBehavior, EnlargeStrategy, ScrollAxis};
use crate::theme::{Color, Theme};

pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
pub const DEFAULT_VIEWPORT_FRACTION: f64 = 0.8;
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(4000);
pub const DEFAULT_AUTO_PLAY_ANIMATION_DURATION: Duration =
    Duration::from_millis(800);
pub const DEFAULT_ENLARGE_FACTOR: f64 = 0.3;
/// Narrowest indicator strip the control will lay out.
pub const MIN_INDICATOR_WIDTH: f32 = 110.0;

pub type PageChangedHandler = dyn Fn(usize, PageChangedReason);
pub type ScrolledHandler = dyn Fn(Option<f64>);

/// Parameters handed to the carousel engine for one render pass.
///
/// Built fresh from the attributes on every render and never mutated
/// afterwards. The engine reports interaction through
/// [`CarouselOptions::page_changed`] and [`CarouselOptions::scrolled`].
pub struct CarouselOptions {
    /// Fixed height; when absent the engine derives it from `aspect_ratio`.
    pub height: Option<f64>,
    pub aspect_ratio: f64,
    pub viewport_fraction: f64,
    pub initial_page: usize,
    pub enable_infinite_scroll: bool,
    pub animate_to_closest: bool,
    pub reverse: bool,
    pub auto_play: bool,
    pub auto_play_interval: Duration,
    pub auto_play_animation_duration: Duration,
    pub auto_play_curve: Curve,
    pub enlarge_center_page: bool,
    pub enlarge_strategy: EnlargeStrategy,
    pub enlarge_factor: f64,
    pub page_snapping: bool,
    pub scroll_direction: ScrollAxis,
    pub pause_auto_play_on_touch: bool,
    pub pause_auto_play_on_manual_navigate: bool,
    pub pause_auto_play_in_finite_scroll: bool,
    pub disable_center: bool,
    pub pad_ends: bool,
    pub clip_behavior: ClipBehavior,
    /// When set the engine ignores drag gestures.
    pub disable_gesture: bool,
    on_page_changed: Option<Box<PageChangedHandler>>,
    on_scrolled: Option<Box<ScrolledHandler>>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            height: None,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            viewport_fraction: DEFAULT_VIEWPORT_FRACTION,
            initial_page: 0,
            enable_infinite_scroll: true,
            animate_to_closest: true,
            reverse: false,
            auto_play: false,
            auto_play_interval: DEFAULT_AUTO_PLAY_INTERVAL,
            auto_play_animation_duration: DEFAULT_AUTO_PLAY_ANIMATION_DURATION,
            auto_play_curve: Curve::default(),
            enlarge_center_page: false,
            enlarge_strategy: EnlargeStrategy::default(),
            enlarge_factor: DEFAULT_ENLARGE_FACTOR,
            page_snapping: true,
            scroll_direction: ScrollAxis::default(),
            pause_auto_play_on_touch: true,
            pause_auto_play_on_manual_navigate: true,
            pause_auto_play_in_finite_scroll: false,
            disable_center: false,
            pad_ends: true,
            clip_behavior: ClipBehavior::default(),
            disable_gesture: false,
            on_page_changed: None,
            on_scrolled: None,
        }
    }
}

impl CarouselOptions {
    /// Read every engine option, falling back to its default.
    pub fn from_attributes<A: Attributes + ?Sized>(attrs: &A) -> Self {
        let defaults = Self::default();

        Self {
            height: attrs.double(names::HEIGHT),
            aspect_ratio: attrs
                .double_or(names::ASPECT_RATIO, defaults.aspect_ratio),
            viewport_fraction: attrs
                .double_or(names::VIEWPORT_FRACTION, defaults.viewport_fraction),
            initial_page: read_index(attrs, names::INITIAL_PAGE),
            enable_infinite_scroll: attrs.bool_or(
                names::ENABLE_INFINITE_SCROLL,
                defaults.enable_infinite_scroll,
            ),
            animate_to_closest: attrs.bool_or(
                names::ANIMATE_TO_CLOSEST,
                defaults.animate_to_closest,
            ),
            reverse: attrs.bool_or(names::REVERSE, defaults.reverse),
            auto_play: attrs.bool_or(names::AUTO_PLAY, defaults.auto_play),
            auto_play_interval: read_millis(
                attrs,
                names::AUTO_PLAY_INTERVAL,
                defaults.auto_play_interval,
            ),
            auto_play_animation_duration: read_millis(
                attrs,
                names::AUTO_PLAY_ANIMATION_DURATION,
                defaults.auto_play_animation_duration,
            ),
            auto_play_curve: Curve::resolve(
                attrs.string(names::AUTO_PLAY_CURVE),
            ),
            enlarge_center_page: attrs.bool_or(
                names::ENLARGE_CENTER_PAGE,
                defaults.enlarge_center_page,
            ),
            enlarge_strategy: EnlargeStrategy::resolve(
                attrs.string(names::ENLARGE_STRATEGY),
            ),
            enlarge_factor: attrs
                .double_or(names::ENLARGE_FACTOR, defaults.enlarge_factor),
            page_snapping: attrs
                .bool_or(names::PAGE_SNAPPING, defaults.page_snapping),
            scroll_direction: ScrollAxis::resolve(
                attrs.string(names::SCROLL_DIRECTION),
            ),
            pause_auto_play_on_touch: attrs.bool_or(
                names::PAUSE_AUTO_PLAY_ON_TOUCH,
                defaults.pause_auto_play_on_touch,
            ),
            pause_auto_play_on_manual_navigate: attrs.bool_or(
                names::PAUSE_AUTO_PLAY_ON_MANUAL_NAVIGATE,
                defaults.pause_auto_play_on_manual_navigate,
            ),
            pause_auto_play_in_finite_scroll: attrs.bool_or(
                names::PAUSE_AUTO_PLAY_IN_FINITE_SCROLL,
                defaults.pause_auto_play_in_finite_scroll,
            ),
            disable_center: attrs
                .bool_or(names::DISABLE_CENTER, defaults.disable_center),
            pad_ends: attrs.bool_or(names::PAD_ENDS, defaults.pad_ends),
            clip_behavior: ClipBehavior::resolve(
                attrs.string(names::CLIP_BEHAVIOR),
            ),
            disable_gesture: attrs
                .bool_or(names::DISABLE_GESTURE, defaults.disable_gesture),
            on_page_changed: None,
            on_scrolled: None,
        }
    }

    /// Register the handler the engine's page-changed callback invokes.
    pub fn on_page_changed(
        mut self,
        handler: impl Fn(usize, PageChangedReason) + 'static,
    ) -> Self {
        self.on_page_changed = Some(Box::new(handler));
        self
    }

    /// Register the handler the engine's scroll callback invokes.
    pub fn on_scrolled(mut self, handler: impl Fn(Option<f64>) + 'static) -> Self {
        self.on_scrolled = Some(Box::new(handler));
        self
    }

    /// Called by the engine after it settles on page `index`.
    pub fn page_changed(&self, index: usize, reason: PageChangedReason) {
        if let Some(handler) = &self.on_page_changed {
            handler(index, reason);
        }
    }

    /// Called by the engine while the pages move; `offset` is in pages.
    pub fn scrolled(&self, offset: Option<f64>) {
        if let Some(handler) = &self.on_scrolled {
            handler(offset);
        }
    }
}

impl Debug for CarouselOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("height", &self.height)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("viewport_fraction", &self.viewport_fraction)
            .field("initial_page", &self.initial_page)
            .field("enable_infinite_scroll", &self.enable_infinite_scroll)
            .field("animate_to_closest", &self.animate_to_closest)
            .field("reverse", &self.reverse)
            .field("auto_play", &self.auto_play)
            .field("auto_play_interval", &self.auto_play_interval)
            .field(
                "auto_play_animation_duration",
                &self.auto_play_animation_duration,
            )
            .field("auto_play_curve", &self.auto_play_curve)
            .field("enlarge_center_page", &self.enlarge_center_page)
            .field("enlarge_strategy", &self.enlarge_strategy)
            .field("enlarge_factor", &self.enlarge_factor)
            .field("page_snapping", &self.page_snapping)
            .field("scroll_direction", &self.scroll_direction)
            .field("pause_auto_play_on_touch", &self.pause_auto_play_on_touch)
            .field(
                "pause_auto_play_on_manual_navigate",
                &self.pause_auto_play_on_manual_navigate,
            )
            .field(
                "pause_auto_play_in_finite_scroll",
                &self.pause_auto_play_in_finite_scroll,
            )
            .field("disable_center", &self.disable_center)
            .field("pad_ends", &self.pad_ends)
            .field("clip_behavior", &self.clip_behavior)
            .field("disable_gesture", &self.disable_gesture)
            .field("on_page_changed", &self.on_page_changed.is_some())
            .field("on_scrolled", &self.on_scrolled.is_some())
            .finish()
    }
}

/// Look of the indicator strip.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOptions {
    pub enabled: bool,
    /// Strip width; `None` sizes the strip to its dots.
    pub width: Option<f32>,
    pub active_color: Color,
    pub inactive_color: Color,
}

impl IndicatorOptions {
    pub fn from_attributes<A: Attributes + ?Sized>(
        attrs: &A,
        theme: &Theme,
    ) -> Self {
        Self {
            enabled: attrs.bool_or(names::ENABLE_INDICATOR, true),
            width: read_indicator_width(attrs),
            active_color: attrs
                .color(names::INDICATOR_ACTIVE_COLOR)
                .unwrap_or_else(|| theme.indicator_active()),
            inactive_color: attrs
                .color(names::INDICATOR_INACTIVE_COLOR)
                .unwrap_or_else(|| theme.indicator_inactive()),
        }
    }
}

/// Everything the control derives from one attribute snapshot.
#[derive(Debug)]
pub struct RenderConfiguration {
    pub carousel: CarouselOptions,
    pub indicator: IndicatorOptions,
    /// Build items lazily, on the engine's request.
    pub build_on_demand: bool,
}

impl RenderConfiguration {
    /// Translate attributes into render parameters. Event handlers are not
    /// bound here; see [`crate::CarouselControl::configure`].
    pub fn from_attributes<A: Attributes + ?Sized>(
        attrs: &A,
        theme: &Theme,
    ) -> Self {
        Self {
            carousel: CarouselOptions::from_attributes(attrs),
            indicator: IndicatorOptions::from_attributes(attrs, theme),
            build_on_demand: attrs.bool_or(names::BUILD_ON_DEMAND, false),
        }
    }
}

fn read_index<A: Attributes + ?Sized>(attrs: &A, name: &str) -> usize {
    let Some(value) = attrs.int(name) else {
        return 0;
    };

    usize::try_from(value).unwrap_or_else(|_| {
        log::warn!("attribute {name}: {value} is not a page index, using 0");
        0
    })
}

fn read_millis<A: Attributes + ?Sized>(
    attrs: &A,
    name: &str,
    default: Duration,
) -> Duration {
    let Some(value) = attrs.int(name) else {
        return default;
    };

    match u64::try_from(value) {
        Ok(millis) => Duration::from_millis(millis),
        Err(_) => {
            log::warn!("attribute {name}: negative duration {value}");
            default
        },
    }
}

fn read_indicator_width<A: Attributes + ?Sized>(attrs: &A) -> Option<f32> {
    let width = attrs.double(names::INDICATOR_WIDTH)? as f32;
    if width < MIN_INDICATOR_WIDTH {
        log::warn!(
            "indicator width {width} is below {MIN_INDICATOR_WIDTH}, widening"
        );
        return Some(MIN_INDICATOR_WIDTH);
    }
    Some(width)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::attributes::AttributeMap;
    use crate::theme::Brightness;

    #[test]
    fn given_empty_attributes_when_translating_then_every_default_applies() {
        let options = CarouselOptions::from_attributes(&AttributeMap::new());

        assert_eq!(options.height, None);
        assert_eq!(options.aspect_ratio, 16.0 / 9.0);
        assert_eq!(options.viewport_fraction, 0.8);
        assert_eq!(options.initial_page, 0);
        assert!(options.enable_infinite_scroll);
        assert!(options.animate_to_closest);
        assert!(!options.reverse);
        assert!(!options.auto_play);
        assert_eq!(options.auto_play_interval, Duration::from_millis(4000));
        assert_eq!(
            options.auto_play_animation_duration,
            Duration::from_millis(800)
        );
        assert_eq!(options.auto_play_curve, Curve::FastOutSlowIn);
        assert!(!options.enlarge_center_page);
        assert_eq!(options.enlarge_strategy, EnlargeStrategy::Scale);
        assert_eq!(options.enlarge_factor, 0.3);
        assert!(options.page_snapping);
        assert_eq!(options.scroll_direction, ScrollAxis::Horizontal);
        assert!(options.pause_auto_play_on_touch);
        assert!(options.pause_auto_play_on_manual_navigate);
        assert!(!options.pause_auto_play_in_finite_scroll);
        assert!(!options.disable_center);
        assert!(options.pad_ends);
        assert_eq!(options.clip_behavior, ClipBehavior::HardEdge);
        assert!(!options.disable_gesture);
    }

    #[test]
    fn given_explicit_attributes_when_translating_then_values_are_used() {
        let attrs = AttributeMap::from_json(json!({
            "height": 240.0,
            "aspectRatio": 1.0,
            "initialPage": 2,
            "autoPlay": true,
            "autoPlayInterval": 2000,
            "autoPlayCurve": "bounceOut",
            "enlargeCenterPage": true,
            "enlargeStrategy": "zoom",
            "scrollDirection": "vertical",
            "clipBehavior": "antiAliasWithSaveLayer",
            "disableGesture": true,
        }))
        .unwrap();

        let options = CarouselOptions::from_attributes(&attrs);

        assert_eq!(options.height, Some(240.0));
        assert_eq!(options.aspect_ratio, 1.0);
        assert_eq!(options.initial_page, 2);
        assert!(options.auto_play);
        assert_eq!(options.auto_play_interval, Duration::from_millis(2000));
        assert_eq!(options.auto_play_curve, Curve::BounceOut);
        assert!(options.enlarge_center_page);
        assert_eq!(options.enlarge_strategy, EnlargeStrategy::Zoom);
        assert_eq!(options.scroll_direction, ScrollAxis::Vertical);
        assert_eq!(options.clip_behavior, ClipBehavior::AntiAliasWithSaveLayer);
        assert!(options.disable_gesture);
    }

    #[test]
    fn given_unknown_identifiers_when_translating_then_fall_back() {
        let attrs = AttributeMap::from_json(json!({
            "autoPlayCurve": "warpSpeed",
            "enlargeStrategy": "stretch",
            "scrollDirection": "diagonal",
            "clipBehavior": "soft",
            "initialPage": -3,
            "autoPlayInterval": -1,
        }))
        .unwrap();

        let options = CarouselOptions::from_attributes(&attrs);

        assert_eq!(options.auto_play_curve, Curve::FastOutSlowIn);
        assert_eq!(options.enlarge_strategy, EnlargeStrategy::Scale);
        assert_eq!(options.scroll_direction, ScrollAxis::Horizontal);
        assert_eq!(options.clip_behavior, ClipBehavior::HardEdge);
        assert_eq!(options.initial_page, 0);
        assert_eq!(options.auto_play_interval, DEFAULT_AUTO_PLAY_INTERVAL);
    }

    #[test]
    fn given_registered_handlers_when_engine_reports_then_handlers_run() {
        let page = Rc::new(Cell::new(None));
        let offsets = Rc::new(RefCell::new(Vec::new()));

        let options = CarouselOptions::default()
            .on_page_changed({
                let page = page.clone();
                move |index, reason| page.set(Some((index, reason)))
            })
            .on_scrolled({
                let offsets = offsets.clone();
                move |offset| offsets.borrow_mut().push(offset)
            });

        options.page_changed(3, PageChangedReason::Timed);
        options.scrolled(Some(0.5));

        assert_eq!(page.get(), Some((3, PageChangedReason::Timed)));
        assert_eq!(*offsets.borrow(), vec![Some(0.5)]);
    }

    #[test]
    fn given_no_handlers_when_engine_reports_then_nothing_happens() {
        let options = CarouselOptions::default();
        options.page_changed(1, PageChangedReason::Manual);
        options.scrolled(None);
    }

    #[test]
    fn given_indicator_attributes_when_translating_then_styles_strip() {
        let theme = Theme::new(Brightness::Light);
        let attrs = AttributeMap::from_json(json!({
            "indicatorwidth": 60,
            "indicatorActiveColor": "#ff0000",
            "indicatorInactiveColor": "not-a-color",
        }))
        .unwrap();

        let indicator = IndicatorOptions::from_attributes(&attrs, &theme);

        assert!(indicator.enabled);
        assert_eq!(indicator.width, Some(MIN_INDICATOR_WIDTH));
        assert_eq!(indicator.active_color, Color::from_rgb8(0xff, 0, 0));
        assert_eq!(indicator.inactive_color, theme.indicator_inactive());
    }

    #[test]
    fn given_indicator_flags_when_translating_configuration_then_reads_them() {
        let attrs = AttributeMap::new()
            .with(names::ENABLE_INDICATOR, false)
            .with(names::BUILD_ON_DEMAND, true)
            .with(names::INDICATOR_WIDTH, 240);

        let config = RenderConfiguration::from_attributes(&attrs, &Theme::default());

        assert!(!config.indicator.enabled);
        assert_eq!(config.indicator.width, Some(240.0));
        assert!(config.build_on_demand);
    }
}
