//! Page indicator dots and the tween that keeps the active one in view.

use std::time::{Duration, Instant};

use crate::controller::CarouselController;
use crate::curve::Curve;
use crate::options::IndicatorOptions;
use crate::theme::Color;

/// Horizontal distance between two dot origins.
pub const DOT_PITCH: f32 = 20.0;
/// Room kept to the left of the active dot after scrolling.
pub const LEADING_MARGIN: f32 = 80.0;
pub const SCROLL_DURATION: Duration = Duration::from_millis(300);
pub const SCROLL_CURVE: Curve = Curve::EaseInOut;
/// Animation used when a dot is tapped.
pub const TAP_DURATION: Duration = Duration::from_millis(300);
pub const TAP_CURVE: Curve = Curve::Linear;

/// Strip offset that brings dot `index` into view.
pub fn scroll_target(index: usize) -> f32 {
    (index as f32 * DOT_PITCH - LEADING_MARGIN).max(0.0)
}

/// Time-based tween of the strip's horizontal offset.
#[derive(Debug, Clone)]
pub struct IndicatorScroll {
    active: bool,
    offset: f32,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    curve: Curve,
}

impl Default for IndicatorScroll {
    fn default() -> Self {
        Self {
            active: false,
            offset: 0.0,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: SCROLL_DURATION,
            curve: SCROLL_CURVE,
        }
    }
}

impl IndicatorScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Offset as of the last tick.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start scrolling towards dot `index` from wherever the strip is now.
    pub fn scroll_to_dot(&mut self, index: usize, now: Instant) {
        self.animate_to(scroll_target(index), SCROLL_DURATION, SCROLL_CURVE, now);
    }

    pub fn animate_to(
        &mut self,
        target: f32,
        duration: Duration,
        curve: Curve,
        now: Instant,
    ) {
        let target = target.max(0.0);
        if duration.is_zero() {
            self.active = false;
            self.offset = target;
            self.target = target;
            return;
        }

        self.active = true;
        self.start = self.offset;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.curve = curve;
    }

    /// Advance to `now`. Returns the new offset while animating, `None`
    /// once idle.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            self.offset = self.target;
            return Some(self.offset);
        }

        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = self.curve.transform(t);
        self.offset = self.start + (self.target - self.start) * eased;
        Some(self.offset)
    }

    /// Stop where the strip currently is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorDot {
    pub index: usize,
    pub active: bool,
    pub color: Color,
}

/// Snapshot of the indicator row for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStrip {
    pub dots: Vec<IndicatorDot>,
    pub width: Option<f32>,
    /// Horizontal scroll offset of the row.
    pub offset: f32,
}

impl IndicatorStrip {
    pub fn new(
        count: usize,
        current: usize,
        options: &IndicatorOptions,
        offset: f32,
    ) -> Self {
        let dots = (0..count)
            .map(|index| {
                let active = index == current;
                IndicatorDot {
                    index,
                    active,
                    color: if active {
                        options.active_color
                    } else {
                        options.inactive_color
                    },
                }
            })
            .collect();

        Self {
            dots,
            width: options.width,
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.index)
    }

    /// Animate the carousel to the tapped dot's page.
    ///
    /// This is a direct controller call; it does not go through the command
    /// interpreter. Taps past the last dot are ignored.
    pub fn tap<C>(&self, index: usize, controller: &mut C) -> bool
    where
        C: CarouselController + ?Sized,
    {
        if index >= self.dots.len() {
            log::debug!("ignoring tap on missing dot {index}");
            return false;
        }

        let Ok(page) = i64::try_from(index) else {
            return false;
        };
        controller.animate_to_page(page, TAP_DURATION, TAP_CURVE);
        true
    }
}
