//! Typed, defaulted reads over the attribute bag a host sets on a control.
//!
//! The control never assumes how the host stores attributes: everything goes
//! through [`Attributes`]. [`AttributeMap`] is the JSON-backed store used by
//! hosts that ship attributes as a JSON object, and `HashMap<String, String>`
//! covers hosts that stringify every value.

use std::collections::HashMap;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::theme::{Color, parse_hex_color};

/// Attribute names understood by the control.
pub mod names {
    pub const HEIGHT: &str = "height";
    pub const ASPECT_RATIO: &str = "aspectRatio";
    pub const VIEWPORT_FRACTION: &str = "viewportFraction";
    pub const INITIAL_PAGE: &str = "initialPage";
    pub const ENABLE_INFINITE_SCROLL: &str = "enableInfiniteScroll";
    pub const ANIMATE_TO_CLOSEST: &str = "animateToClosest";
    pub const REVERSE: &str = "reverse";
    pub const AUTO_PLAY: &str = "autoPlay";
    pub const AUTO_PLAY_INTERVAL: &str = "autoPlayInterval";
    pub const AUTO_PLAY_ANIMATION_DURATION: &str = "autoPlayAnimationDuration";
    pub const AUTO_PLAY_CURVE: &str = "autoPlayCurve";
    pub const ENLARGE_CENTER_PAGE: &str = "enlargeCenterPage";
    pub const ENLARGE_STRATEGY: &str = "enlargeStrategy";
    pub const ENLARGE_FACTOR: &str = "enlargeFactor";
    pub const PAGE_SNAPPING: &str = "pageSnapping";
    pub const SCROLL_DIRECTION: &str = "scrollDirection";
    pub const PAUSE_AUTO_PLAY_ON_TOUCH: &str = "pauseAutoPlayOnTouch";
    pub const PAUSE_AUTO_PLAY_ON_MANUAL_NAVIGATE: &str =
        "pauseAutoPlayOnManualNavigate";
    pub const PAUSE_AUTO_PLAY_IN_FINITE_SCROLL: &str =
        "pauseAutoPlayInFiniteScroll";
    pub const DISABLE_CENTER: &str = "disableCenter";
    pub const PAD_ENDS: &str = "padEnds";
    pub const CLIP_BEHAVIOR: &str = "clipBehavior";
    pub const DISABLE_GESTURE: &str = "disableGesture";
    pub const BUILD_ON_DEMAND: &str = "buildOnDemand";
    pub const ENABLE_INDICATOR: &str = "enableIndicator";
    pub const INDICATOR_WIDTH: &str = "indicatorwidth";
    /// Hex only (`#RRGGBB` or `#AARRGGBB`). Named colors are not resolved
    /// and fall back to the theme default.
    pub const INDICATOR_ACTIVE_COLOR: &str = "indicatorActiveColor";
    /// Same format as [`INDICATOR_ACTIVE_COLOR`].
    pub const INDICATOR_INACTIVE_COLOR: &str = "indicatorInactiveColor";
    /// Pending imperative command, see [`crate::Command`].
    pub const PENDING_COMMAND: &str = "__animateTo";
}

/// Typed accessor over a host-owned attribute store.
///
/// The required methods return `None` for absent or unusable values; the
/// `*_or` helpers apply the caller's default.
pub trait Attributes {
    fn double(&self, name: &str) -> Option<f64>;
    fn int(&self, name: &str) -> Option<i64>;
    fn bool(&self, name: &str) -> Option<bool>;
    fn string(&self, name: &str) -> Option<&str>;

    /// Colors travel as `#RRGGBB` / `#AARRGGBB` strings. Unparseable values
    /// are logged and treated as absent.
    fn color(&self, name: &str) -> Option<Color> {
        let value = self.string(name)?;
        parse_hex_color(value)
            .inspect_err(|err| {
                log::warn!("attribute {name}: ignoring color {value:?}: {err}")
            })
            .ok()
    }

    fn double_or(&self, name: &str, default: f64) -> f64 {
        self.double(name).unwrap_or(default)
    }

    fn int_or(&self, name: &str, default: i64) -> i64 {
        self.int(name).unwrap_or(default)
    }

    fn bool_or(&self, name: &str, default: bool) -> bool {
        self.bool(name).unwrap_or(default)
    }
}

/// JSON-object backed attribute store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    values: Map<String, Value>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object. `null` is accepted as an empty bag.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            _ => Err(Error::NotAnObject),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Attributes for AttributeMap {
    fn double(&self, name: &str) -> Option<f64> {
        match self.values.get(name)? {
            Value::Null => None,
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_text(name, text),
            other => mistyped(name, "double", other),
        }
    }

    fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name)? {
            Value::Null => None,
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0)
                    .map(|value| value as i64)
            }),
            Value::String(text) => parse_text(name, text),
            other => mistyped(name, "int", other),
        }
    }

    fn bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            Value::Null => None,
            Value::Bool(value) => Some(*value),
            Value::String(text) => parse_bool(name, text),
            other => mistyped(name, "bool", other),
        }
    }

    fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            Value::Null => None,
            Value::String(text) => Some(text.as_str()),
            other => mistyped(name, "string", other),
        }
    }
}

impl Attributes for HashMap<String, String> {
    fn double(&self, name: &str) -> Option<f64> {
        parse_text(name, self.get(name)?)
    }

    fn int(&self, name: &str) -> Option<i64> {
        parse_text(name, self.get(name)?)
    }

    fn bool(&self, name: &str) -> Option<bool> {
        parse_bool(name, self.get(name)?)
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

fn parse_text<T: FromStr>(name: &str, text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    text.parse()
        .inspect_err(|_| {
            log::warn!("attribute {name}: cannot parse {text:?}, using default")
        })
        .ok()
}

fn parse_bool(name: &str, text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        if !text.is_empty() {
            log::warn!("attribute {name}: {text:?} is not a bool");
        }
        None
    }
}

fn mistyped<T>(name: &str, expected: &str, value: &Value) -> Option<T> {
    log::warn!("attribute {name}: expected {expected}, got {value}");
    None
}
