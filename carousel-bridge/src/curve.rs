//! Animation curves and their wire identifiers.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

const CUBIC_ERROR_BOUND: f32 = 0.001;
const CUBIC_MAX_STEPS: usize = 64;
const ELASTIC_PERIOD: f32 = 0.4;

/// Interpolation curve used by page animations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    BounceIn,
    BounceOut,
    ElasticIn,
    ElasticOut,
    Decelerate,
    #[default]
    FastOutSlowIn,
}

impl Curve {
    pub const ALL: [Curve; 10] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::BounceIn,
        Curve::BounceOut,
        Curve::ElasticIn,
        Curve::ElasticOut,
        Curve::Decelerate,
        Curve::FastOutSlowIn,
    ];

    /// Identifier used on the wire.
    pub fn id(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "easeIn",
            Curve::EaseOut => "easeOut",
            Curve::EaseInOut => "easeInOut",
            Curve::BounceIn => "bounceIn",
            Curve::BounceOut => "bounceOut",
            Curve::ElasticIn => "elasticIn",
            Curve::ElasticOut => "elasticOut",
            Curve::Decelerate => "decelerate",
            Curve::FastOutSlowIn => "fastOutSlowIn",
        }
    }

    /// Exact lookup of a wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.id() == id)
    }

    /// Lenient lookup: absent or empty identifiers yield the default curve,
    /// unknown ones are logged and yield the default as well.
    pub fn resolve(id: Option<&str>) -> Self {
        match id {
            None | Some("") => Self::default(),
            Some(id) => Self::from_id(id).unwrap_or_else(|| {
                log::warn!("unknown curve {id:?}, using {}", Self::default());
                Self::default()
            }),
        }
    }

    /// Map linear progress `t` to eased progress.
    ///
    /// `t` is clamped to `0.0..=1.0`; both ends map to themselves. Bounce and
    /// elastic curves overshoot inside the interval.
    pub fn transform(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Curve::Linear => t,
            Curve::EaseIn => cubic(0.42, 0.0, 1.0, 1.0, t),
            Curve::EaseOut => cubic(0.0, 0.0, 0.58, 1.0, t),
            Curve::EaseInOut => cubic(0.42, 0.0, 0.58, 1.0, t),
            Curve::FastOutSlowIn => cubic(0.4, 0.0, 0.2, 1.0, t),
            Curve::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::BounceIn => 1.0 - bounce(1.0 - t),
            Curve::BounceOut => bounce(t),
            Curve::ElasticIn => {
                let s = ELASTIC_PERIOD / 4.0;
                let t = t - 1.0;
                -(2.0_f32.powf(10.0 * t))
                    * ((t - s) * (PI * 2.0) / ELASTIC_PERIOD).sin()
            },
            Curve::ElasticOut => {
                let s = ELASTIC_PERIOD / 4.0;
                2.0_f32.powf(-10.0 * t)
                    * ((t - s) * (PI * 2.0) / ELASTIC_PERIOD).sin()
                    + 1.0
            },
        }
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Cubic bezier through (0, 0), (a, b), (c, d), (1, 1), solved by bisection.
fn cubic(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let mut start = 0.0;
    let mut end = 1.0;
    let mut midpoint = 0.5;

    for _ in 0..CUBIC_MAX_STEPS {
        midpoint = (start + end) / 2.0;
        let estimate = evaluate_cubic(a, c, midpoint);
        if (t - estimate).abs() < CUBIC_ERROR_BOUND {
            break;
        }
        if estimate < t {
            start = midpoint;
        } else {
            end = midpoint;
        }
    }

    evaluate_cubic(b, d, midpoint)
}

fn evaluate_cubic(a: f32, b: f32, m: f32) -> f32 {
    3.0 * a * (1.0 - m) * (1.0 - m) * m + 3.0 * b * (1.0 - m) * m * m + m * m * m
}

fn bounce(t: f32) -> f32 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}
