//! The pending-command wire format.
//!
//! A host drives the carousel imperatively by writing a colon-delimited
//! string into the [`PENDING_COMMAND`](crate::attributes::names::PENDING_COMMAND)
//! attribute:
//!
//! ```text
//! action[:param1[:param2[:counter]]]
//! ```
//!
//! | action      | param1            | param2     | controller call   |
//! |-------------|-------------------|------------|-------------------|
//! | `__next`    | duration (ms)     | curve id   | `next_page`       |
//! | `__prev`    | duration (ms)     | curve id   | `previous_page`   |
//! | `__jump`    | page index        | ignored    | `jump_to_page`    |
//! | page index  | duration (ms)     | curve id   | `animate_to_page` |
//!
//! The trailing counter carries no meaning. It only keeps two identical
//! requests from serializing to the same string, which the interpreter would
//! otherwise treat as one.

use std::str::FromStr;
use std::time::Duration;

use crate::curve::Curve;
use crate::error::{Error, Result};

pub const NEXT_ACTION: &str = "__next";
pub const PREVIOUS_ACTION: &str = "__prev";
pub const JUMP_ACTION: &str = "__jump";

/// Duration applied when a command omits or garbles its duration field.
pub const DEFAULT_COMMAND_DURATION: Duration = Duration::from_millis(300);
/// Duration the encoder uses for `animate_to_page` when the caller has no
/// preference.
pub const DEFAULT_ANIMATE_TO_DURATION: Duration = Duration::from_millis(800);

const FIELD_SEPARATOR: char = ':';
const NO_CURVE: &str = "none";

/// Duration and curve of an animated page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub curve: Curve,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: DEFAULT_COMMAND_DURATION,
            curve: Curve::default(),
        }
    }
}

impl Animation {
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    fn from_fields(duration: Option<&str>, curve: Option<&str>) -> Self {
        Self {
            duration: duration
                .and_then(|field| parse_field::<u64>("duration", field))
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_COMMAND_DURATION),
            curve: Curve::resolve(curve),
        }
    }
}

/// A decoded navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next(Animation),
    Previous(Animation),
    Jump { index: i64 },
    AnimateTo { index: i64, animation: Animation },
}

impl Command {
    /// Decode a command string.
    ///
    /// Decoding never fails: missing or unparseable fields take their
    /// defaults (index `0`, 300 ms, `fastOutSlowIn`). Negative indices are
    /// passed through as they are. Callers are expected to
    /// have filtered out empty strings already.
    pub fn parse(raw: &str) -> Self {
        let mut fields = raw.split(FIELD_SEPARATOR);
        let action = fields.next().unwrap_or_default();
        let first = fields.next();
        let second = fields.next();

        match action {
            NEXT_ACTION => Command::Next(Animation::from_fields(first, second)),
            PREVIOUS_ACTION => {
                Command::Previous(Animation::from_fields(first, second))
            },
            JUMP_ACTION => Command::Jump {
                index: first
                    .and_then(|field| parse_field("index", field))
                    .unwrap_or(0),
            },
            index => Command::AnimateTo {
                index: parse_field("index", index).unwrap_or(0),
                animation: Animation::from_fields(first, second),
            },
        }
    }

    /// Encode without the trailing counter.
    fn encode_fields(&self) -> String {
        match self {
            Command::Next(animation) => format!(
                "{NEXT_ACTION}:{}:{}",
                animation.duration.as_millis(),
                animation.curve
            ),
            Command::Previous(animation) => format!(
                "{PREVIOUS_ACTION}:{}:{}",
                animation.duration.as_millis(),
                animation.curve
            ),
            Command::Jump { index } => {
                format!("{JUMP_ACTION}:{index}:{NO_CURVE}")
            },
            Command::AnimateTo { index, animation } => format!(
                "{index}:{}:{}",
                animation.duration.as_millis(),
                animation.curve
            ),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self::parse(raw))
    }
}

/// Host-side producer of command strings.
///
/// Every encoded command carries a fresh counter so that repeating the same
/// request still changes the attribute value.
#[derive(Debug, Default, Clone)]
pub struct CommandEncoder {
    counter: u64,
}

impl CommandEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands encoded so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn encode(&mut self, command: &Command) -> String {
        self.counter += 1;
        format!("{}:{}", command.encode_fields(), self.counter)
    }

    pub fn animate_to_page(
        &mut self,
        index: i64,
        duration: Duration,
        curve: Curve,
    ) -> String {
        self.encode(&Command::AnimateTo {
            index,
            animation: Animation::new(duration, curve),
        })
    }

    pub fn next_page(&mut self, duration: Duration, curve: Curve) -> String {
        self.encode(&Command::Next(Animation::new(duration, curve)))
    }

    pub fn previous_page(&mut self, duration: Duration, curve: Curve) -> String {
        self.encode(&Command::Previous(Animation::new(duration, curve)))
    }

    pub fn jump_to_page(&mut self, index: i64) -> String {
        self.encode(&Command::Jump { index })
    }
}

fn parse_field<T: FromStr>(what: &str, field: &str) -> Option<T> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }

    field
        .parse()
        .inspect_err(|_| {
            log::debug!("command {what} field {field:?} is not a number")
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_next_with_all_fields_when_parsing_then_reads_duration_and_curve()
    {
        assert_eq!(
            Command::parse("__next:450:linear:7"),
            Command::Next(Animation::new(
                Duration::from_millis(450),
                Curve::Linear
            ))
        );
    }

    #[test]
    fn given_bare_action_when_parsing_then_uses_defaults() {
        assert_eq!(
            Command::parse("__prev"),
            Command::Previous(Animation::default())
        );
        assert_eq!(Command::parse("__jump"), Command::Jump { index: 0 });
        assert_eq!(
            Command::parse("3"),
            Command::AnimateTo {
                index: 3,
                animation: Animation::default(),
            }
        );
    }

    #[test]
    fn given_garbled_numbers_when_parsing_then_degrades_to_defaults() {
        assert_eq!(
            Command::parse("__next:soon:easeOut:1"),
            Command::Next(Animation::new(
                DEFAULT_COMMAND_DURATION,
                Curve::EaseOut
            ))
        );
        assert_eq!(Command::parse("__jump:last:none:2"), Command::Jump {
            index: 0
        });
        assert_eq!(
            Command::parse("first:500:bounceIn:3"),
            Command::AnimateTo {
                index: 0,
                animation: Animation::new(
                    Duration::from_millis(500),
                    Curve::BounceIn
                ),
            }
        );
        assert_eq!(
            Command::parse("2.5:100:linear:4"),
            Command::AnimateTo {
                index: 0,
                animation: Animation::new(
                    Duration::from_millis(100),
                    Curve::Linear
                ),
            }
        );
    }

    #[test]
    fn given_negative_index_when_parsing_then_keeps_it() {
        assert_eq!(
            Command::parse("-2:400:easeIn:1"),
            Command::AnimateTo {
                index: -2,
                animation: Animation::new(
                    Duration::from_millis(400),
                    Curve::EaseIn
                ),
            }
        );
        assert_eq!(Command::parse("__jump:-1"), Command::Jump { index: -1 });
    }

    #[test]
    fn given_unknown_curve_when_parsing_then_animations_use_default() {
        let expected = Animation::new(
            Duration::from_millis(200),
            Curve::FastOutSlowIn,
        );

        assert_eq!(
            Command::parse("__next:200:warpSpeed:1"),
            Command::Next(expected)
        );
        assert_eq!(
            Command::parse("__prev:200:warpSpeed:2"),
            Command::Previous(expected)
        );
        assert_eq!(
            Command::parse("4:200:warpSpeed:3"),
            Command::AnimateTo {
                index: 4,
                animation: expected,
            }
        );
        assert_eq!(
            Command::parse("__jump:4:warpSpeed:4"),
            Command::Jump { index: 4 }
        );
    }

    #[test]
    fn given_empty_string_when_parsing_strictly_then_returns_error() {
        assert!(matches!("".parse::<Command>(), Err(Error::EmptyCommand)));
        assert_eq!(
            "__next".parse::<Command>().unwrap(),
            Command::Next(Animation::default())
        );
    }

    #[test]
    fn given_encoder_when_encoding_then_appends_increasing_counter() {
        let mut encoder = CommandEncoder::new();

        assert_eq!(
            encoder.animate_to_page(
                5,
                DEFAULT_ANIMATE_TO_DURATION,
                Curve::FastOutSlowIn
            ),
            "5:800:fastOutSlowIn:1"
        );
        assert_eq!(
            encoder.next_page(DEFAULT_COMMAND_DURATION, Curve::Linear),
            "__next:300:linear:2"
        );
        assert_eq!(
            encoder.previous_page(Duration::from_millis(120), Curve::EaseIn),
            "__prev:120:easeIn:3"
        );
        assert_eq!(encoder.jump_to_page(2), "__jump:2:none:4");
        assert_eq!(
            encoder.animate_to_page(-3, Duration::from_millis(250), Curve::Linear),
            "-3:250:linear:5"
        );
        assert_eq!(encoder.jump_to_page(-1), "__jump:-1:none:6");
        assert_eq!(encoder.counter(), 6);
    }

    #[test]
    fn given_repeated_request_when_encoding_then_only_counter_differs() {
        let mut encoder = CommandEncoder::new();
        let first = encoder.jump_to_page(0);
        let second = encoder.jump_to_page(0);

        assert_ne!(first, second);
        assert_eq!(Command::parse(&first), Command::parse(&second));
    }
}
