use std::fmt;

use serde::{Deserialize, Serialize};

/// Host event raised on every page change.
pub const CHANGE_EVENT: &str = "change";
/// Host event raised while the pages scroll.
pub const SCROLLED_EVENT: &str = "scrolled";

/// Fire-and-forget channel towards the host.
pub trait EventSink {
    fn trigger(&self, name: &str, data: &str);
}

impl<F> EventSink for F
where
    F: Fn(&str, &str),
{
    fn trigger(&self, name: &str, data: &str) {
        self(name, data)
    }
}

/// Why the engine moved to another page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PageChangedReason {
    /// Auto-play advanced the page.
    Timed,
    /// The user swiped.
    #[default]
    Manual,
    /// A controller call moved the page.
    Controller,
}

impl PageChangedReason {
    pub fn id(self) -> &'static str {
        match self {
            PageChangedReason::Timed => "timed",
            PageChangedReason::Manual => "manual",
            PageChangedReason::Controller => "controller",
        }
    }

    /// Unknown reasons decode as [`PageChangedReason::Manual`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "timed" => PageChangedReason::Timed,
            "controller" => PageChangedReason::Controller,
            _ => PageChangedReason::Manual,
        }
    }
}

impl fmt::Display for PageChangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Event forwarded from the engine to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Change {
        index: usize,
        reason: PageChangedReason,
    },
    Scrolled {
        offset: Option<f64>,
    },
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::Change { .. } => CHANGE_EVENT,
            HostEvent::Scrolled { .. } => SCROLLED_EVENT,
        }
    }

    /// Payload string as the host expects it.
    pub fn payload(&self) -> String {
        match self {
            HostEvent::Change { index, reason } => format!("{index}:{reason}"),
            HostEvent::Scrolled { offset } => format_scroll_offset(*offset),
        }
    }

    pub fn emit<S: EventSink + ?Sized>(&self, sink: &S) {
        let payload = self.payload();
        log::trace!("emitting {} {payload:?}", self.name());
        sink.trigger(self.name(), &payload);
    }
}

/// Four fixed fractional digits; a missing offset is reported as zero.
pub fn format_scroll_offset(offset: Option<f64>) -> String {
    format!("{:.4}", offset.unwrap_or(0.0))
}

/// Host-side view of a `change` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub index: usize,
    pub reason: PageChangedReason,
}

impl ChangeEvent {
    /// Decode `"<index>:<reason>"`. A missing payload reads as `0:manual`;
    /// an unreadable index reads as `0`.
    pub fn from_payload(data: Option<&str>) -> Self {
        let data = data.filter(|data| !data.is_empty()).unwrap_or("0:manual");
        let (index, reason) = data.split_once(':').unwrap_or((data, ""));

        Self {
            index: index.trim().parse().unwrap_or(0),
            reason: PageChangedReason::from_id(reason),
        }
    }
}

/// Host-side view of a `scrolled` event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrolledEvent {
    pub value: f64,
}

impl ScrolledEvent {
    pub fn from_payload(data: Option<&str>) -> Self {
        Self {
            value: data
                .and_then(|data| data.trim().parse().ok())
                .unwrap_or(0.0),
        }
    }
}
