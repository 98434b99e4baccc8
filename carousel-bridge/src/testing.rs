//! Recording doubles shared by the unit tests.

use std::cell::RefCell;
use std::time::Duration;

use crate::controller::CarouselController;
use crate::curve::Curve;
use crate::events::EventSink;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ControllerCall {
    Jump(i64),
    AnimateTo(i64, Duration, Curve),
    Next(Duration, Curve),
    Previous(Duration, Curve),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingController {
    pub(crate) calls: Vec<ControllerCall>,
}

impl CarouselController for RecordingController {
    fn jump_to_page(&mut self, index: i64) {
        self.calls.push(ControllerCall::Jump(index));
    }

    fn animate_to_page(&mut self, index: i64, duration: Duration, curve: Curve) {
        self.calls
            .push(ControllerCall::AnimateTo(index, duration, curve));
    }

    fn next_page(&mut self, duration: Duration, curve: Curve) {
        self.calls.push(ControllerCall::Next(duration, curve));
    }

    fn previous_page(&mut self, duration: Duration, curve: Curve) {
        self.calls.push(ControllerCall::Previous(duration, curve));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: RefCell<Vec<(String, String)>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<(String, String)> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn trigger(&self, name: &str, data: &str) {
        self.events
            .borrow_mut()
            .push((name.to_string(), data.to_string()));
    }
}
