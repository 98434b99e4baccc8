use crate::command::Command;
use crate::controller::CarouselController;

/// Turns the pending-command attribute into controller calls, once per
/// distinct value.
///
/// The host cannot tell the control "this update carries a new command", so
/// every attribute update is fed through [`CommandInterpreter::observe`].
/// Only a non-empty value that differs from the last executed one reaches
/// the controller.
#[derive(Debug, Default, Clone)]
pub struct CommandInterpreter {
    last_seen: Option<String>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently executed command string.
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Inspect the pending command and dispatch it if it is new.
    ///
    /// Returns the dispatched command, or `None` when the update was a no-op.
    /// The value is committed before the controller is called.
    pub fn observe<C>(
        &mut self,
        pending: Option<&str>,
        controller: &mut C,
    ) -> Option<Command>
    where
        C: CarouselController + ?Sized,
    {
        let raw = pending.filter(|raw| !raw.is_empty())?;
        if self.last_seen.as_deref() == Some(raw) {
            log::trace!("command {raw:?} already applied");
            return None;
        }

        self.last_seen = Some(raw.to_string());

        let command = Command::parse(raw);
        log::debug!("dispatching command {raw:?} as {command:?}");
        dispatch(command, controller);
        Some(command)
    }
}

fn dispatch<C>(command: Command, controller: &mut C)
where
    C: CarouselController + ?Sized,
{
    match command {
        Command::Next(animation) => {
            controller.next_page(animation.duration, animation.curve)
        },
        Command::Previous(animation) => {
            controller.previous_page(animation.duration, animation.curve)
        },
        Command::Jump { index } => controller.jump_to_page(index),
        Command::AnimateTo { index, animation } => {
            controller.animate_to_page(index, animation.duration, animation.curve)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::command::DEFAULT_COMMAND_DURATION;
    use crate::curve::Curve;
    use crate::testing::{ControllerCall, RecordingController};

    #[test]
    fn given_same_command_twice_when_observing_then_dispatches_once() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        interpreter.observe(Some("__next:300:linear:1"), &mut controller);
        interpreter.observe(Some("__next:300:linear:1"), &mut controller);

        assert_eq!(controller.calls, vec![ControllerCall::Next(
            Duration::from_millis(300),
            Curve::Linear
        )]);
        assert_eq!(interpreter.last_seen(), Some("__next:300:linear:1"));
    }

    #[test]
    fn given_only_counter_changes_when_observing_then_both_dispatch() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        interpreter.observe(Some("__next:300:linear:1"), &mut controller);
        interpreter.observe(Some("__next:300:linear:2"), &mut controller);

        assert_eq!(controller.calls.len(), 2);
        assert_eq!(controller.calls[0], controller.calls[1]);
    }

    #[test]
    fn given_absent_or_empty_command_when_observing_then_nothing_happens() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        assert_eq!(interpreter.observe(None, &mut controller), None);
        assert_eq!(interpreter.observe(Some(""), &mut controller), None);

        assert!(controller.calls.is_empty());
        assert_eq!(interpreter.last_seen(), None);
    }

    #[test]
    fn given_empty_command_after_real_one_when_observing_then_guard_is_kept() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        interpreter.observe(Some("__jump:2:none:1"), &mut controller);
        interpreter.observe(Some(""), &mut controller);
        interpreter.observe(Some("__jump:2:none:1"), &mut controller);

        assert_eq!(controller.calls, vec![ControllerCall::Jump(2)]);
    }

    #[test]
    fn given_jump_without_index_when_observing_then_jumps_to_first_page() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        let command = interpreter.observe(Some("__jump"), &mut controller);

        assert_eq!(command, Some(Command::Jump { index: 0 }));
        assert_eq!(controller.calls, vec![ControllerCall::Jump(0)]);
    }

    #[test]
    fn given_negative_indices_when_observing_then_passes_them_through() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        interpreter.observe(Some("-2:400:easeIn:1"), &mut controller);
        interpreter.observe(Some("__jump:-1:none:2"), &mut controller);

        assert_eq!(controller.calls, vec![
            ControllerCall::AnimateTo(-2, Duration::from_millis(400), Curve::EaseIn),
            ControllerCall::Jump(-1),
        ]);
    }

    #[test]
    fn given_each_action_when_observing_then_routes_to_matching_call() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        for raw in ["__next:1", "__prev:2:easeIn", "__jump:3", "4:5:bounceOut:9"]
        {
            interpreter.observe(Some(raw), &mut controller);
        }

        assert_eq!(controller.calls, vec![
            ControllerCall::Next(Duration::from_millis(1), Curve::FastOutSlowIn),
            ControllerCall::Previous(Duration::from_millis(2), Curve::EaseIn),
            ControllerCall::Jump(3),
            ControllerCall::AnimateTo(
                4,
                Duration::from_millis(5),
                Curve::BounceOut
            ),
        ]);
    }

    #[test]
    fn given_unknown_curve_when_observing_then_animated_calls_use_default() {
        let mut interpreter = CommandInterpreter::new();
        let mut controller = RecordingController::default();

        interpreter.observe(Some("__next::warpSpeed:1"), &mut controller);
        interpreter.observe(Some("__prev::warpSpeed:2"), &mut controller);
        interpreter.observe(Some("1::warpSpeed:3"), &mut controller);

        assert_eq!(controller.calls, vec![
            ControllerCall::Next(DEFAULT_COMMAND_DURATION, Curve::FastOutSlowIn),
            ControllerCall::Previous(
                DEFAULT_COMMAND_DURATION,
                Curve::FastOutSlowIn
            ),
            ControllerCall::AnimateTo(
                1,
                DEFAULT_COMMAND_DURATION,
                Curve::FastOutSlowIn
            ),
        ]);
    }
}
