use std::time::Duration;

use crate::curve::Curve;

/// Imperative navigation exposed by the carousel engine.
///
/// Page indices are signed: with infinite scroll the engine maps any index
/// onto a real page.
///
/// Calls are fire-and-forget: the engine owns the animation and decides
/// whether a new call interrupts one in flight.
pub trait CarouselController {
    fn jump_to_page(&mut self, index: i64);
    fn animate_to_page(&mut self, index: i64, duration: Duration, curve: Curve);
    fn next_page(&mut self, duration: Duration, curve: Curve);
    fn previous_page(&mut self, duration: Duration, curve: Curve);
}

impl<C: CarouselController + ?Sized> CarouselController for &mut C {
    fn jump_to_page(&mut self, index: i64) {
        (**self).jump_to_page(index)
    }

    fn animate_to_page(&mut self, index: i64, duration: Duration, curve: Curve) {
        (**self).animate_to_page(index, duration, curve)
    }

    fn next_page(&mut self, duration: Duration, curve: Curve) {
        (**self).next_page(duration, curve)
    }

    fn previous_page(&mut self, duration: Duration, curve: Curve) {
        (**self).previous_page(duration, curve)
    }
}

impl<C: CarouselController + ?Sized> CarouselController for Box<C> {
    fn jump_to_page(&mut self, index: i64) {
        (**self).jump_to_page(index)
    }

    fn animate_to_page(&mut self, index: i64, duration: Duration, curve: Curve) {
        (**self).animate_to_page(index, duration, curve)
    }

    fn next_page(&mut self, duration: Duration, curve: Curve) {
        (**self).next_page(duration, curve)
    }

    fn previous_page(&mut self, duration: Duration, curve: Curve) {
        (**self).previous_page(duration, curve)
    }
}
