use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use crate::attributes::{Attributes, names};
use crate::command::Command;
use crate::controller::CarouselController;
use crate::events::{EventSink, HostEvent};
use crate::indicator::{IndicatorScroll, IndicatorStrip};
use crate::interpreter::CommandInterpreter;
use crate::items::ItemSource;
use crate::options::{CarouselOptions, RenderConfiguration};
use crate::theme::Theme;

/// The carousel itself: engine options plus the items to page through.
#[derive(Debug)]
pub struct Carousel<'a, T> {
    pub options: CarouselOptions,
    pub items: ItemSource<'a, T>,
}

/// Result of one render pass.
#[derive(Debug)]
pub enum CarouselView<'a, T> {
    /// Indicator disabled: the carousel alone.
    Plain(Carousel<'a, T>),
    /// The carousel stacked above its indicator strip.
    WithIndicator {
        carousel: Carousel<'a, T>,
        indicator: IndicatorStrip,
    },
}

impl<'a, T> CarouselView<'a, T> {
    pub fn carousel(&self) -> &Carousel<'a, T> {
        match self {
            CarouselView::Plain(carousel) => carousel,
            CarouselView::WithIndicator { carousel, .. } => carousel,
        }
    }

    pub fn indicator(&self) -> Option<&IndicatorStrip> {
        match self {
            CarouselView::Plain(_) => None,
            CarouselView::WithIndicator { indicator, .. } => Some(indicator),
        }
    }

    pub fn into_parts(self) -> (Carousel<'a, T>, Option<IndicatorStrip>) {
        match self {
            CarouselView::Plain(carousel) => (carousel, None),
            CarouselView::WithIndicator {
                carousel,
                indicator,
            } => (carousel, Some(indicator)),
        }
    }
}

/// Host-facing carousel control.
///
/// One instance lives as long as the control is mounted. It owns the
/// engine's controller, the last executed command and the current page, and
/// releases all of them when dropped.
pub struct CarouselControl<C: CarouselController> {
    controller: C,
    interpreter: CommandInterpreter,
    current_page: Rc<Cell<usize>>,
    indicator_scroll: Rc<RefCell<IndicatorScroll>>,
    sink: Rc<dyn EventSink>,
}

impl<C: CarouselController> CarouselControl<C> {
    pub fn new(controller: C, sink: Rc<dyn EventSink>) -> Self {
        Self {
            controller,
            interpreter: CommandInterpreter::new(),
            current_page: Rc::new(Cell::new(0)),
            indicator_scroll: Rc::new(RefCell::new(IndicatorScroll::new())),
            sink,
        }
    }

    /// Attribute-update hook. Must run on every update, related to the
    /// pending command or not.
    pub fn did_update<A: Attributes + ?Sized>(
        &mut self,
        attrs: &A,
    ) -> Option<Command> {
        self.interpreter.observe(
            attrs.string(names::PENDING_COMMAND),
            &mut self.controller,
        )
    }

    /// Translate `attrs` and bind the engine callbacks to this control.
    pub fn configure<A: Attributes + ?Sized>(
        &self,
        attrs: &A,
        theme: &Theme,
    ) -> RenderConfiguration {
        let mut config = RenderConfiguration::from_attributes(attrs, theme);

        let current_page = Rc::clone(&self.current_page);
        let indicator_scroll = Rc::clone(&self.indicator_scroll);
        let sink = Rc::clone(&self.sink);
        let scroll_sink = Rc::clone(&self.sink);

        config.carousel = config
            .carousel
            .on_page_changed(move |index, reason| {
                current_page.set(index);
                indicator_scroll
                    .borrow_mut()
                    .scroll_to_dot(index, Instant::now());
                HostEvent::Change { index, reason }.emit(&*sink);
            })
            .on_scrolled(move |offset| {
                HostEvent::Scrolled { offset }.emit(&*scroll_sink);
            });

        config
    }

    /// Render pass: options, items and (optionally) the indicator strip.
    pub fn build<'a, A, Child, T>(
        &self,
        attrs: &A,
        theme: &Theme,
        children: &'a [Child],
        render: impl Fn(usize, &'a Child) -> T + 'a,
    ) -> CarouselView<'a, T>
    where
        A: Attributes + ?Sized,
    {
        let config = self.configure(attrs, theme);
        let items =
            ItemSource::from_children(children, config.build_on_demand, render);
        let carousel = Carousel {
            options: config.carousel,
            items,
        };

        if !config.indicator.enabled {
            return CarouselView::Plain(carousel);
        }

        let indicator = IndicatorStrip::new(
            children.len(),
            self.current_page(),
            &config.indicator,
            self.indicator_offset(),
        );
        CarouselView::WithIndicator {
            carousel,
            indicator,
        }
    }

    /// Dot tap: straight to the controller, bypassing the command guard.
    pub fn tap_indicator(&mut self, strip: &IndicatorStrip, index: usize) -> bool {
        strip.tap(index, &mut self.controller)
    }

    /// Advance the indicator scroll tween; `None` once it has settled.
    pub fn tick_indicator(&self, now: Instant) -> Option<f32> {
        self.indicator_scroll.borrow_mut().tick(now)
    }

    pub fn indicator_offset(&self) -> f32 {
        self.indicator_scroll.borrow().offset()
    }

    pub fn is_indicator_scrolling(&self) -> bool {
        self.indicator_scroll.borrow().is_animating()
    }

    /// Last page the engine reported.
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    pub fn last_command(&self) -> Option<&str> {
        self.interpreter.last_seen()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }
}

impl<C: CarouselController> Drop for CarouselControl<C> {
    fn drop(&mut self) {
        // Handlers of a configuration still held by the engine share this
        // state; stop the tween so a late tick is a no-op.
        if let Ok(mut scroll) = self.indicator_scroll.try_borrow_mut() {
            scroll.cancel();
        }
        log::debug!("carousel control released");
    }
}
