use std::ops::Range;

use carousel_bridge::{Color, DOT_PITCH, IndicatorStrip};
use iced::border::Radius;
use iced::widget::{Row, Space, column, container, mouse_area};
use iced::{Element, Length, alignment};

/// Diameter of one dot.
pub const DOT_SIZE: f32 = 12.0;
const DOT_PADDING_X: f32 = (DOT_PITCH - DOT_SIZE) / 2.0;
const DOT_PADDING_Y: f32 = 8.0;

type DotAction<'a, Message> = dyn Fn(usize) -> Message + 'a;

/// Row of indicator dots for one [`IndicatorStrip`] snapshot.
pub struct IndicatorView<'a, Message: Clone + 'a> {
    strip: &'a IndicatorStrip,
    on_press: Option<Box<DotAction<'a, Message>>>,
}

impl<'a, Message: Clone + 'a> IndicatorView<'a, Message> {
    pub fn new(strip: &'a IndicatorStrip) -> Self {
        Self {
            strip,
            on_press: None,
        }
    }

    /// Emit a message with the dot index when a dot is pressed.
    pub fn on_press(
        mut self,
        on_press: impl Fn(usize) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Build the `Element` for the strip.
    ///
    /// A fixed-width strip only renders the dots its scroll offset brings
    /// into view, snapped to whole dots.
    pub fn view(self) -> Element<'a, Message> {
        let range =
            visible_dots(self.strip.len(), self.strip.offset, self.strip.width);
        log::trace!("indicator shows dots {range:?} of {}", self.strip.len());
        let mut row = Row::new().spacing(0.0);

        for dot in &self.strip.dots[range] {
            let content = dot_element(dot.color);
            let content = match self.on_press.as_deref() {
                Some(on_press) => {
                    mouse_area(content).on_press(on_press(dot.index)).into()
                },
                None => content,
            };
            row = row.push(content);
        }

        let width = self
            .strip
            .width
            .map(Length::Fixed)
            .unwrap_or(Length::Shrink);

        container(row)
            .width(width)
            .align_x(alignment::Horizontal::Center)
            .clip(true)
            .into()
    }
}

/// Stack `carousel` above its indicator, centered.
pub fn carousel_frame<'a, Message: Clone + 'a>(
    carousel: impl Into<Element<'a, Message>>,
    indicator: Option<IndicatorView<'a, Message>>,
) -> Element<'a, Message> {
    match indicator {
        Some(indicator) => column![carousel.into(), indicator.view()]
            .align_x(alignment::Horizontal::Center)
            .into(),
        None => carousel.into(),
    }
}

/// Indices of the dots visible at `offset` in a strip `width` wide.
///
/// Without a width the strip grows with its content and every dot is
/// visible.
pub fn visible_dots(
    count: usize,
    offset: f32,
    width: Option<f32>,
) -> Range<usize> {
    let Some(width) = width else {
        return 0..count;
    };

    let offset = offset.max(0.0);
    let first = ((offset / DOT_PITCH).floor() as usize).min(count);
    let last = (((offset + width.max(0.0)) / DOT_PITCH).floor() as usize)
        .clamp(first, count);
    first..last
}

pub fn to_iced_color(color: Color) -> iced::Color {
    iced::Color::from_rgba8(color.r, color.g, color.b, color.opacity())
}

fn dot_element<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    let fill = to_iced_color(color);
    let dot = container(Space::new())
        .width(Length::Fixed(DOT_SIZE))
        .height(Length::Fixed(DOT_SIZE))
        .style(move |_| container::Style {
            background: Some(fill.into()),
            border: iced::Border {
                radius: Radius::from(DOT_SIZE / 2.0),
                ..Default::default()
            },
            ..Default::default()
        });

    container(dot).padding([DOT_PADDING_Y, DOT_PADDING_X]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_width_when_windowing_then_every_dot_is_visible() {
        assert_eq!(visible_dots(30, 400.0, None), 0..30);
    }

    #[test]
    fn given_fixed_width_when_windowing_then_only_whole_dots_fit() {
        assert_eq!(visible_dots(30, 0.0, Some(110.0)), 0..5);
        assert_eq!(visible_dots(30, 100.0, Some(110.0)), 5..10);
    }

    #[test]
    fn given_offset_past_the_end_when_windowing_then_range_is_empty() {
        assert_eq!(visible_dots(4, 500.0, Some(110.0)), 4..4);
        assert_eq!(visible_dots(4, 40.0, Some(200.0)), 2..4);
    }

    #[test]
    fn given_translucent_color_when_converting_then_keeps_opacity() {
        let color = Color::from_argb8(0x66, 0xff, 0x00, 0x00);
        let converted = to_iced_color(color);

        assert_eq!(converted.r, 1.0);
        assert_eq!(converted.g, 0.0);
        assert!((converted.a - 0.4).abs() < 1e-6);
    }
}
