// SPDX-License-Identifier: MPL-2.0
//! Iced canvas rendering for the dot window.
//!
//! The widget is a thin projection of [`DotWindow`]: it samples the drawn
//! offset at render time and paints one filled circle per dot. All page
//! logic lives in the state machine.

use std::time::Instant;

use iced::widget::canvas;
use iced::{mouse, Element, Length, Point, Rectangle, Theme};

use super::style::IndicatorStyle;
use super::DotWindow;

/// Canvas program drawing a [`DotWindow`] as a row of circles.
#[derive(Debug, Clone, Copy)]
pub struct DotIndicator<'a> {
    window: &'a DotWindow,
    style: IndicatorStyle,
}

impl<'a> DotIndicator<'a> {
    pub fn new(window: &'a DotWindow) -> Self {
        Self {
            window,
            style: IndicatorStyle::default(),
        }
    }

    pub fn style(mut self, style: IndicatorStyle) -> Self {
        self.style = style;
        self
    }
}

impl<Message> canvas::Program<Message> for DotIndicator<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        if self.window.is_hidden() {
            return Vec::new();
        }

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center_y = bounds.height / 2.0;

        // Advance by the dot's step first, then paint at the running
        // position; the leading gap is what slides during a shift.
        let mut x = self.window.offset_at(Instant::now()) * self.style.small_step();
        for dot in self.window.dots() {
            x += self.style.step(dot.state());
            let path = canvas::Path::circle(
                Point::new(x, center_y),
                self.style.diameter(dot.state()) / 2.0,
            );
            frame.fill(&path, self.style.paint(dot.state()));
        }

        vec![frame.into_geometry()]
    }
}

/// Wraps a window in a fixed-size canvas element.
pub fn view<'a, Message: 'a>(
    window: &'a DotWindow,
    style: IndicatorStyle,
) -> Element<'a, Message> {
    let width = if window.is_hidden() {
        0.0
    } else {
        style.natural_width(window.dots().len())
    };
    canvas::Canvas::new(DotIndicator::new(window).style(style))
        .width(Length::Fixed(width))
        .height(Length::Fixed(style.natural_height()))
        .into()
}
