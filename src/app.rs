// SPDX-License-Identifier: MPL-2.0
//! Demo application: a swipeable carousel with the paginated dot
//! indicator underneath and a selectable page transform.
//!
//! The pages themselves are flat colored cards drawn on a canvas "stage";
//! the point of the demo is the indicator and transform behavior, not the
//! page content.

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::{button, canvas, column, container, pick_list, row};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Subscription, Task, Theme};

use crate::carousel::Carousel;
use crate::config::{self, Config};
use crate::indicator::shift::OffsetAnimation;
use crate::indicator::style::IndicatorStyle;
use crate::indicator::{widget as indicator_widget, DotWindow, DEFAULT_VISIBLE_DOT_COUNT};
use crate::transform::PageTransform;

const DEMO_PAGE_COUNT: usize = 12;
/// Stage scroll settle time; a touch slower than the indicator shift so
/// the dots visibly lead the page.
const STAGE_SCROLL_DURATION: Duration = Duration::from_millis(200);
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const PAGE_COLORS: [Color; 6] = [
    Color::from_rgb(0.3, 0.6, 0.9),
    Color::from_rgb(0.263, 0.702, 0.404),
    Color::from_rgb(0.945, 0.651, 0.125),
    Color::from_rgb(0.898, 0.224, 0.208),
    Color::from_rgb(0.55, 0.4, 0.85),
    Color::from_rgb(0.2, 0.7, 0.7),
];

/// Launch options parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Number of demo pages (defaults to 12).
    pub pages: Option<usize>,
    /// Visible dot count (floor of 6).
    pub visible_dots: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    TransformSelected(PageTransform),
    Tick(Instant),
}

pub struct App {
    carousel: Carousel,
    indicator: DotWindow,
    style: IndicatorStyle,
    transform: PageTransform,
    /// Cosmetic stage scroll, in page units.
    scroll: Option<OffsetAnimation>,
    config: Config,
    /// Where settings are persisted; `None` disables persistence.
    settings_path: Option<PathBuf>,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        (
            Self::fresh(flags, config, config::default_path()),
            Task::none(),
        )
    }

    fn fresh(flags: Flags, config: Config, settings_path: Option<PathBuf>) -> Self {
        let pages = flags.pages.unwrap_or(DEMO_PAGE_COUNT);
        let visible = flags
            .visible_dots
            .or(config.visible_dots)
            .unwrap_or(DEFAULT_VISIBLE_DOT_COUNT);
        let indicator = DotWindow::with_visible_dots(pages, visible).unwrap_or_else(|err| {
            eprintln!("ignoring configured dot count: {}", err);
            DotWindow::new(pages)
        });

        Self {
            carousel: Carousel::new(pages),
            indicator,
            style: config.indicator_style(),
            transform: config.page_transform(),
            scroll: None,
            config,
            settings_path,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NextPage => {
                if let Some(page) = self.carousel.next() {
                    self.commit(page);
                }
            }
            Message::PreviousPage => {
                if let Some(page) = self.carousel.previous() {
                    self.commit(page);
                }
            }
            Message::TransformSelected(transform) => {
                self.transform = transform;
                self.config.transform = Some(transform.name().to_string());
                if let Some(path) = &self.settings_path {
                    if let Err(err) = config::save_to_path(&self.config, path) {
                        eprintln!("failed to save settings: {}", err);
                    }
                }
            }
            Message::Tick(_) => {
                // Redraw only; all animation state is sampled at draw time.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let stage = canvas::Canvas::new(Stage {
            page_count: self.carousel.len(),
            transform: self.transform,
            scroll: self.scroll_at(Instant::now()),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let indicator = container(indicator_widget::view(&self.indicator, self.style))
            .center_x(Length::Fill);

        let controls = row![
            button("Previous")
                .on_press_maybe(self.carousel.has_previous().then_some(Message::PreviousPage)),
            pick_list(
                PageTransform::ALL,
                Some(self.transform),
                Message::TransformSelected
            ),
            button("Next").on_press_maybe(self.carousel.has_next().then_some(Message::NextPage)),
        ]
        .spacing(12);

        column![stage, indicator, container(controls).center_x(Length::Fill)]
            .spacing(16)
            .padding(16)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating(Instant::now()) {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn commit(&mut self, page: usize) {
        let now = Instant::now();
        let from = self.scroll_at(now);
        self.indicator.on_page_change(page);
        self.scroll = Some(OffsetAnimation::with_duration(
            from,
            page as f32,
            now,
            STAGE_SCROLL_DURATION,
        ));
    }

    fn scroll_at(&self, now: Instant) -> f32 {
        match &self.scroll {
            Some(anim) => anim.value_at(now),
            None => self.carousel.current_page() as f32,
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.indicator.is_animating(now)
            || self.scroll.is_some_and(|anim| !anim.is_finished(now))
    }
}

/// Canvas program drawing the carousel pages with the selected transform.
struct Stage {
    page_count: usize,
    transform: PageTransform,
    scroll: f32,
}

impl<Message> canvas::Program<Message> for Stage {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let page = Size::new(bounds.width * 0.7, bounds.height * 0.85);

        for index in 0..self.page_count {
            let position = index as f32 - self.scroll;
            let visuals = self.transform.visuals(position, page);
            if visuals.is_hidden() {
                continue;
            }

            // Rotation around the vertical axis rendered as a horizontal
            // squeeze; close enough for a flat card.
            let squeeze = visuals.rotation.to_radians().cos().abs();
            let width = page.width * visuals.scale_x * squeeze;
            let height = page.height * visuals.scale_y;

            // The page's resting slot, offset by the transform.
            let center_x = bounds.width / 2.0 + position * page.width + visuals.translation_x;
            let center_y = bounds.height / 2.0 + visuals.translation_y;

            let top_left = Point::new(center_x - width / 2.0, center_y - height / 2.0);
            let base = PAGE_COLORS[index % PAGE_COLORS.len()];
            let color = Color {
                a: visuals.alpha.clamp(0.0, 1.0),
                ..base
            };
            let path = canvas::Path::rectangle(top_left, Size::new(width, height));
            frame.fill(&path, color);
        }

        vec![frame.into_geometry()]
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title("iced_dots demo")
        .subscription(App::subscription)
        .window_size(iced::Size::new(560.0, 640.0))
        .run()
}
