// SPDX-License-Identifier: MPL-2.0
//! Paginated dot indicator state.
//!
//! This module owns the sliding-window state machine behind the indicator:
//! a bounded row of dots representing the current page among `n` pages.
//! When the page count exceeds the visible window, the row keeps small and
//! medium "trimmed edge" dots and shifts by one position as the current
//! page crosses the window boundary.
//!
//! The state machine is deliberately independent from any rendering
//! framework; [`widget`] draws it with an Iced canvas.

pub mod shift;
pub mod style;
pub mod widget;

use std::time::Instant;

use crate::error::{Error, Result};
use shift::OffsetAnimation;

/// Smallest window the update algorithm supports. Configuring fewer
/// visible dots is rejected with [`Error::VisibleDotCount`].
pub const MIN_VISIBLE_DOT_COUNT: usize = 6;

/// Default window size.
pub const DEFAULT_VISIBLE_DOT_COUNT: usize = MIN_VISIBLE_DOT_COUNT;

/// Rendered size class of a single dot.
///
/// `Active` is drawn with the active paint; the other three share the
/// inactive paint at decreasing diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Active,
    Inactive,
    Medium,
    Small,
}

/// One indicator unit. Dots are transient view state: the whole row is
/// rebuilt whenever the page count or window size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    state: DotState,
}

impl Dot {
    fn new(state: DotState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> DotState {
        self.state
    }
}

/// The bounded window of dots plus the page bookkeeping that drives it.
///
/// All transitions are synchronous: [`DotWindow::on_page_change`] commits
/// the final dot states before it returns, and the optional shift
/// animation only affects where [`DotWindow::offset_at`] says the row is
/// drawn between the old and new position.
#[derive(Debug, Clone)]
pub struct DotWindow {
    dots: Vec<Dot>,
    total_pages: usize,
    visible_dots: usize,
    current_page: usize,
    previous_page: usize,
    /// Drawn offset while no shift is in flight, in small-dot steps.
    rest_offset: f32,
    shift: Option<OffsetAnimation>,
}

impl DotWindow {
    /// Creates a window with the default visible dot count.
    pub fn new(total_pages: usize) -> Self {
        let mut window = Self {
            dots: Vec::new(),
            total_pages,
            visible_dots: DEFAULT_VISIBLE_DOT_COUNT,
            current_page: 0,
            previous_page: 0,
            rest_offset: 0.0,
            shift: None,
        };
        window.rebuild();
        window
    }

    /// Creates a window with an explicit visible dot count.
    ///
    /// Fails with [`Error::VisibleDotCount`] when `visible_dots` is below
    /// [`MIN_VISIBLE_DOT_COUNT`].
    pub fn with_visible_dots(total_pages: usize, visible_dots: usize) -> Result<Self> {
        if visible_dots < MIN_VISIBLE_DOT_COUNT {
            return Err(Error::VisibleDotCount {
                requested: visible_dots,
            });
        }
        let mut window = Self::new(total_pages);
        window.visible_dots = visible_dots;
        window.rebuild();
        Ok(window)
    }

    /// The dots currently in the window, left to right.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn visible_dot_count(&self) -> usize {
        self.visible_dots
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Whether the host should render the indicator at all. Mirrors the
    /// convention of hiding page indicators for zero or one page.
    pub fn is_hidden(&self) -> bool {
        self.total_pages <= 1
    }

    /// Whether the page count exceeds the window, i.e. whether edge dots
    /// shrink and page changes can shift the window.
    pub fn is_windowed(&self) -> bool {
        self.total_pages > self.visible_dots
    }

    /// Replaces the page count and rebuilds the window from page zero.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.rebuild();
    }

    /// Replaces the window size and rebuilds from page zero.
    ///
    /// Fails with [`Error::VisibleDotCount`] when `visible_dots` is below
    /// the floor; existing state is left untouched in that case.
    pub fn set_visible_dot_count(&mut self, visible_dots: usize) -> Result<()> {
        if visible_dots < MIN_VISIBLE_DOT_COUNT {
            return Err(Error::VisibleDotCount {
                requested: visible_dots,
            });
        }
        self.visible_dots = visible_dots;
        self.rebuild();
        Ok(())
    }

    /// Drawn offset of the row's left edge at `now`, in small-dot steps.
    ///
    /// While a shift is in flight this eases from the pre-shift position
    /// to the rest position; otherwise it is the rest position (one step
    /// in windowed mode, zero otherwise).
    pub fn offset_at(&self, now: Instant) -> f32 {
        match &self.shift {
            Some(anim) => anim.value_at(now),
            None => self.rest_offset,
        }
    }

    /// Whether a shift animation is still settling at `now`. Hosts use
    /// this to keep redraw ticks alive only while something moves.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.shift.is_some_and(|anim| !anim.is_finished(now))
    }

    /// Handles a committed page-selection event from the host pager.
    ///
    /// Repeated or out-of-range pages are silently ignored: transient
    /// invalid callbacks from a pager must not corrupt the indicator.
    pub fn on_page_change(&mut self, page: usize) {
        if page == self.current_page || page >= self.total_pages {
            return;
        }
        self.current_page = page;
        self.update_dots();
        self.previous_page = self.current_page;
    }

    /// Rebuilds the dot row for the current page count and window size.
    ///
    /// Windowed layout: `[Active, Inactive…, Medium, Small]`; otherwise
    /// `[Active, Inactive…]` with no shrunken edge dots.
    fn rebuild(&mut self) {
        self.current_page = 0;
        self.previous_page = 0;
        self.shift = None;

        let windowed = self.is_windowed();
        self.rest_offset = if windowed { 1.0 } else { 0.0 };

        let count = self.total_pages.min(self.visible_dots);
        self.dots = (0..count)
            .map(|i| {
                let state = if windowed {
                    if i == 0 {
                        DotState::Active
                    } else if i == count - 1 {
                        DotState::Small
                    } else if i == count - 2 {
                        DotState::Medium
                    } else {
                        DotState::Inactive
                    }
                } else if i == 0 {
                    DotState::Active
                } else {
                    DotState::Inactive
                };
                Dot::new(state)
            })
            .collect();
    }

    fn update_dots(&mut self) {
        if !self.is_windowed() {
            // Non-shifting regime: page indices map 1:1 to dot indices.
            self.dots[self.previous_page].state = DotState::Inactive;
            self.dots[self.current_page].state = DotState::Active;
            return;
        }

        let Some(active) = self
            .dots
            .iter()
            .position(|dot| dot.state == DotState::Active)
        else {
            return;
        };
        self.dots[active].state = DotState::Inactive;
        if self.current_page > self.previous_page {
            self.advance_right(active);
        } else {
            self.advance_left(active);
        }
    }

    /// Moving right with the previously active dot at index `active`.
    fn advance_right(&mut self, active: usize) {
        if active + 3 >= self.visible_dots {
            if self.current_page == self.total_pages - 1 {
                // Trailing edge reached: no further shifting.
                let last = self.dots.len() - 1;
                self.dots[last].state = DotState::Active;
            } else if self.current_page == self.total_pages - 2 {
                let last = self.dots.len() - 1;
                self.dots[last].state = DotState::Medium;
                self.dots[last - 1].state = DotState::Active;
            } else {
                self.shift_right(active);
            }
        } else {
            self.dots[active + 1].state = DotState::Active;
        }
    }

    /// Moving left; mirror of [`DotWindow::advance_right`].
    fn advance_left(&mut self, active: usize) {
        if active <= 2 {
            match self.current_page {
                0 => self.dots[0].state = DotState::Active,
                1 => {
                    self.dots[0].state = DotState::Medium;
                    self.dots[1].state = DotState::Active;
                }
                _ => self.shift_left(active),
            }
        } else {
            self.dots[active - 1].state = DotState::Active;
        }
    }

    /// Drops the first dot, re-shrinks the new leading edge and inserts a
    /// fresh active dot where the old one sat. The drawn row starts one
    /// extra step to the right and eases back to rest.
    fn shift_right(&mut self, active: usize) {
        self.dots.remove(0);
        self.dots[0].state = DotState::Small;
        self.dots[1].state = DotState::Medium;
        self.dots.insert(active, Dot::new(DotState::Active));
        self.begin_shift(2.0);
    }

    fn shift_left(&mut self, active: usize) {
        self.dots.pop();
        let last = self.dots.len() - 1;
        self.dots[last].state = DotState::Small;
        self.dots[last - 1].state = DotState::Medium;
        self.dots.insert(active, Dot::new(DotState::Active));
        self.begin_shift(0.0);
    }

    fn begin_shift(&mut self, from: f32) {
        // Replaces any in-flight shift: last-writer-wins.
        self.shift = Some(OffsetAnimation::new(from, self.rest_offset, Instant::now()));
    }
}

impl Default for DotWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn states(window: &DotWindow) -> Vec<DotState> {
        window.dots().iter().map(|dot| dot.state()).collect()
    }

    fn active_count(window: &DotWindow) -> usize {
        window
            .dots()
            .iter()
            .filter(|dot| dot.state() == DotState::Active)
            .count()
    }

    use DotState::{Active, Inactive, Medium, Small};

    #[test]
    fn few_pages_build_a_plain_window() {
        // Scenario A
        let window = DotWindow::with_visible_dots(4, 6).expect("valid count");
        assert_eq!(states(&window), vec![Active, Inactive, Inactive, Inactive]);
        assert!(!window.is_windowed());
        assert_eq!(window.offset_at(Instant::now()), 0.0);
    }

    #[test]
    fn many_pages_build_a_windowed_layout() {
        // Scenario B
        let window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        assert_eq!(
            states(&window),
            vec![Active, Inactive, Inactive, Inactive, Medium, Small]
        );
        assert!(window.is_windowed());
        assert_eq!(window.offset_at(Instant::now()), 1.0);
    }

    #[test]
    fn advancing_inside_the_window_does_not_shift() {
        // Scenario C
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        window.on_page_change(1);
        assert_eq!(
            states(&window),
            vec![Inactive, Active, Inactive, Inactive, Medium, Small]
        );
        assert!(!window.is_animating(Instant::now()));
    }

    #[test]
    fn crossing_the_window_boundary_shifts_right() {
        // Scenario D
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        for page in 1..=4 {
            window.on_page_change(page);
        }
        assert_eq!(
            states(&window),
            vec![Small, Medium, Inactive, Active, Medium, Small]
        );
        assert_eq!(window.dots().len(), 6);
        assert_eq!(window.current_page(), 4);
    }

    #[test]
    fn undersized_visible_count_is_rejected() {
        // Scenario E
        assert!(matches!(
            DotWindow::with_visible_dots(20, 5),
            Err(crate::error::Error::VisibleDotCount { requested: 5 })
        ));

        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        window.on_page_change(1);
        let before = states(&window);
        assert!(window.set_visible_dot_count(5).is_err());
        assert_eq!(states(&window), before, "state must survive the error");
        assert_eq!(window.current_page(), 1);
    }

    #[test]
    fn exactly_one_active_dot_through_a_long_walk() {
        let mut window = DotWindow::with_visible_dots(15, 6).expect("valid count");
        let walk: Vec<usize> = (1..15).chain((0..14).rev()).collect();
        for page in walk {
            window.on_page_change(page);
            assert_eq!(active_count(&window), 1, "at page {}", page);
            assert_eq!(window.dots().len(), 6);
        }
    }

    #[test]
    fn repeated_page_change_is_idempotent() {
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        window.on_page_change(1);
        let snapshot = states(&window);
        window.on_page_change(1);
        assert_eq!(states(&window), snapshot);
        assert_eq!(window.current_page(), 1);
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut window = DotWindow::with_visible_dots(4, 6).expect("valid count");
        window.on_page_change(2);
        let snapshot = states(&window);
        window.on_page_change(4);
        window.on_page_change(17);
        assert_eq!(states(&window), snapshot);
        assert_eq!(window.current_page(), 2);
    }

    #[test]
    fn trailing_edge_never_shifts_further() {
        let mut window = DotWindow::with_visible_dots(7, 6).expect("valid count");
        for page in 1..7 {
            window.on_page_change(page);
        }
        assert_eq!(
            states(&window),
            vec![Small, Medium, Inactive, Inactive, Inactive, Active]
        );
        window.on_page_change(6);
        window.on_page_change(6);
        assert_eq!(
            states(&window),
            vec![Small, Medium, Inactive, Inactive, Inactive, Active]
        );
    }

    #[test]
    fn second_to_last_page_keeps_a_medium_tail() {
        let mut window = DotWindow::with_visible_dots(7, 6).expect("valid count");
        for page in 1..6 {
            window.on_page_change(page);
        }
        assert_eq!(
            states(&window),
            vec![Small, Medium, Inactive, Inactive, Active, Medium]
        );
    }

    #[test]
    fn walking_back_to_page_zero_restores_the_initial_layout() {
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        for page in 1..=4 {
            window.on_page_change(page);
        }
        for page in (0..4).rev() {
            window.on_page_change(page);
            assert_eq!(active_count(&window), 1, "at page {}", page);
        }
        assert_eq!(
            states(&window),
            vec![Active, Inactive, Inactive, Inactive, Medium, Small]
        );
        assert_eq!(window.offset_at(Instant::now() + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn crossing_back_over_the_start_shifts_left() {
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        for page in 1..=5 {
            window.on_page_change(page);
        }
        // Active sits at index 3 after two right shifts; move left until a
        // left shift fires.
        window.on_page_change(4);
        window.on_page_change(3);
        assert_eq!(
            states(&window),
            vec![Small, Medium, Active, Inactive, Medium, Small]
        );
        assert_eq!(window.dots().len(), 6);
    }

    #[test]
    fn shift_offset_settles_at_rest() {
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        for page in 1..=4 {
            window.on_page_change(page);
        }
        let now = Instant::now();
        assert!(window.is_animating(now));
        assert!(window.offset_at(now) > 1.0, "right shift draws from 2.0");
        let settled = now + Duration::from_millis(500);
        assert_eq!(window.offset_at(settled), 1.0);
        assert!(!window.is_animating(settled));
    }

    #[test]
    fn normal_mode_changes_never_animate() {
        let mut window = DotWindow::with_visible_dots(5, 6).expect("valid count");
        for page in [1, 2, 3, 4, 0] {
            window.on_page_change(page);
            assert!(!window.is_animating(Instant::now()));
            assert_eq!(window.offset_at(Instant::now()), 0.0);
        }
        assert_eq!(
            states(&window),
            vec![Active, Inactive, Inactive, Inactive, Inactive]
        );
    }

    #[test]
    fn jumping_in_normal_mode_tracks_the_page_directly() {
        let mut window = DotWindow::with_visible_dots(6, 6).expect("valid count");
        window.on_page_change(5);
        assert_eq!(
            states(&window),
            vec![Inactive, Inactive, Inactive, Inactive, Inactive, Active]
        );
        window.on_page_change(2);
        assert_eq!(
            states(&window),
            vec![Inactive, Inactive, Active, Inactive, Inactive, Inactive]
        );
    }

    #[test]
    fn set_total_pages_rebuilds_from_page_zero() {
        let mut window = DotWindow::with_visible_dots(20, 6).expect("valid count");
        for page in 1..=4 {
            window.on_page_change(page);
        }
        window.set_total_pages(3);
        assert_eq!(states(&window), vec![Active, Inactive, Inactive]);
        assert_eq!(window.current_page(), 0);
        assert!(!window.is_windowed());
    }

    #[test]
    fn single_or_zero_pages_hide_the_indicator() {
        assert!(DotWindow::new(0).is_hidden());
        assert!(DotWindow::new(1).is_hidden());
        assert!(!DotWindow::new(2).is_hidden());

        let mut window = DotWindow::new(8);
        window.set_total_pages(1);
        assert!(window.is_hidden());
    }

    #[test]
    fn empty_window_ignores_everything() {
        let mut window = DotWindow::new(0);
        assert!(window.dots().is_empty());
        window.on_page_change(0);
        window.on_page_change(3);
        assert!(window.dots().is_empty());
    }

    #[test]
    fn wider_windows_respect_the_configured_count() {
        let window = DotWindow::with_visible_dots(30, 9).expect("valid count");
        assert_eq!(window.dots().len(), 9);
        assert_eq!(window.dots()[8].state(), Small);
        assert_eq!(window.dots()[7].state(), Medium);
        assert_eq!(window.dots()[0].state(), Active);
    }
}
