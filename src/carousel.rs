// SPDX-License-Identifier: MPL-2.0
//! Carousel paging model.
//!
//! Tracks the page count and the committed current page of a swipeable
//! carousel. This is the "page source" side of the dot indicator: every
//! committed change it reports is forwarded to
//! [`DotWindow::on_page_change`](crate::indicator::DotWindow::on_page_change).
//!
//! Navigation clamps at both ends rather than wrapping; the windowed
//! indicator models adjacent swipes, not jumps across the whole range.

/// Committed-page state of a carousel with a fixed number of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total_pages: usize,
    current_page: usize,
}

impl Carousel {
    /// Creates a carousel positioned on page zero.
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages,
            current_page: 0,
        }
    }

    /// Returns the total number of pages.
    pub fn len(&self) -> usize {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replaces the page count, snapping back to page zero.
    pub fn set_len(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.current_page = 0;
    }

    /// Commits a page selection.
    ///
    /// Returns the newly committed page, or `None` when the selection is
    /// out of range or already current (no event to report).
    pub fn select(&mut self, page: usize) -> Option<usize> {
        if page >= self.total_pages || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    /// Advances one page, clamping at the last one.
    pub fn next(&mut self) -> Option<usize> {
        self.select(self.current_page + 1)
    }

    /// Steps back one page, clamping at the first one.
    pub fn previous(&mut self) -> Option<usize> {
        if self.current_page == 0 {
            return None;
        }
        self.select(self.current_page - 1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn is_at_first(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.total_pages != 0 && self.current_page == self.total_pages - 1
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(0)
    }
}
