// SPDX-License-Identifier: MPL-2.0
//! `iced_dots` provides a paginated dot indicator for Iced carousels: a
//! bounded sliding window of dots with active/medium/small size classes
//! that shifts as the current page crosses the window boundary, in the
//! style popularized by media-carousel apps.
//!
//! The window logic lives in [`indicator::DotWindow`], a pure state
//! machine with no rendering dependencies; [`indicator::widget`] draws it
//! on an Iced canvas. The crate also ships the classic page-transform
//! curves ([`transform`]) and a small committed-page carousel model
//! ([`carousel`]) to drive the indicator from.

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod indicator;
pub mod transform;
