// SPDX-License-Identifier: MPL-2.0
//! Page transforms for carousel scrolling.
//!
//! A transform is a pure mapping from a page's normalized scroll position
//! to the visual attributes it should be drawn with. Position `0.0` means
//! the page fills the viewport, `-1.0` one full page to the left, `1.0`
//! one full page to the right. Anything outside `[-1, 1]` is hidden.

use std::f32::consts::PI;
use std::fmt;

use iced::Size;

/// Visual attributes a transform assigns to a page.
///
/// Translations are in the same units as the page size passed to
/// [`PageTransform::visuals`]; `rotation` is in degrees around the page's
/// vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageVisuals {
    pub alpha: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation: f32,
}

impl Default for PageVisuals {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl PageVisuals {
    /// A fully hidden page.
    pub fn hidden() -> Self {
        Self {
            alpha: 0.0,
            ..Self::default()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// The available page transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTransform {
    #[default]
    Carousel,
    Cube,
    Depth,
    Flip,
    ScaleAndFade,
    SlideIn,
    Wave,
    ZoomOut,
}

impl PageTransform {
    pub const ALL: [PageTransform; 8] = [
        PageTransform::Carousel,
        PageTransform::Cube,
        PageTransform::Depth,
        PageTransform::Flip,
        PageTransform::ScaleAndFade,
        PageTransform::SlideIn,
        PageTransform::Wave,
        PageTransform::ZoomOut,
    ];

    /// Stable name used for persistence.
    pub fn name(&self) -> &'static str {
        match self {
            PageTransform::Carousel => "carousel",
            PageTransform::Cube => "cube",
            PageTransform::Depth => "depth",
            PageTransform::Flip => "flip",
            PageTransform::ScaleAndFade => "scale-and-fade",
            PageTransform::SlideIn => "slide-in",
            PageTransform::Wave => "wave",
            PageTransform::ZoomOut => "zoom-out",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Computes the visuals for a page at `position`, for a page of the
    /// given size.
    pub fn visuals(&self, position: f32, page: Size) -> PageVisuals {
        if !(-1.0..=1.0).contains(&position) {
            return PageVisuals::hidden();
        }
        let abs = position.abs();
        match self {
            PageTransform::Carousel => PageVisuals {
                scale_y: 1.0 - abs * 0.3,
                alpha: 1.0 - abs,
                translation_x: -position * page.width,
                ..PageVisuals::default()
            },
            PageTransform::Cube => {
                let scale = 0.75 + (1.0 - abs) * 0.25;
                PageVisuals {
                    scale_x: scale,
                    scale_y: scale,
                    alpha: 1.0 - abs,
                    rotation: 90.0 * position,
                    ..PageVisuals::default()
                }
            }
            PageTransform::Depth => PageVisuals {
                alpha: 1.0 - abs,
                translation_x: -position * page.width,
                scale_y: 0.75 + (1.0 - abs) * 0.25,
                ..PageVisuals::default()
            },
            PageTransform::Flip => PageVisuals {
                rotation: position * -30.0,
                translation_x: page.width * position,
                ..PageVisuals::default()
            },
            PageTransform::ScaleAndFade => {
                let scale = 0.85 + (1.0 - abs) * 0.15;
                PageVisuals {
                    scale_x: scale,
                    scale_y: scale,
                    alpha: 0.5 + (1.0 - abs) * 0.5,
                    ..PageVisuals::default()
                }
            }
            PageTransform::SlideIn => PageVisuals {
                alpha: 1.0 - abs,
                translation_x: -position * page.width,
                ..PageVisuals::default()
            },
            PageTransform::Wave => PageVisuals {
                translation_y: page.height * 0.25 * (abs * PI).sin(),
                ..PageVisuals::default()
            },
            PageTransform::ZoomOut => {
                // Only the vertical axis scales; the horizontal shrink is
                // faked through the margin-based translation below.
                let scale = (1.0 - abs).max(0.85);
                let vert_margin = page.height * (1.0 - scale) / 2.0;
                let horz_margin = page.width * (1.0 - scale) / 2.0;
                let translation_x = if position < 0.0 {
                    horz_margin - vert_margin / 2.0
                } else {
                    horz_margin + vert_margin / 2.0
                };
                PageVisuals {
                    scale_y: scale,
                    alpha: scale,
                    translation_x,
                    ..PageVisuals::default()
                }
            }
        }
    }
}

impl fmt::Display for PageTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PageTransform::Carousel => "Carousel",
            PageTransform::Cube => "Cube",
            PageTransform::Depth => "Depth",
            PageTransform::Flip => "Flip",
            PageTransform::ScaleAndFade => "Scale and fade",
            PageTransform::SlideIn => "Slide in",
            PageTransform::Wave => "Wave",
            PageTransform::ZoomOut => "Zoom out",
        };
        f.write_str(label)
    }
}
