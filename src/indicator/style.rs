// SPDX-License-Identifier: MPL-2.0
//! Dot geometry and paints.

use iced::Color;

use super::DotState;

/// Default active paint (primary blue).
pub const DEFAULT_ACTIVE_COLOR: Color = Color::from_rgb(0.3, 0.6, 0.9);
/// Default inactive paint (light gray).
pub const DEFAULT_INACTIVE_COLOR: Color = Color::from_rgb(0.75, 0.75, 0.75);

/// Diameters, spacing and paints for the indicator row.
///
/// The four diameters correspond to the four [`DotState`]s; `margin` is the
/// gap between neighbouring dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub active_size: f32,
    pub inactive_size: f32,
    pub medium_size: f32,
    pub small_size: f32,
    pub margin: f32,
    pub active_color: Color,
    pub inactive_color: Color,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            active_size: 8.0,
            inactive_size: 6.0,
            medium_size: 4.5,
            small_size: 3.0,
            margin: 4.0,
            active_color: DEFAULT_ACTIVE_COLOR,
            inactive_color: DEFAULT_INACTIVE_COLOR,
        }
    }
}

impl IndicatorStyle {
    /// Diameter drawn for a dot in the given state.
    pub fn diameter(&self, state: DotState) -> f32 {
        match state {
            DotState::Active => self.active_size,
            DotState::Inactive => self.inactive_size,
            DotState::Medium => self.medium_size,
            DotState::Small => self.small_size,
        }
    }

    /// Horizontal advance for a dot: its diameter plus the margin.
    pub fn step(&self, state: DotState) -> f32 {
        self.diameter(state) + self.margin
    }

    /// One small-dot step, the unit the window's drawn offset is measured
    /// in while it slides.
    pub fn small_step(&self) -> f32 {
        self.step(DotState::Small)
    }

    /// Paint for a dot in the given state. Everything except the active
    /// dot shares the inactive paint.
    pub fn paint(&self, state: DotState) -> Color {
        match state {
            DotState::Active => self.active_color,
            _ => self.inactive_color,
        }
    }

    /// Natural canvas width for `dot_count` dots, with slack for the row
    /// sliding during a shift.
    pub fn natural_width(&self, dot_count: usize) -> f32 {
        (self.active_size + self.margin) * (dot_count as f32 + 1.0)
    }

    /// Natural canvas height: the largest diameter.
    pub fn natural_height(&self) -> f32 {
        self.active_size
    }
}

/// Parses a `#rrggbb` or `rrggbb` hex string into a color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some(Color::from_rgb(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
}
