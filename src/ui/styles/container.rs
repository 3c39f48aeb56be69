// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface, derived from the active theme background.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Frame around one image tile. The main image gets the brand border.
pub fn tile(is_main: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = theme.extended_palette().background.weak.color;
        let (color, width) = if is_main {
            (palette::PRIMARY_500, 2.0)
        } else {
            (palette::GRAY_400, 1.0)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color,
                width,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Pill badge marking the main image.
pub fn main_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder area for previews that are not drawable yet.
pub fn preview_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_700
        })),
        text_color: Some(palette::GRAY_100),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
