//! Configuration constants for the number input UI.

use bevy::prelude::*;
use bevy::ui::Val;

/// Configuration for number input layout and styling.
#[derive(Resource, Clone)]
pub struct NumberInputConfig {
    // Layout
    /// Minimum width of the text field.
    pub field_min_width: Val,
    /// Padding inside the text field.
    pub field_padding: UiRect,
    /// Gap between label, field, and steppers.
    pub label_gap: Val,

    // Typography
    /// Font size for the field and label text.
    pub body_font_size: f32,
    /// Font size for stepper glyphs.
    pub small_font_size: f32,

    // Colors (for non-themed elements)
    /// Field border color.
    pub border_color: Color,
    /// Field background color.
    pub field_background: Color,
    /// Field text color.
    pub text_color: Color,
    /// Label text color.
    pub label_color: Color,
}

impl Default for NumberInputConfig {
    fn default() -> Self {
        Self {
            // Layout
            field_min_width: Val::Px(60.0),
            field_padding: UiRect::horizontal(Val::Px(4.0)),
            label_gap: Val::Px(8.0),

            // Typography
            body_font_size: 13.0,
            small_font_size: 11.0,

            // Colors
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            field_background: Color::srgba(0.15, 0.15, 0.15, 1.0),
            text_color: Color::srgba(0.9, 0.9, 0.6, 1.0),
            label_color: Color::srgba(0.6, 0.6, 0.6, 1.0),
        }
    }
}
