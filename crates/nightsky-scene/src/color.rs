//! Colors used to paint the night sky.

use ratatui::style::Color;

/// Sky background.
pub const SKY: Color = Color::Rgb(0, 0, 0);

/// Bright foreground stars.
pub const NEAR_STAR: Color = Color::Rgb(255, 255, 255);

/// Dim background stars.
pub const FAR_STAR: Color = Color::Rgb(64, 64, 64);

/// Meteor trail.
pub const METEOR_TRAIL: Color = Color::Rgb(128, 128, 128);

/// Meteor head.
pub const METEOR_HEAD: Color = Color::Rgb(255, 200, 0);
