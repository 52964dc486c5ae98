//! Styles for the few non-art lines the CLI prints.
//!
//! Named ANSI colors and attributes only, so the user's palette applies.

use crossterm::style::{Attribute, Color, ContentStyle};

pub fn header() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..Default::default()
    }
}

pub fn threshold() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        ..Default::default()
    }
}
