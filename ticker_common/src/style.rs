//! Style table for the terminal panel.
//!
//! Each [`Style`] maps to one `crossterm` [`ContentStyle`]; [`Palette`] applies
//! it to text, or leaves the text bare when colour is disabled.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Text styles used by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Terminal default attributes.
    Reset,
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Bold cyan foreground.
    Cyan,
    /// Bold green foreground.
    Green,
    /// Bold red foreground.
    Red,
    /// Bold yellow foreground.
    Yellow,
    /// Dark gray foreground.
    Gray,
}

impl Style {
    /// The `crossterm` style for this variant.
    pub fn content_style(self) -> ContentStyle {
        match self {
            Style::Reset => styled(None, None),
            Style::Bold => styled(None, Some(Attribute::Bold)),
            Style::Dim => styled(None, Some(Attribute::Dim)),
            Style::Cyan => styled(Some(Color::Cyan), Some(Attribute::Bold)),
            Style::Green => styled(Some(Color::Green), Some(Attribute::Bold)),
            Style::Red => styled(Some(Color::Red), Some(Attribute::Bold)),
            Style::Yellow => styled(Some(Color::Yellow), Some(Attribute::Bold)),
            Style::Gray => styled(Some(Color::DarkGrey), None),
        }
    }
}

fn styled(foreground: Option<Color>, attribute: Option<Attribute>) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = foreground;
    if let Some(attribute) = attribute {
        style.attributes.set(attribute);
    }
    style
}

/// Applies styles to text, or nothing at all when colour is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette emitting real styling.
    pub const COLOR: Palette = Palette { enabled: true };
    /// Palette that strips all styling.
    pub const PLAIN: Palette = Palette { enabled: false };

    /// Build a palette; `enabled = false` renders every style as bare text.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// `true` if styles are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `text` wrapped in the escape sequences of `style`, followed by a reset.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled && style != Style::Reset {
            style.content_style().apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::COLOR
    }
}
