//! Colors and fonts applied uniformly to every slide.
//!
//! The theme is a plain value: build it once with [`Theme::cardapp`] (or load
//! it from a file) and pass it by reference to whoever draws.

use serde::{Deserialize, Serialize};

use crate::slideshow::Color;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Medium,
    Bold,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    /// Point size.
    pub size: f32,
    pub weight: Weight,
}

impl Font {
    fn new(family: &str, size: f32, weight: Weight) -> Self {
        Self {
            family: family.to_owned(),
            size,
            weight,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
}

/// Style of the highlighted lines in a code block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HighlightStyle {
    pub background: Color,
    pub foreground: TextStyle,
}

/// A named area of a slide, used to pick the style of raw content.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Region {
    Title,
    Subtitle,
    Body,
    Code,
    HighlightedCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub body: TextStyle,
    pub code: TextStyle,
    pub highlighted_code: HighlightStyle,
}

impl Theme {
    /// The theme of the CardApp talk.
    #[must_use]
    pub fn cardapp() -> Self {
        Self {
            background: (22, 24, 33).into(),
            title: TextStyle {
                color: (255, 204, 0).into(),
                font: Font::new("Avenir Next", 64.0, Weight::Bold),
            },
            subtitle: TextStyle {
                color: (142, 142, 147).into(),
                font: Font::new("Avenir Next", 40.0, Weight::Medium),
            },
            body: TextStyle {
                color: (242, 242, 247).into(),
                font: Font::new("Avenir Next", 32.0, Weight::Regular),
            },
            code: TextStyle {
                color: (191, 90, 242).into(),
                font: Font::new("Menlo", 26.0, Weight::Regular),
            },
            highlighted_code: HighlightStyle {
                background: (58, 58, 60).into(),
                foreground: TextStyle {
                    color: (255, 255, 255).into(),
                    font: Font::new("Menlo", 26.0, Weight::Bold),
                },
            },
        }
    }

    /// The text style used for a region.
    #[must_use]
    pub const fn style(&self, region: Region) -> &TextStyle {
        match region {
            Region::Title => &self.title,
            Region::Subtitle => &self.subtitle,
            Region::Body => &self.body,
            Region::Code => &self.code,
            Region::HighlightedCode => &self.highlighted_code.foreground,
        }
    }

    /// The background of a region, when it differs from the slide one.
    #[must_use]
    pub const fn region_background(&self, region: Region) -> Option<Color> {
        match region {
            Region::HighlightedCode => Some(self.highlighted_code.background),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::cardapp()
    }
}
