//! The deck definition.
//!
//! A [`Deck`] is a strict tree: an ordered list of [`Slide`]s, each one an
//! ordered list of [`Content`] nodes. Nothing in here can be changed once it
//! has been built, the only way to get a deck is through [`DeckBuilder`] (or
//! by deserializing one).

use serde::{Deserialize, Serialize};

use crate::theme::Region;

/// A plain RGBA color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Self {
            r: c.0,
            g: c.1,
            b: c.2,
            a: c.3,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(c: (u8, u8, u8)) -> Self {
        (c.0, c.1, c.2, 255).into()
    }
}

/// Horizontal alignment of the content of a slide.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single unit of slide content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Title(String),
    Subtitle(String),
    BulletList(Vec<String>),
    Paragraph(String),
    /// A source listing. `highlighted` holds 1-based line numbers.
    CodeBlock {
        language: String,
        source: String,
        highlighted: Vec<usize>,
    },
    /// Opaque lines, styled as the given theme region.
    Raw { lines: Vec<String>, region: Region },
}

/// The representation of a single slide.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    content: Vec<Content>,
    alignment: Option<Alignment>,
    /// Notes for the presenter, never shown to the audience.
    comment: Option<String>,
}

impl Slide {
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    #[must_use]
    pub const fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// The whole presentation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Append-only builder for a [`Deck`].
#[derive(Debug)]
pub struct DeckBuilder {
    deck: Deck,
}

impl DeckBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            deck: Deck {
                title: title.into(),
                slides: vec![],
            },
        }
    }

    /// Append a slide, filled in by `f`.
    #[must_use]
    pub fn slide<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SlideBuilder) -> SlideBuilder,
    {
        let slide = f(SlideBuilder::default()).build();
        self.deck.slides.push(slide);
        self
    }

    #[must_use]
    pub fn build(self) -> Deck {
        self.deck
    }
}

/// Append-only builder for a [`Slide`].
#[derive(Debug, Default)]
pub struct SlideBuilder {
    slide: Slide,
}

impl SlideBuilder {
    #[must_use]
    pub fn title(self, text: impl Into<String>) -> Self {
        self.push(Content::Title(text.into()))
    }

    #[must_use]
    pub fn subtitle(self, text: impl Into<String>) -> Self {
        self.push(Content::Subtitle(text.into()))
    }

    #[must_use]
    pub fn bullets<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Content::BulletList(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    #[must_use]
    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.push(Content::Paragraph(text.into()))
    }

    #[must_use]
    pub fn code(
        self,
        language: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.highlighted_code(language, source, std::iter::empty())
    }

    #[must_use]
    pub fn highlighted_code<I>(
        self,
        language: impl Into<String>,
        source: impl Into<String>,
        highlighted: I,
    ) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.push(Content::CodeBlock {
            language: language.into(),
            source: source.into(),
            highlighted: highlighted.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn raw<I, S>(self, region: Region, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Content::Raw {
            lines: lines.into_iter().map(Into::into).collect(),
            region,
        })
    }

    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.slide.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.slide.comment = Some(text.into());
        self
    }

    fn push(mut self, content: Content) -> Self {
        self.slide.content.push(content);
        self
    }

    #[must_use]
    pub fn build(self) -> Slide {
        self.slide
    }
}
