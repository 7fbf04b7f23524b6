//! Turn a slide into lines of styled text.
//!
//! Backends only have to know how to print a [`Line`]: everything about
//! wrapping, bullets, spacing and which theme color goes where is decided
//! here, once, for all of them.
//!
//! Widths are counted in `char`s: every char is assumed to take one terminal
//! column. Wide glyphs (CJK, most emoji) take two and will overflow.

use crate::slideshow::{Alignment, Color, Content, Slide};
use crate::theme::{Region, TextStyle, Theme, Weight};

const BULLET: &str = "• ";
const BULLET_INDENT: &str = "  ";

/// How a line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub fg: Color,
    /// `None` means the slide background.
    pub bg: Option<Color>,
    pub bold: bool,
}

impl LineStyle {
    fn from_text(style: &TextStyle, bg: Option<Color>) -> Self {
        Self {
            fg: style.color,
            bg,
            bold: matches!(style.font.weight, Weight::Bold),
        }
    }
}

/// One row of text, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
    pub alignment: Alignment,
}

impl Line {
    /// Number of columns to leave on the left to honor the alignment.
    /// One char counts as one column.
    #[must_use]
    pub fn padding(&self, width: usize) -> usize {
        let len = self.text.chars().count();
        let free = width.saturating_sub(len);
        match self.alignment {
            Alignment::Left => 0,
            Alignment::Center => free / 2,
            Alignment::Right => free,
        }
    }
}

/// Greedy word wrap on `width` chars. Words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = vec![];
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        // Chop words that can never fit.
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Builder<'t> {
    theme: &'t Theme,
    alignment: Alignment,
    width: usize,
    lines: Vec<Line>,
}

impl Builder<'_> {
    fn push(&mut self, text: String, region: Region, alignment: Alignment) {
        let style = LineStyle::from_text(
            self.theme.style(region),
            self.theme.region_background(region),
        );
        self.lines.push(Line {
            text,
            style,
            alignment,
        });
    }

    fn push_wrapped(&mut self, text: &str, region: Region) {
        for row in wrap(text, self.width) {
            self.push(row, region, self.alignment);
        }
    }

    fn blank(&mut self) {
        self.push(String::new(), Region::Body, self.alignment);
    }

    fn bullets(&mut self, items: &[String]) {
        let inner = self.width.saturating_sub(BULLET.chars().count());
        for item in items {
            for (i, row) in wrap(item, inner).into_iter().enumerate() {
                let prefix = if i == 0 { BULLET } else { BULLET_INDENT };
                self.push(format!("{prefix}{row}"), Region::Body, self.alignment);
            }
        }
    }

    fn code(&mut self, language: &str, source: &str, highlighted: &[usize]) {
        self.push(format!("[{language}]"), Region::Subtitle, Alignment::Left);
        for (i, row) in source.lines().enumerate() {
            let region = if highlighted.contains(&(i + 1)) {
                Region::HighlightedCode
            } else {
                Region::Code
            };
            self.push(row.to_owned(), region, Alignment::Left);
        }
    }

    fn content(&mut self, content: &Content) {
        match content {
            Content::Title(text) => self.push_wrapped(text, Region::Title),
            Content::Subtitle(text) => self.push_wrapped(text, Region::Subtitle),
            Content::Paragraph(text) => self.push_wrapped(text, Region::Body),
            Content::BulletList(items) => self.bullets(items),
            Content::CodeBlock {
                language,
                source,
                highlighted,
            } => self.code(language, source, highlighted),
            Content::Raw { lines, region } => {
                for row in lines {
                    self.push(row.clone(), *region, self.alignment);
                }
            }
        }
    }
}

/// Lay a slide out for a screen `width` columns wide.
#[must_use]
pub fn layout_slide(slide: &Slide, theme: &Theme, width: usize) -> Vec<Line> {
    let mut builder = Builder {
        theme,
        alignment: slide.alignment().unwrap_or_default(),
        width: width.max(1),
        lines: vec![],
    };
    for (i, content) in slide.content().iter().enumerate() {
        if i > 0 {
            builder.blank();
        }
        builder.content(content);
    }
    builder.lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::slideshow::{DeckBuilder, SlideBuilder};

    fn one_slide(f: impl FnOnce(SlideBuilder) -> SlideBuilder) -> Slide {
        DeckBuilder::new("t").slide(f).build().slides()[0].clone()
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap("  spaced   out  ", 20), vec!["spaced out"]);
        assert_eq!(wrap("", 5), vec![""]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("x abcdefgh", 3), vec!["x", "abc", "def", "gh"]);
        assert_eq!(wrap("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        assert_eq!(wrap("héllo wörld", 5), vec!["héllo", "wörld"]);
        let slide = one_slide(|s| s.align(Alignment::Right).title("ééé"));
        let lines = layout_slide(&slide, &Theme::cardapp(), 10);
        assert_eq!(lines[0].padding(10), 7);
    }

    #[test]
    fn test_blank_between_nodes_only() {
        let slide = one_slide(|s| s.title("Title").paragraph("Body"));
        let lines = layout_slide(&slide, &Theme::cardapp(), 80);
        assert_eq!(texts(&lines), vec!["Title", "", "Body"]);
    }

    #[test]
    fn test_styles() {
        let theme = Theme::cardapp();
        let slide = one_slide(|s| s.title("T").subtitle("S").paragraph("B"));
        let lines = layout_slide(&slide, &theme, 80);

        assert_eq!(lines[0].style.fg, theme.title.color);
        assert!(lines[0].style.bold);
        assert_eq!(lines[2].style.fg, theme.subtitle.color);
        assert!(!lines[2].style.bold);
        assert_eq!(lines[4].style.fg, theme.body.color);
        assert_eq!(lines[4].style.bg, None);
    }

    #[test]
    fn test_bullets() {
        let slide = one_slide(|s| s.bullets(["one two three", "four"]));
        let lines = layout_slide(&slide, &Theme::cardapp(), 9);
        assert_eq!(
            texts(&lines),
            vec!["• one two", "  three", "• four"]
        );
    }

    #[test]
    fn test_code_highlight_and_no_wrap() {
        let theme = Theme::cardapp();
        let slide = one_slide(|s| {
            s.align(Alignment::Center).highlighted_code(
                "rust",
                "fn main() {\n    println!(\"a very long line\");\n}",
                [2],
            )
        });
        let lines = layout_slide(&slide, &theme, 10);

        assert_eq!(
            texts(&lines),
            vec![
                "[rust]",
                "fn main() {",
                "    println!(\"a very long line\");",
                "}"
            ]
        );
        assert!(lines.iter().all(|l| l.alignment == Alignment::Left));
        assert_eq!(lines[1].style.fg, theme.code.color);
        assert_eq!(lines[1].style.bg, None);
        assert_eq!(lines[2].style.fg, theme.highlighted_code.foreground.color);
        assert_eq!(lines[2].style.bg, Some(theme.highlighted_code.background));
        assert!(lines[2].style.bold);
    }

    #[test]
    fn test_raw_uses_region() {
        let theme = Theme::cardapp();
        let slide = one_slide(|s| s.raw(Region::Title, ["a very long raw line"]));
        let lines = layout_slide(&slide, &theme, 4);
        assert_eq!(texts(&lines), vec!["a very long raw line"]);
        assert_eq!(lines[0].style.fg, theme.title.color);
    }

    #[test]
    fn test_alignment_padding() {
        let slide = one_slide(|s| s.align(Alignment::Right).title("abcd"));
        let lines = layout_slide(&slide, &Theme::cardapp(), 10);
        assert_eq!(lines[0].padding(10), 6);

        let slide = one_slide(|s| s.align(Alignment::Center).title("abcd"));
        let lines = layout_slide(&slide, &Theme::cardapp(), 10);
        assert_eq!(lines[0].padding(10), 3);
        // Never negative.
        assert_eq!(lines[0].padding(2), 0);

        let slide = one_slide(|s| s.title("abcd"));
        let lines = layout_slide(&slide, &Theme::cardapp(), 10);
        assert_eq!(lines[0].padding(10), 0);
    }

    #[test]
    fn test_empty_slide() {
        let slide = one_slide(|s| s);
        assert!(layout_slide(&slide, &Theme::cardapp(), 80).is_empty());
    }
}
