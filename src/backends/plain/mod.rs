//! A non interactive backend: print every slide as text, then quit.

use std::io::Write;

use crate::error::Result;
use crate::layout::layout_slide;
use crate::presenter::{Presenter, ShouldQuit};
use crate::slideshow::Deck;
use crate::theme::Theme;

/// Columns used to lay the slides out.
pub const WIDTH: usize = 80;

/// The backend, writing to `W`.
pub struct Backend<W: Write> {
    out: W,
}

impl<W: Write> Backend<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> super::DeckBackend for Backend<W> {
    fn get_context(&mut self) -> Result<Box<dyn super::DeckContext + '_>> {
        Ok(Box::new(Context {
            out: &mut self.out,
            presenter: Presenter::default(),
            printed: false,
        }))
    }
}

/// The live data: the deck, and whether it was printed already.
pub struct Context<'backend, W: Write> {
    out: &'backend mut W,
    presenter: Presenter,
    printed: bool,
}

impl<W: Write> Context<'_, W> {
    fn print_deck(&mut self, theme: &Theme) -> Result<()> {
        let deck = self.presenter.deck();
        let len = deck.len();
        for (i, slide) in deck.slides().iter().enumerate() {
            writeln!(self.out, "--- {}/{} ---", i + 1, len)?;
            for line in layout_slide(slide, theme, WIDTH) {
                let pad = line.padding(WIDTH);
                writeln!(self.out, "{:pad$}{}", "", line.text)?;
            }
            if let Some(comment) = slide.comment() {
                writeln!(self.out, "notes: {comment}")?;
            }
        }
        writeln!(self.out, "{}", self.presenter.counter().label())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> super::DeckContext for Context<'_, W> {
    fn set_deck(&mut self, deck: Deck) {
        self.presenter.set_deck(deck);
        self.printed = false;
    }

    fn manage_inputs(&mut self) -> Result<ShouldQuit> {
        Ok(self.printed)
    }

    fn render(&mut self, theme: &Theme) -> Result<()> {
        if !self.printed {
            self.print_deck(theme)?;
            self.printed = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backends::{DeckBackend, DeckContext};
    use crate::content::cardapp_deck;
    use crate::slideshow::{Alignment, DeckBuilder};

    fn run(deck: Deck) -> String {
        let mut backend = Backend::new(Vec::new());
        {
            let mut ctx = backend.get_context().unwrap();
            ctx.set_deck(deck);
            let theme = Theme::cardapp();
            let mut frames = 0;
            while !ctx.manage_inputs().unwrap() {
                ctx.render(&theme).unwrap();
                frames += 1;
                assert!(frames < 3, "the plain backend must quit");
            }
        }
        String::from_utf8(backend.into_inner()).unwrap()
    }

    #[test]
    fn test_prints_the_whole_deck() {
        let out = run(cardapp_deck());
        assert!(out.starts_with(
            "--- 1/8 ---\nDesign patterns in CardApp\n--- 2/8 ---\n"
        ));
        assert!(out.contains("--- 8/8 ---"));
        assert!(out.contains("notes: Introduce yourself first.\n"));
        assert!(out.ends_with("Press me - 0\n"));
    }

    #[test]
    fn test_alignment_is_padded() {
        let deck = DeckBuilder::new("c")
            .slide(|s| s.align(Alignment::Right).title("end"))
            .build();
        let out = run(deck);
        let expected = format!("{}end\n", " ".repeat(WIDTH - 3));
        assert!(out.contains(&expected));
    }

    #[test]
    fn test_empty_deck() {
        let out = run(Deck::default());
        assert_eq!(out, "Press me - 0\n");
    }
}
