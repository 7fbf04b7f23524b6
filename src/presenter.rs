//! Navigation state over a deck.
//!
//! The presenter knows which slide is shown, whether the notes are visible
//! and how many times the counter was pressed. It knows nothing about keys
//! or screens: backends translate their input into [`Action`]s.

use tracing::debug;

use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::slideshow::{Deck, Slide};

pub type ShouldQuit = bool;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    First,
    Last,
    /// Press the counter's button.
    Press,
    ToggleNotes,
    Quit,
}

#[derive(Debug, Default)]
pub struct Presenter {
    deck: Deck,
    /// The slide being shown.
    idx: usize,
    counter: Counter,
    notes_visible: bool,
    /// If the screen has to be drawn again.
    pub is_changed: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            is_changed: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.deck.slides().get(self.idx)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.idx
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub const fn counter(&self) -> &Counter {
        &self.counter
    }

    #[must_use]
    pub const fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    pub fn set_slide(&mut self, idx: usize) -> Result<()> {
        if idx >= self.len() {
            return Err(Error::SlideOutOfRange {
                idx,
                len: self.len(),
            });
        }
        self.idx = idx;
        self.is_changed = true;
        Ok(())
    }

    pub fn next(&mut self) {
        if self.idx + 1 < self.len() {
            self.idx += 1;
            self.is_changed = true;
        }
    }

    pub fn prev(&mut self) {
        if self.idx > 0 {
            self.idx -= 1;
            self.is_changed = true;
        }
    }

    pub fn first(&mut self) {
        if self.idx != 0 {
            self.idx = 0;
            self.is_changed = true;
        }
    }

    pub fn last(&mut self) {
        let last = self.len().saturating_sub(1);
        if self.idx != last {
            self.idx = last;
            self.is_changed = true;
        }
    }

    /// Swap the deck, keeping the current position when it still exists.
    /// If slides were removed, we fall back to the last one. If slides were
    /// added before the current one we can't know, and just keep the index.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.idx = self.idx.min(self.len().saturating_sub(1));
        self.is_changed = true;
    }

    /// Apply an action, and tell the caller if it is time to leave.
    pub fn apply(&mut self, action: Action) -> ShouldQuit {
        debug!("Action {:?} on slide {}/{}", action, self.idx, self.len());
        match action {
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::First => self.first(),
            Action::Last => self.last(),
            Action::Press => {
                self.counter.press();
                self.is_changed = true;
            }
            Action::ToggleNotes => {
                self.notes_visible = !self.notes_visible;
                self.is_changed = true;
            }
            Action::Quit => return true,
        }
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::cardapp_deck;
    use crate::slideshow::DeckBuilder;

    fn deck_of(n: usize) -> Deck {
        (0..n)
            .fold(DeckBuilder::new("n"), |b, i| {
                b.slide(|s| s.title(format!("slide {i}")))
            })
            .build()
    }

    #[test]
    fn test_navigation_clamps() {
        let mut p = Presenter::new(deck_of(3));
        p.prev();
        assert_eq!(p.index(), 0);
        p.next();
        p.next();
        p.next();
        assert_eq!(p.index(), 2);
        p.first();
        assert_eq!(p.index(), 0);
        p.last();
        assert_eq!(p.index(), 2);
    }

    #[test]
    fn test_is_changed() {
        let mut p = Presenter::new(deck_of(2));
        assert!(p.is_changed);
        p.is_changed = false;
        p.prev();
        assert!(!p.is_changed);
        p.next();
        assert!(p.is_changed);
        p.is_changed = false;
        p.last();
        assert!(!p.is_changed);
    }

    #[test]
    fn test_set_slide() {
        let mut p = Presenter::new(deck_of(2));
        assert!(p.set_slide(1).is_ok());
        assert_eq!(p.index(), 1);
        assert!(matches!(
            p.set_slide(2),
            Err(Error::SlideOutOfRange { idx: 2, len: 2 })
        ));
        assert_eq!(p.index(), 1);
    }

    #[test]
    fn test_set_deck_clamps_index() {
        let mut p = Presenter::new(deck_of(5));
        p.last();
        p.set_deck(deck_of(2));
        assert_eq!(p.index(), 1);
        p.set_deck(deck_of(4));
        assert_eq!(p.index(), 1);
        p.set_deck(deck_of(0));
        assert_eq!(p.index(), 0);
        assert!(p.current().is_none());
    }

    #[test]
    fn test_empty_deck() {
        let mut p = Presenter::new(deck_of(0));
        assert!(p.is_empty());
        p.next();
        p.prev();
        p.last();
        assert_eq!(p.index(), 0);
        assert!(p.current().is_none());
    }

    #[test]
    fn test_actions() {
        let mut p = Presenter::new(cardapp_deck());
        for _ in 0..3 {
            assert!(!p.apply(Action::Press));
        }
        assert_eq!(p.counter().label(), "Press me - 3");

        assert!(!p.notes_visible());
        p.apply(Action::ToggleNotes);
        assert!(p.notes_visible());

        p.apply(Action::Last);
        assert_eq!(p.index(), 7);
        p.apply(Action::Prev);
        assert_eq!(p.index(), 6);
        p.apply(Action::First);
        p.apply(Action::Next);
        assert_eq!(p.index(), 1);

        assert!(p.apply(Action::Quit));
    }

    #[test]
    fn test_counter_survives_reload() {
        let mut p = Presenter::new(cardapp_deck());
        p.apply(Action::Press);
        p.set_deck(deck_of(1));
        assert_eq!(p.counter().count(), 1);
    }
}
