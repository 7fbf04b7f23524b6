#[cfg(feature = "cterm")]
pub mod crossterm;
pub mod plain;

use crate::error::{Error, Result};
use crate::presenter::ShouldQuit;
use crate::slideshow::Deck;
use crate::theme::Theme;

pub trait DeckBackend {
    fn get_context(&mut self) -> Result<Box<dyn DeckContext + '_>>;
}

/// The definition of a backend.
/// It has to be able to update the deck, manage inputs, and render.
pub trait DeckContext {
    /// Replace the deck being shown.
    fn set_deck(&mut self, deck: Deck);
    /// React to user's input.
    fn manage_inputs(&mut self) -> Result<ShouldQuit>;
    /// Render to screen, with the given theme.
    fn render(&mut self, theme: &Theme) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backends {
    #[cfg(feature = "cterm")]
    Crossterm,
    Plain,
}

impl Default for Backends {
    fn default() -> Self {
        #[cfg(feature = "cterm")]
        {
            Self::Crossterm
        }
        #[cfg(not(feature = "cterm"))]
        {
            Self::Plain
        }
    }
}

fn match_try(value: &str) -> Result<Backends> {
    match value.to_lowercase().as_str() {
        #[cfg(feature = "cterm")]
        "crossterm" => Ok(Backends::Crossterm),
        "plain" => Ok(Backends::Plain),
        _ => Err(Error::UnknownBackend(value.to_owned())),
    }
}

pub fn get_backend(which: Backends) -> Result<Box<dyn DeckBackend>> {
    let backend: Box<dyn DeckBackend> = match which {
        #[cfg(feature = "cterm")]
        Backends::Crossterm => Box::new(crossterm::Backend::new()?),
        Backends::Plain => Box::new(plain::Backend::new(std::io::stdout())),
    };
    Ok(backend)
}

impl TryFrom<String> for Backends {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        match_try(value.as_str())
    }
}

impl TryFrom<&str> for Backends {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self> {
        match_try(value)
    }
}
