//! Read decks and themes from JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::slideshow::Deck;
use crate::theme::Theme;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if path.exists() && !path.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

/// Parse the file, and return the deck as a result.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let deck: Deck = load_json(path)?;
    debug!("Loaded {} slides from {}", deck.len(), path.display());
    Ok(deck)
}

pub fn load_theme(path: &Path) -> Result<Theme> {
    load_json(path)
}

/// Pretty printed JSON, the same format the loaders read.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
