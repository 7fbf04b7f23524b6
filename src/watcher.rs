//! Reload a deck file whenever it changes on disk.
//!
//! Editors often save by writing a temporary file and renaming it over the
//! original, which replaces the watched inode. The parent directory is
//! watched instead, and only events naming the deck file are kept.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{error, info, trace, warn};

use crate::error::{Error, Result};
use crate::loader;
use crate::slideshow::Deck;

/// Keeps the watcher alive, and hands out reloaded decks.
pub struct DeckWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<Deck>,
}

/// Does this event say something about `path`?
fn concerns(event: &Event, path: &Path) -> bool {
    !matches!(event.kind, EventKind::Access(_))
        && event.paths.iter().any(|p| p == path)
}

impl DeckWatcher {
    /// Watch `path`, and send a freshly parsed deck every time it changes.
    /// Both threads sleep on blocking `recv` calls until the watcher wakes
    /// them up. A deck that does not parse is reported and skipped.
    pub fn new(path: &Path) -> Result<Self> {
        let path = path.canonicalize()?;
        let parent = path
            .parent()
            .ok_or_else(|| Error::NoParentDir(path.clone()))?
            .to_path_buf();

        // 1. Send decks from the loader to the graphical loop.
        let (send_deck_tx, send_deck_rx) = channel();
        // 2. Ask the loader to read the deck again.
        let (request_update_tx, request_update_rx) = channel::<()>();
        // 3. Notify a change in the directory.
        let (watcher_tx, watcher_rx) = channel();

        let mut watcher = notify::recommended_watcher(watcher_tx)?;
        watcher.watch(&parent, RecursiveMode::NonRecursive)?;

        let load_path = path.clone();
        thread::spawn(move || {
            while request_update_rx.recv().is_ok() {
                match loader::load_deck(&load_path) {
                    Err(e) => error!("Error when loading {:?}: {}", &load_path, e),
                    Ok(deck) => {
                        info!("Reloaded {} slides", deck.len());
                        if send_deck_tx.send(deck).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        thread::spawn(move || {
            while let Ok(event) = watcher_rx.recv() {
                let event: Event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("Watcher error: {}", e);
                        continue;
                    }
                };
                if !concerns(&event, &path) {
                    continue;
                }
                trace!("{:?}", event);
                if request_update_tx.send(()).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            rx: send_deck_rx,
        })
    }

    /// The latest reloaded deck, if any arrived since the last call.
    #[must_use]
    pub fn try_recv(&self) -> Option<Deck> {
        self.rx.try_iter().last()
    }

    /// Wait up to `timeout` for the next reloaded deck.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Deck> {
        match self.rx.recv_timeout(timeout) {
            Ok(deck) => Some(deck),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {
                None
            }
        }
    }
}
