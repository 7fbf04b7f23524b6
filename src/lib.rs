#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

/*!
# Cardslides: the CardApp design patterns talk.

The whole talk lives in the binary: the slides are plain Rust values built
once at startup, and the theme is a plain record handed to the presenter
every time something is drawn.

The presenter itself is deliberately small. A backend owns the screen, a
`Presenter` owns the navigation state, and `layout` turns one slide into
styled lines of text that any backend can print.

If you prefer editing slides without recompiling, dump the built-in deck
with `--dump`, edit the JSON, and run with `--deck`: the file is watched and
the slides are reloaded on every save.
*/

pub mod backends;
pub mod content;
pub mod counter;
pub mod error;
pub mod layout;
pub mod loader;
pub mod presenter;
pub mod slideshow;
pub mod theme;
pub mod watcher;

pub use error::{Error, Result};
