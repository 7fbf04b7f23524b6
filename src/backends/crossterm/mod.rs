//! The provided terminal backend.
use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{
        Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, error, trace};

use crate::error::Result;
use crate::layout::{layout_slide, Line, LineStyle};
use crate::presenter::{Action, Presenter, ShouldQuit};
use crate::slideshow::{Color, Deck};
use crate::theme::Theme;

/// Columns left empty on each side of the slide.
const MARGIN: u16 = 2;

/// The backend. Owns the terminal: raw mode and the alternate screen are
/// enabled on creation and restored on drop.
pub struct Backend {}

impl super::DeckBackend for Backend {
    fn get_context(&mut self) -> Result<Box<dyn super::DeckContext + '_>> {
        let ctx = self.internal_get_context()?;
        Ok(Box::new(ctx))
    }
}

/// The context, which contains the live data.
/// This structure has to be used to update the slides in the event loop, or
/// manage keypresses, and so on.
pub struct Context<'backend, W: Write = Stdout> {
    presenter: Presenter,
    out: W,
    /// Terminal size, columns and rows.
    size: (u16, u16),
    _lifetime: std::marker::PhantomData<&'backend ()>,
}

/// Switch to the alternate screen. When that fails, `on_error` runs before
/// the error is returned, since no `Backend` exists yet to clean up on drop.
fn enter_screen<W: Write>(out: &mut W, on_error: impl FnOnce()) -> Result<()> {
    if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
        on_error();
        return Err(e.into());
    }
    Ok(())
}

fn restore_raw_mode() {
    match terminal::disable_raw_mode() {
        Ok(()) => trace!("raw mode disabled."),
        Err(e) => error!("Unable to disable raw mode: {:?}", e),
    }
}

impl Backend {
    /// Create a new backend.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        enter_screen(&mut std::io::stdout(), restore_raw_mode)?;
        Ok(Self {})
    }

    /// Get the runnable context.
    fn internal_get_context(&self) -> Result<Context> {
        Ok(Context::new(std::io::stdout(), terminal::size()?))
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = execute!(stdout, Show, LeaveAlternateScreen) {
            error!("Unable to leave the alternate screen: {:?}", e);
        }
        restore_raw_mode();
    }
}

/// Map a key to what the user meant.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::Quit
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('n' | ' ') | KeyCode::Right | KeyCode::PageDown => {
            Action::Next
        }
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Action::Prev,
        KeyCode::Char('g') | KeyCode::Home => Action::First,
        KeyCode::Char('G') | KeyCode::End => Action::Last,
        KeyCode::Char('c') | KeyCode::Enter => Action::Press,
        KeyCode::Char('h') => Action::ToggleNotes,
        _ => return None,
    };
    Some(action)
}

const fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

impl<W: Write> Context<'_, W> {
    fn new(out: W, size: (u16, u16)) -> Self {
        Self {
            presenter: Presenter::default(),
            out,
            size,
            _lifetime: std::marker::PhantomData,
        }
    }

    fn draw_line(
        &mut self,
        row: u16,
        line: &Line,
        width: usize,
        background: Color,
    ) -> Result<()> {
        let text: String = line.text.chars().take(width).collect();
        let pad = u16::try_from(line.padding(width)).unwrap_or(0);
        self.draw_text(MARGIN + pad, row, &text, line.style, background)
    }

    fn draw_text(
        &mut self,
        column: u16,
        row: u16,
        text: &str,
        style: LineStyle,
        background: Color,
    ) -> Result<()> {
        queue!(
            self.out,
            MoveTo(column, row),
            SetBackgroundColor(term_color(style.bg.unwrap_or(background))),
            SetForegroundColor(term_color(style.fg))
        )?;
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn draw(&mut self, theme: &Theme) -> Result<()> {
        let (cols, rows) = self.size;
        let width = usize::from(cols.saturating_sub(2 * MARGIN)).max(1);
        let background = theme.background;

        queue!(
            self.out,
            SetBackgroundColor(term_color(background)),
            Clear(ClearType::All)
        )?;

        // The last row is the status line, the one above it the notes.
        let body_rows = rows.saturating_sub(3);
        let lines = self
            .presenter
            .current()
            .map(|slide| layout_slide(slide, theme, width))
            .unwrap_or_default();
        if lines.len() > usize::from(body_rows) {
            debug!(
                "Slide {} needs {} rows, only {} available",
                self.presenter.index() + 1,
                lines.len(),
                body_rows
            );
        }
        for (row, line) in (1..=body_rows).zip(lines.iter()) {
            self.draw_line(row, line, width, background)?;
        }

        let dim = LineStyle {
            fg: theme.subtitle.color,
            bg: None,
            bold: false,
        };
        if self.presenter.is_empty() {
            self.draw_text(MARGIN, 1, "No slides.", dim, background)?;
        }
        if self.presenter.notes_visible() {
            let notes = self
                .presenter
                .current()
                .and_then(|slide| slide.comment())
                .unwrap_or("(no notes)");
            let notes: String =
                format!("notes: {notes}").chars().take(width).collect();
            self.draw_text(
                MARGIN,
                rows.saturating_sub(2),
                &notes,
                dim,
                background,
            )?;
        }

        let status = format!(
            "{}  {}/{}  {}",
            self.presenter.deck().title(),
            self.presenter.index() + usize::from(!self.presenter.is_empty()),
            self.presenter.len(),
            self.presenter.counter().label()
        );
        let status: String = status.chars().take(width).collect();
        self.draw_text(MARGIN, rows.saturating_sub(1), &status, dim, background)?;

        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> super::DeckContext for Context<'_, W> {
    fn set_deck(&mut self, deck: Deck) {
        self.presenter.set_deck(deck);
    }

    /// Manage the incoming events.
    fn manage_inputs(&mut self) -> Result<ShouldQuit> {
        while poll(Duration::ZERO)? {
            let evt = read()?;
            trace!("{:?}", evt);
            match evt {
                Event::Key(key) => {
                    if let Some(action) = action_for(key) {
                        if self.presenter.apply(action) {
                            return Ok(true);
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    self.size = (cols, rows);
                    self.presenter.is_changed = true;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    /// Render the current slide, if anything changed.
    fn render(&mut self, theme: &Theme) -> Result<()> {
        if self.presenter.is_changed {
            self.draw(theme)?;
            self.presenter.is_changed = false;
        }
        Ok(())
    }
}
