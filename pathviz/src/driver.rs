//! Crossterm terminal driver.
//!
//! [`Terminal`] owns the raw-mode / alternate-screen session, turns crossterm
//! events into [`Input`]s and flushes [`Frame`] diffs to stdout.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::Point;

use crate::canvas::Frame;
use crate::style::{AttrMask, Color};

/// Keys the visualizer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    ArrowLeft,
    ArrowRight,
    /// Ctrl-C, reported separately so it is never mistaken for `c`.
    Interrupt,
}

/// Mouse buttons the visualizer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Main,
    Secondary,
}

/// A terminal input event, in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Button press or drag at `pos`.
    Mouse { button: Button, pos: Point },
    Resize { width: i32, height: i32 },
}

impl Input {
    /// Whether this input asks the program to exit.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Self::Key(Key::Char('q') | Key::Escape | Key::Interrupt)
        )
    }
}

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyEvent`] to a [`Key`].
fn to_key(ev: KeyEvent) -> Option<Key> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    match ev.code {
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Maps a crossterm [`Event`] to an [`Input`].
fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(k) => to_key(k).map(Input::Key),
        Event::Mouse(me) => {
            let button = match me.kind {
                MouseEventKind::Down(b) | MouseEventKind::Drag(b) => b,
                _ => return None,
            };
            let button = match button {
                MouseButton::Left => Button::Main,
                MouseButton::Right => Button::Secondary,
                MouseButton::Middle => return None,
            };
            Some(Input::Mouse {
                button,
                pos: Point::new(me.row as i32, me.column as i32),
            })
        }
        Event::Resize(w, h) => Some(Input::Resize {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A raw-mode terminal session.
pub struct Terminal {
    mouse_enabled: bool,
    active: bool,
}

impl Terminal {
    /// Create a driver. Nothing happens to the terminal until
    /// [`init`](Terminal::init).
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()?;
        log::debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(i32, i32)> {
        let (w, h) = terminal::size()?;
        Ok((w as i32, h as i32))
    }

    /// Wait up to `timeout` for one input. Events the visualizer ignores
    /// yield `Ok(None)`.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_input(event::read()?))
    }

    /// Drain pending input without blocking and report whether any of it
    /// asked to quit. Everything else is dropped.
    pub fn quit_pending(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if to_input(event::read()?).is_some_and(|i| i.is_quit()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Write a diff frame to the screen.
    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout();

        for fc in &frame.cells {
            let p = fc.pos;
            let glyph = &fc.glyph;

            queue!(
                stdout,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(glyph.style.fg)),
                SetBackgroundColor(to_ct_color(glyph.style.bg))
            )?;

            let attrs = glyph.style.attrs;
            if attrs.contains(AttrMask::BOLD) {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            if attrs.contains(AttrMask::REVERSE) {
                queue!(stdout, style::SetAttribute(Attribute::Reverse))?;
            }

            write!(stdout, "{}", glyph.ch)?;

            if attrs != AttrMask::NONE {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }

        stdout.flush()
    }

    /// Clear the physical screen, e.g. after a resize.
    pub fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        stdout.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = queue!(stdout, event::DisableMouseCapture);
        }
        let _ = queue!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
