//! Crossterm bindings for [`Surface`] and [`InputSource`].
//!
//! [`TerminalGuard`] owns raw mode and the alternate screen. Dropping it
//! restores the terminal on the quit path and on `?` early returns. Panics
//! additionally go through [`install_panic_hook`], so the message lands on
//! the normal screen instead of the alternate one.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Colors, Print, ResetColor, SetAttribute, SetColors};
use crossterm::{cursor, execute, queue, terminal};

use crate::error::{CwmError, Result};
use crate::io::{Attribute, InputSource, KeyEvent, Style, Surface};

/// Size reported when the terminal cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (24, 80);

/// Raw mode + alternate screen + hidden cursor for as long as it lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
pub fn restore_terminal() {
    // Best effort.
    let _ = execute!(
        io::stdout(),
        ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

/// Chain a panic hook that restores the terminal before the previous hook
/// prints the panic message.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Colour pair for a style: task screens are red on white, banners yellow on blue.
pub fn style_colors(style: Style) -> Colors {
    match style {
        Style::Task => Colors::new(Color::Red, Color::White),
        Style::Banner => Colors::new(Color::Yellow, Color::Blue),
    }
}

/// Surface that queues writes to stdout and flushes on refresh.
pub struct TerminalSurface {
    out: Stdout,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        match terminal::size() {
            Ok((cols, rows)) => (rows, cols),
            Err(_) => FALLBACK_SIZE,
        }
    }

    fn write_str(
        &mut self,
        row: i32,
        col: i32,
        text: &str,
        style: Style,
        attribute: Attribute,
    ) -> Result<()> {
        let (rows, cols) = self.size();
        if row < 0 || row >= rows as i32 {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (cols as i32 - start).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }

        let attr = match attribute {
            Attribute::Plain => crossterm::style::Attribute::NormalIntensity,
            Attribute::Bold => crossterm::style::Attribute::Bold,
        };
        queue!(
            self.out,
            cursor::MoveTo(start as u16, row as u16),
            SetColors(style_colors(style)),
            SetAttribute(attr),
            Print(visible),
            SetAttribute(crossterm::style::Attribute::Reset)
        )?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Blocking keyboard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_blocking(&mut self) -> Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return translate_key(key),
                // Key releases and repeats (where reported) are not presses.
                Event::Key(_) => continue,
                _ => return Ok(KeyEvent::Other),
            }
        }
    }
}

/// Map a terminal key press to a task event. Ctrl-C aborts the session.
pub fn translate_key(key: event::KeyEvent) -> Result<KeyEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(CwmError::Interrupted);
    }
    Ok(match key.code {
        KeyCode::Up => KeyEvent::Up,
        KeyCode::Down => KeyEvent::Down,
        KeyCode::Left => KeyEvent::Left,
        KeyCode::Right => KeyEvent::Right,
        KeyCode::Char(' ') => KeyEvent::Confirm,
        KeyCode::Char('y') => KeyEvent::Yes,
        KeyCode::Char('n') => KeyEvent::No,
        KeyCode::Char('c') => KeyEvent::Continue,
        KeyCode::Char('q') => KeyEvent::Quit,
        _ => KeyEvent::Other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> event::KeyEvent {
        event::KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key(press(KeyCode::Up)).unwrap(), KeyEvent::Up);
        assert_eq!(translate_key(press(KeyCode::Right)).unwrap(), KeyEvent::Right);
        assert_eq!(translate_key(press(KeyCode::Char(' '))).unwrap(), KeyEvent::Confirm);
        assert_eq!(translate_key(press(KeyCode::Char('y'))).unwrap(), KeyEvent::Yes);
        assert_eq!(translate_key(press(KeyCode::Char('n'))).unwrap(), KeyEvent::No);
        assert_eq!(translate_key(press(KeyCode::Char('c'))).unwrap(), KeyEvent::Continue);
        assert_eq!(translate_key(press(KeyCode::Char('q'))).unwrap(), KeyEvent::Quit);
        assert_eq!(translate_key(press(KeyCode::Char('x'))).unwrap(), KeyEvent::Other);
        assert_eq!(translate_key(press(KeyCode::Enter)).unwrap(), KeyEvent::Other);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(translate_key(key), Err(CwmError::Interrupted)));
    }

    #[test]
    fn test_style_colors() {
        assert_eq!(style_colors(Style::Task), Colors::new(Color::Red, Color::White));
        assert_eq!(style_colors(Style::Banner), Colors::new(Color::Yellow, Color::Blue));
    }
}
