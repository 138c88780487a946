//! Masked entry for the API key.

use std::io::{self, BufRead, IsTerminal, Write};

use termimad::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termimad::crossterm::terminal;

/// Effect of one key press on the secret being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Typed,
    Erased,
    Ignored,
    Submit,
    Cancel,
}

pub(crate) fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignored;
    }
    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Cancel
        }
        KeyCode::Backspace => {
            if buffer.pop().is_some() {
                KeyAction::Erased
            } else {
                KeyAction::Ignored
            }
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyAction::Typed
        }
        _ => KeyAction::Ignored,
    }
}

/// Leaves raw mode when dropped, whichever way the read ends.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Read a secret without echoing it; each character shows as `*`.
///
/// Esc, Ctrl-C and Ctrl-D cancel and yield an empty string. When stdin is
/// not a terminal the next line is read as-is.
pub fn read_secret(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout();
    write!(out, "{prompt}: ")?;
    out.flush()?;

    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        writeln!(out)?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }

    let mut secret = String::new();
    {
        let _raw = RawModeGuard::enable()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match apply_key(&mut secret, key) {
                KeyAction::Typed => write!(out, "*")?,
                KeyAction::Erased => write!(out, "\x08 \x08")?,
                KeyAction::Ignored => continue,
                KeyAction::Submit => break,
                KeyAction::Cancel => {
                    secret.clear();
                    break;
                }
            }
            out.flush()?;
        }
    }
    writeln!(out)?;
    Ok(secret)
}
