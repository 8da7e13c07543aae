//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Intro timer thread: fires the title timeout once
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::types::Symbol;

use super::state::{Action, App, AppEvent, Transition};
use super::update::{dismiss_intro, handle_background_event, update};
use super::view::render;

/// How long the intro title stays up before fading.
const TITLE_TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Action::Press(Symbol::Equals)),
        KeyCode::Esc => Some(Action::Press(Symbol::Clear)),
        KeyCode::Char('q') => Some(Action::Quit),
        // Everything else goes through the character alphabet: digits,
        // point, operators (with the x alias), =, c, %, n.
        KeyCode::Char(c) => Symbol::from_char(c).map(Action::Press),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that fires the intro title timeout once, then exits.
fn spawn_title_timer(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(TITLE_TIMEOUT);
        let _ = tx.send(AppEvent::TitleTimeout);
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// spawns the producer threads, and runs the event loop until the user
/// quits.
pub fn run(show_intro: bool) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = if show_intro {
        App::with_intro()
    } else {
        App::without_intro()
    };

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn producer threads
    spawn_key_reader(tx.clone());
    if show_intro {
        spawn_title_timer(tx.clone());
    }
    drop(tx);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                let screen = std::mem::take(&mut app.screen);
                match map_key(key) {
                    Some(action) => match update(screen, &action, &mut app.calc) {
                        Transition::Screen(next) => app.screen = next,
                        Transition::Quit => app.should_quit = true,
                    },
                    // An unmapped key still wakes the intro screen
                    None => app.screen = dismiss_intro(screen),
                }
            }
            background_event => {
                handle_background_event(&mut app, background_event);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BinaryOp;

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn q_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn digits_map_to_presses() {
        for n in 0..=9u8 {
            let key = KeyEvent::new(KeyCode::Char((b'0' + n) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::Press(Symbol::Digit(n))));
        }
    }

    #[test]
    fn enter_maps_to_equals() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Press(Symbol::Equals)));
    }

    #[test]
    fn esc_maps_to_clear() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Press(Symbol::Clear)));
    }

    #[test]
    fn x_maps_to_multiply() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(
            map_key(key),
            Some(Action::Press(Symbol::Op(BinaryOp::Multiply)))
        );
    }

    #[test]
    fn n_maps_to_sign_toggle() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Press(Symbol::ToggleSign)));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);

        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }
}
