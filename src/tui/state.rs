//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and rendering layer (`view`) both program against them.
//!
//! The calculator engine itself lives in [`crate::engine`]; the screen
//! types here carry only UI-transient state (which screen is up, whether
//! the intro title is still showing).

use crossterm::event::KeyEvent;

use crate::engine::Calculator;
use crate::types::Symbol;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - The intro timer thread sends `TitleTimeout` once, then exits
///
/// The event loop dispatches: key events go through `map_key → update`,
/// background events go through a separate pure handler.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The intro title's display window elapsed.
    TitleTimeout,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the calculator engine and the current screen. The effects layer
/// reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen transient state.
    pub screen: Screen,

    /// The calculator engine, shared across screens.
    pub calc: Calculator,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Startup splash. Any keypress dismisses it; a keypress that maps to
    /// a calculator symbol also counts as input.
    Intro {
        /// The welcome title hides after a few seconds; the hint stays.
        title_visible: bool,
    },

    /// The display and keypad.
    Calculator,
}

/// Default screen is Calculator (used as placeholder during transitions).
impl Default for Screen {
    fn default() -> Self {
        Screen::Calculator
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Press a calculator key.
    Press(Symbol),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it to
/// decide what to render. Follows the Elm/TEA pattern: pure code describes
/// WHAT should happen, effectful code decides HOW.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the intro screen, title showing.
    pub fn with_intro() -> Self {
        App {
            screen: Screen::Intro { title_visible: true },
            calc: Calculator::new(),
            should_quit: false,
        }
    }

    /// Create an App directly on the calculator screen.
    pub fn without_intro() -> Self {
        App {
            screen: Screen::Calculator,
            calc: Calculator::new(),
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_with_intro_starts_on_splash_with_title() {
        let app = App::with_intro();
        assert_eq!(app.screen, Screen::Intro { title_visible: true });
        assert_eq!(app.calc.display(), "0");
        assert!(!app.should_quit);
    }

    #[test]
    fn app_without_intro_lands_on_calculator() {
        let app = App::without_intro();
        assert_eq!(app.screen, Screen::Calculator);
        assert!(!app.should_quit);
    }

    #[test]
    fn screen_default_is_calculator() {
        assert_eq!(Screen::default(), Screen::Calculator);
    }

    #[test]
    fn action_equality_for_matching() {
        // Actions need Eq for the transition function to pattern-match
        assert_eq!(Action::Press(Symbol::Point), Action::Press(Symbol::Point));
        assert_ne!(Action::Press(Symbol::Point), Action::Quit);
        assert_ne!(
            Action::Press(Symbol::Digit(1)),
            Action::Press(Symbol::Digit(2))
        );
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Screen(Screen::Calculator);
        let t2 = Transition::Quit;
        assert_ne!(t1, t2);
    }
}
