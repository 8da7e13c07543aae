//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. The calculator engine is threaded
//! through mutably: pressing a key is itself a pure, synchronous state
//! change owned by the caller.

use crate::engine::Calculator;

use super::state::{Action, App, AppEvent, Screen, Transition};

/// Pure state transition function.
///
/// Given the current screen, an action, and the calculator engine,
/// produces the next transition. The effects boundary interprets the
/// result.
pub fn update(screen: Screen, action: &Action, calc: &mut Calculator) -> Transition {
    match screen {
        Screen::Intro { .. } => update_intro(action, calc),
        Screen::Calculator => update_calculator(action, calc),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Intro: the first keypress dismisses the splash, and a keypress that maps
/// to a calculator symbol also counts as input.
fn update_intro(action: &Action, calc: &mut Calculator) -> Transition {
    match action {
        Action::Press(symbol) => {
            calc.press(*symbol);
            Transition::Screen(Screen::Calculator)
        }
        Action::Quit => Transition::Quit,
    }
}

/// Calculator: every press goes straight to the engine.
fn update_calculator(action: &Action, calc: &mut Calculator) -> Transition {
    match action {
        Action::Press(symbol) => {
            calc.press(*symbol);
            Transition::Screen(Screen::Calculator)
        }
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// OUT-OF-BAND TRANSITIONS
// ============================================================================

/// A key that maps to no action still wakes the intro screen.
pub fn dismiss_intro(screen: Screen) -> Screen {
    match screen {
        Screen::Intro { .. } => Screen::Calculator,
        other => other,
    }
}

/// Handle a non-key event from a producer thread.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::TitleTimeout => {
            if let Screen::Intro { title_visible } = &mut app.screen {
                *title_visible = false;
            }
        }
        // Key events never reach this handler; the event loop routes them
        // through map_key → update.
        AppEvent::Key(_) => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BinaryOp, Symbol};

    fn intro() -> Screen {
        Screen::Intro { title_visible: true }
    }

    // -- Intro --

    #[test]
    fn intro_keypress_lands_on_calculator() {
        let mut calc = Calculator::new();
        let result = update(intro(), &Action::Press(Symbol::Digit(3)), &mut calc);
        assert_eq!(result, Transition::Screen(Screen::Calculator));
    }

    #[test]
    fn intro_keypress_counts_as_input() {
        let mut calc = Calculator::new();
        update(intro(), &Action::Press(Symbol::Digit(3)), &mut calc);
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn intro_quit() {
        let mut calc = Calculator::new();
        assert_eq!(update(intro(), &Action::Quit, &mut calc), Transition::Quit);
    }

    #[test]
    fn unmapped_key_dismisses_intro() {
        assert_eq!(dismiss_intro(intro()), Screen::Calculator);
        assert_eq!(
            dismiss_intro(Screen::Intro { title_visible: false }),
            Screen::Calculator
        );
    }

    #[test]
    fn dismiss_leaves_calculator_screen_alone() {
        assert_eq!(dismiss_intro(Screen::Calculator), Screen::Calculator);
    }

    // -- Calculator --

    #[test]
    fn calculator_press_feeds_the_engine() {
        let mut calc = Calculator::new();
        for symbol in [
            Symbol::Digit(4),
            Symbol::Op(BinaryOp::Add),
            Symbol::Digit(2),
            Symbol::Equals,
        ] {
            let result = update(Screen::Calculator, &Action::Press(symbol), &mut calc);
            assert_eq!(result, Transition::Screen(Screen::Calculator));
        }
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn calculator_quit() {
        let mut calc = Calculator::new();
        assert_eq!(
            update(Screen::Calculator, &Action::Quit, &mut calc),
            Transition::Quit
        );
    }

    // -- Background events --

    #[test]
    fn title_timeout_hides_the_intro_title() {
        let mut app = App::with_intro();
        handle_background_event(&mut app, AppEvent::TitleTimeout);
        assert_eq!(app.screen, Screen::Intro { title_visible: false });
    }

    #[test]
    fn title_timeout_after_dismissal_is_a_noop() {
        let mut app = App::without_intro();
        handle_background_event(&mut app, AppEvent::TitleTimeout);
        assert_eq!(app.screen, Screen::Calculator);
    }
}
