//! TUI color semantics and style constants.
//!
//! Centralized theme definitions for the keypad's visual language.
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Orange: operator keys (the classic keypad accent)
//! - Inverted orange (white key, orange glyph): the operator awaiting its
//!   right-hand side
//! - Light gray: the function row (clear, sign, percent)
//! - Red: the error display
//! - Dim: help text and hints

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

/// Keypad accent for operator keys.
pub const ORANGE: Color = Color::Rgb(255, 149, 0);

/// Function-row keys (clear, sign toggle, percent).
pub const LIGHT_GRAY: Color = Color::Rgb(165, 165, 165);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// The numeric display.
pub const STYLE_DISPLAY: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The display while in the error state.
pub const STYLE_DISPLAY_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Digit and decimal-point keys.
pub const STYLE_KEY_DIGIT: Style = Style::new().fg(Color::White);

/// Function-row keys.
pub const STYLE_KEY_FUNCTION: Style = Style::new().fg(LIGHT_GRAY);

/// Operator keys.
pub const STYLE_KEY_OPERATOR: Style = Style::new().fg(ORANGE);

/// The operator key whose operation is pending — inverted.
pub const STYLE_KEY_OPERATOR_ACTIVE: Style = Style::new().fg(ORANGE).bg(Color::White);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / intro title.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Interactive hint ("press any key").
pub const STYLE_HINT: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_styles_carry_the_accent() {
        assert_eq!(STYLE_KEY_OPERATOR.fg, Some(ORANGE));
        assert_eq!(STYLE_KEY_OPERATOR_ACTIVE.fg, Some(ORANGE));
        assert_eq!(STYLE_KEY_OPERATOR_ACTIVE.bg, Some(Color::White));
    }

    #[test]
    fn error_display_is_red() {
        assert_eq!(STYLE_DISPLAY_ERROR.fg, Some(Color::Red));
    }

    #[test]
    fn display_and_title_are_bold() {
        assert!(STYLE_DISPLAY.add_modifier.contains(Modifier::BOLD));
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }
}
