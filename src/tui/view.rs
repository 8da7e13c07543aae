//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::engine::Calculator;
use crate::types::BinaryOp;

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// KEYPAD GEOMETRY
// ============================================================================

/// Keypad labels in the classic pocket arrangement.
///
/// The empty cell keeps the bottom row aligned (physical keypads widen the
/// zero key instead).
const KEYPAD: [[&str; 4]; 5] = [
    ["C", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["0", "", ".", "="],
];

/// Character width of one keypad cell.
const CELL_WIDTH: usize = 5;

/// Character width of the whole keypad (and the display row above it).
const KEYPAD_WIDTH: usize = CELL_WIDTH * 4;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let title = Paragraph::new(Span::styled("pocket-calc", theme::STYLE_TITLE));
    frame.render_widget(title, chunks[0]);

    let help = render_help(&app.screen);
    frame.render_widget(help, chunks[2]);

    match &app.screen {
        Screen::Intro { title_visible } => render_intro(*title_visible, frame, chunks[1]),
        Screen::Calculator => render_calculator(&app.calc, frame, chunks[1]),
    }
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Intro { .. } => "press any key to start  [q] quit",
        Screen::Calculator => {
            "[0-9 .] enter  [+ - * /] operate  [Enter] =  [n] ±  [%] percent  [Esc] clear  [q] quit"
        }
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: INTRO
// ============================================================================

fn render_intro(title_visible: bool, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];

    if title_visible {
        lines.push(Line::from(Span::styled("  Welcome", theme::STYLE_TITLE)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  press any key to begin",
        theme::STYLE_HINT,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: CALCULATOR
// ============================================================================

fn render_calculator(calc: &Calculator, frame: &mut Frame, area: Rect) {
    let display_style = if calc.is_error() {
        theme::STYLE_DISPLAY_ERROR
    } else {
        theme::STYLE_DISPLAY
    };

    let mut lines = vec![
        Line::from(""),
        // Display row, right-aligned over the keypad
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:>width$}", calc.display(), width = KEYPAD_WIDTH),
                display_style,
            ),
        ]),
        Line::from(""),
    ];

    let pending = calc.pending_operator();
    for row in KEYPAD {
        let mut spans = vec![Span::raw("  ")];
        for label in row {
            spans.push(Span::styled(pad_cell(label), key_style(label, pending)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Center a key label in its fixed-width cell.
fn pad_cell(label: &str) -> String {
    format!("{:^width$}", label, width = CELL_WIDTH)
}

/// Style for a keypad label, inverting the operator awaiting its
/// right-hand side.
fn key_style(label: &str, pending: Option<BinaryOp>) -> Style {
    if let Some(op) = pending {
        if label.chars().next() == Some(op.glyph()) {
            return theme::STYLE_KEY_OPERATOR_ACTIVE;
        }
    }

    match label {
        "C" | "±" | "%" => theme::STYLE_KEY_FUNCTION,
        "÷" | "×" | "−" | "+" | "=" => theme::STYLE_KEY_OPERATOR,
        _ => theme::STYLE_KEY_DIGIT,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_pad_to_fixed_width_even_for_glyphs() {
        assert_eq!(pad_cell("7").chars().count(), CELL_WIDTH);
        assert_eq!(pad_cell("÷").chars().count(), CELL_WIDTH);
        assert_eq!(pad_cell("").chars().count(), CELL_WIDTH);
    }

    #[test]
    fn pending_operator_key_is_inverted() {
        let style = key_style("÷", Some(BinaryOp::Divide));
        assert_eq!(style, theme::STYLE_KEY_OPERATOR_ACTIVE);
    }

    #[test]
    fn other_operator_keys_stay_plain_while_one_is_pending() {
        let style = key_style("+", Some(BinaryOp::Divide));
        assert_eq!(style, theme::STYLE_KEY_OPERATOR);
    }

    #[test]
    fn equals_key_is_never_inverted() {
        // Equals closes a chain; it is styled as an operator but has no
        // pending state of its own.
        for op in [
            BinaryOp::Add,
            BinaryOp::Subtract,
            BinaryOp::Multiply,
            BinaryOp::Divide,
        ] {
            assert_eq!(key_style("=", Some(op)), theme::STYLE_KEY_OPERATOR);
        }
    }

    #[test]
    fn key_classes_map_to_their_styles() {
        assert_eq!(key_style("C", None), theme::STYLE_KEY_FUNCTION);
        assert_eq!(key_style("±", None), theme::STYLE_KEY_FUNCTION);
        assert_eq!(key_style("×", None), theme::STYLE_KEY_OPERATOR);
        assert_eq!(key_style("5", None), theme::STYLE_KEY_DIGIT);
        assert_eq!(key_style(".", None), theme::STYLE_KEY_DIGIT);
    }

    #[test]
    fn keypad_rows_are_uniform() {
        for row in KEYPAD {
            let width: usize = row.iter().map(|l| pad_cell(l).chars().count()).sum();
            assert_eq!(width, KEYPAD_WIDTH);
        }
    }
}
