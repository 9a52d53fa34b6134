//! Display and output formatting utilities

use crate::puzzle::{State, TransitionTable};

/// Formats the puzzle tables for verbose output
pub struct PuzzleFormatter;

impl PuzzleFormatter {
    /// Table of valid states with their CNF variable numbers
    pub fn format_states(states: &[State]) -> String {
        let mut output = String::new();

        output.push_str("Valid States (wolf rabbit carrot boat):\n");
        output.push_str("Var | Sides | Far bank\n");
        output.push_str("----|-------|--------------------------\n");

        for (index, state) in states.iter().enumerate() {
            output.push_str(&format!(
                "{:3} | {} | {}\n",
                index + 1,
                state,
                Self::far_bank(state)
            ));
        }

        output
    }

    /// Table of transitions in identifier order
    pub fn format_transitions(table: &TransitionTable) -> String {
        let mut output = String::new();

        output.push_str("Transitions:\n");
        output.push_str(" ID | From | To   | Cargo\n");
        output.push_str("----|------|------|--------\n");

        for transition in table.iter() {
            output.push_str(&format!(
                "{:3} | {} | {} | {}\n",
                transition.id, transition.from, transition.to, transition.cargo
            ));
        }

        output
    }

    fn far_bank(state: &State) -> String {
        let names = [
            (state.wolf, "wolf"),
            (state.rabbit, "rabbit"),
            (state.carrot, "carrot"),
            (state.boat, "boat"),
        ];
        let across: Vec<&str> = names
            .iter()
            .filter(|(side, _)| *side)
            .map(|(_, name)| *name)
            .collect();

        if across.is_empty() {
            "-".to_string()
        } else {
            across.join(", ")
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
