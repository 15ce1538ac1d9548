//! Utility functions for UI rendering

use crossterm::style::Color;

use crate::gauge::FillState;

/// Truncates a string to fit within a given width.
///
/// If the string exceeds `max_len` characters, it is truncated and "..."
/// is appended.
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Formats a weight as whole grams, dropping the fraction ("20g").
#[must_use]
pub fn format_grams(grams: f64) -> String {
    format!("{}g", grams.trunc() as i64)
}

/// Returns the gauge fill color for a fill state.
///
/// * Green - at or above threshold
/// * Red - below threshold
/// * DarkGrey - threshold invalid
#[must_use]
pub fn fill_color(state: FillState) -> Color {
    match state {
        FillState::Normal => Color::Green,
        FillState::Low => Color::Red,
        FillState::Neutral => Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Cumin", 10), "Cumin");
        assert_eq!(truncate_string("Fenugreek seeds", 8), "Fenug...");
        assert_eq!(truncate_string("Anise", 2), "An");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_string("Piment d’Espelette", 9), "Piment...");
    }

    #[test]
    fn test_format_grams_truncates() {
        assert_eq!(format_grams(250.0), "250g");
        assert_eq!(format_grams(49.9), "49g");
        assert_eq!(format_grams(-0.5), "0g");
    }

    #[test]
    fn test_fill_colors() {
        assert_eq!(fill_color(FillState::Normal), Color::Green);
        assert_eq!(fill_color(FillState::Low), Color::Red);
        assert_eq!(fill_color(FillState::Neutral), Color::DarkGrey);
    }
}
