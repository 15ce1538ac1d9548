//! Help overlay rendering

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::constants::{HELP_DIALOG_WIDTH, HELP_KEY_COL_WIDTH};

use super::utils::truncate_string;

/// Help content definition
const HELP_LINES: &[(&str, &str)] = &[
    ("", ""),
    ("NAVIGATION", ""),
    ("  Up/Down", "Select ingredient"),
    ("  PgUp/PgDn", "Scroll by page"),
    ("  Home/End", "Jump to first/last ingredient"),
    ("", ""),
    ("EDITING", ""),
    ("  e / Enter", "Edit lower threshold"),
    ("  n", "Edit ingredient name"),
    ("  Enter", "Save edit"),
    ("  Esc", "Cancel edit"),
    ("", ""),
    ("VIEWS", ""),
    ("  g", "Toggle grocery list"),
    ("", ""),
    ("THRESHOLDS", ""),
    ("  ", "Whole grams from 0 to 500"),
    ("", ""),
    ("OTHER", ""),
    ("  ?", "Show/hide this help"),
    ("  q", "Quit application"),
    ("  Ctrl+C", "Quit application"),
];

/// One row of the help box, already padded to the inner width
fn help_rows(inner_width: usize) -> Vec<(Color, String)> {
    let centered = |text: &str| format!("{:^w$}", text, w = inner_width);

    let mut rows = vec![(Color::Yellow, centered("Keyboard Shortcuts"))];
    for (key, desc) in HELP_LINES {
        let row = match (key.is_empty(), desc.is_empty()) {
            (true, true) => (Color::White, String::new()),
            (false, true) => (Color::Cyan, format!(" {}", key)),
            _ => (
                Color::Green,
                format!(" {:<kw$}{}", key, desc, kw = HELP_KEY_COL_WIDTH),
            ),
        };
        rows.push(row);
    }
    rows.into_iter()
        .map(|(color, text)| (color, format!("{:<w$}", truncate_string(&text, inner_width), w = inner_width)))
        .collect()
}

/// Renders the help overlay showing all keyboard shortcuts
pub fn render_help_overlay<W: Write>(out: &mut W, width: usize, height: usize) -> io::Result<()> {
    let inner_width = HELP_DIALOG_WIDTH - 2;
    let rows = help_rows(inner_width);
    // top border, rows, bottom border
    let box_height = (rows.len() + 2).min(height);
    if box_height < 3 {
        return out.flush();
    }
    let start_x = (width.saturating_sub(HELP_DIALOG_WIDTH) / 2) as u16;
    let start_y = height.saturating_sub(box_height) / 2;

    // Dim the screen behind the box
    for y in 0..height {
        execute!(
            out,
            MoveTo(0, y as u16),
            SetBackgroundColor(Color::Black),
            Print(format!("{:w$}", "", w = width)),
            ResetColor
        )?;
    }

    execute!(
        out,
        MoveTo(start_x, start_y as u16),
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(format!("┌{}┐", "─".repeat(inner_width))),
        ResetColor
    )?;

    for (i, (color, text)) in rows.iter().take(box_height - 2).enumerate() {
        execute!(
            out,
            MoveTo(start_x, (start_y + 1 + i) as u16),
            SetBackgroundColor(Color::DarkBlue),
            SetForegroundColor(Color::White),
            Print("│"),
            SetForegroundColor(*color),
            Print(text),
            SetForegroundColor(Color::White),
            Print("│"),
            ResetColor
        )?;
    }

    let hint = " Press any key to close ";
    let left = (inner_width - hint.len()) / 2;
    let right = inner_width - left - hint.len();
    execute!(
        out,
        MoveTo(start_x, (start_y + box_height - 1) as u16),
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(format!("└{}", "─".repeat(left))),
        SetForegroundColor(Color::Yellow),
        Print(hint),
        SetForegroundColor(Color::White),
        Print(format!("{}┘", "─".repeat(right))),
        ResetColor
    )?;

    out.flush()
}
