//! Header, stats line, and footer components

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::App;
use crate::constants::DISPLAY_NAME;
use crate::inventory::ThresholdPolicy;

use super::utils::truncate_string;

/// Renders the application header with the threshold policy indicator.
pub fn render_header<W: Write>(out: &mut W, app: &App, width: usize) -> io::Result<()> {
    let policy = app.inventory.policy();
    let indicator = format!("[{}]", policy.name());
    let indicator_color = match policy {
        ThresholdPolicy::AcceptAndFlag => Color::Yellow,
        ThresholdPolicy::RejectInvalid => Color::Green,
    };

    let title = format!(" {}", DISPLAY_NAME);
    let spacing = width.saturating_sub(title.len() + indicator.len() + 1);

    execute!(
        out,
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(title),
        Print(format!("{:spacing$}", "", spacing = spacing)),
        SetForegroundColor(indicator_color),
        Print(indicator),
        Print(" "),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the stats line: ingredient count, low-stock count, flagged count.
pub fn render_stats<W: Write>(out: &mut W, app: &App, width: usize) -> io::Result<()> {
    let view = if app.view_mode.is_grocery_list() {
        "Grocery List"
    } else {
        "Ingredient Dashboard"
    };
    let line = format!(
        " {}  |  Ingredients: {}  |  Low: {}  |  Flagged: {}",
        view,
        app.inventory.len(),
        app.inventory.low_stock().count(),
        app.flagged_count()
    );

    execute!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(format!("{:width$}", truncate_string(&line, width), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the footer: edit prompt, status message, or the selected
/// ingredient's threshold message, followed by the key hints.
pub fn render_footer<W: Write>(out: &mut W, app: &App, width: usize) -> io::Result<()> {
    if let Some(label) = app.view_mode.edit_label() {
        execute!(
            out,
            SetBackgroundColor(Color::DarkYellow),
            SetForegroundColor(Color::Black),
            Print(format!(
                " {}: {}█{:pad$}",
                label,
                app.edit_buffer,
                "",
                pad = width.saturating_sub(label.len() + app.edit_buffer.chars().count() + 4)
            )),
            ResetColor,
            Print("\r\n")
        )?;
    } else if let Some(ref msg) = app.status_message {
        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!(" {}", truncate_string(msg, width.saturating_sub(2)))),
            ResetColor,
            Print("\r\n")
        )?;
    } else {
        execute!(out, Print("\r\n"))?;
    }

    let (help_line, bg, fg) = if app.view_mode.is_editing() {
        (" Type to edit | Enter:Save | Esc:Cancel", Color::DarkYellow, Color::Black)
    } else if app.view_mode.is_grocery_list() {
        (" g/Esc:Back | ?:Help | q:Quit", Color::DarkBlue, Color::White)
    } else {
        (
            " ?:Help | q:Quit | e:Threshold | n:Name | g:Grocery List | Up/Down:Select",
            Color::DarkBlue,
            Color::White,
        )
    };

    execute!(
        out,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(format!("{:width$}", truncate_string(help_line, width), width = width)),
        ResetColor,
    )
}
