//! Ingredient dashboard rendering

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::App;
use crate::constants::{BAR_LEFT_MARGIN, MIN_BAR_CELLS, ROWS_PER_INGREDIENT};

use super::gauge::{bar_width_px, render_gauge_row, render_marker_row};
use super::utils::{format_grams, truncate_string};

/// Gauge width in cells: the configured width, or the terminal width
/// minus margins.
#[must_use]
pub fn bar_cells(app: &App, width: usize) -> usize {
    app.bar_width
        .unwrap_or_else(|| width.saturating_sub(BAR_LEFT_MARGIN * 2))
        .max(MIN_BAR_CELLS)
}

/// Renders the scrollable ingredient list.
///
/// Each ingredient takes [`ROWS_PER_INGREDIENT`] rows: the name line with
/// its threshold (and validation message when flagged), the gauge, the
/// threshold marker, and a spacer.
pub fn render_dashboard<W: Write>(
    out: &mut W,
    app: &mut App,
    visible_rows: usize,
    width: usize,
) -> io::Result<()> {
    let visible_items = (visible_rows / ROWS_PER_INGREDIENT).max(1);
    app.visible_items = visible_items;

    // Adjust scroll offset to keep selection visible
    if app.selected_index < app.scroll_offset {
        app.scroll_offset = app.selected_index;
    } else if app.selected_index >= app.scroll_offset + visible_items {
        app.scroll_offset = app.selected_index + 1 - visible_items;
    }

    let cells = bar_cells(app, width);
    let width_px = bar_width_px(cells);
    let mut rows_used = 0;

    for (i, ingredient) in app
        .inventory
        .ingredients()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_items)
    {
        if rows_used + ROWS_PER_INGREDIENT > visible_rows {
            break;
        }
        let is_selected = i == app.selected_index;
        let flag = app.threshold_flag(ingredient.id);
        let geometry = app.geometry_for(ingredient, width_px);

        // Name line
        let marker = if is_selected { ">" } else { " " };
        let name_part = format!(
            "{} {}",
            marker,
            truncate_string(&ingredient.name, width.saturating_sub(30).max(8))
        );
        let threshold_part = format!("   Lower Threshold: {}", ingredient.lower_threshold);
        let used = name_part.chars().count() + threshold_part.chars().count();

        if is_selected {
            execute!(out, SetBackgroundColor(Color::DarkCyan), SetForegroundColor(Color::White))?;
        }
        execute!(out, Print(&name_part), Print(&threshold_part))?;
        if let Some(err) = flag {
            let msg = format!("  {}", err);
            execute!(
                out,
                SetForegroundColor(Color::Red),
                Print(truncate_string(&msg, width.saturating_sub(used)))
            )?;
        } else {
            execute!(out, Print(format!("{:pad$}", "", pad = width.saturating_sub(used))))?;
        }
        execute!(out, ResetColor, Print("\r\n"))?;

        // Labels are hidden while the threshold is flagged
        let tracked_label = flag.is_none().then(|| format_grams(ingredient.tracked_weight));
        let threshold_label = flag.is_none().then(|| format_grams(ingredient.lower_threshold));

        render_gauge_row(out, &geometry, cells, tracked_label.as_deref())?;
        render_marker_row(out, &geometry, cells, threshold_label.as_deref())?;
        execute!(out, Print("\r\n"))?;
        rows_used += ROWS_PER_INGREDIENT;
    }

    // Fill remaining space
    for _ in rows_used..visible_rows {
        execute!(out, Print(format!("{:width$}\r\n", "", width = width)))?;
    }

    Ok(())
}
