//! Grocery list rendering: ingredients below their threshold

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::App;

use super::utils::{format_grams, truncate_string};

/// Renders the low-stock list with the grams needed to reach each threshold.
pub fn render_grocery_list<W: Write>(
    out: &mut W,
    app: &App,
    visible_rows: usize,
    width: usize,
) -> io::Result<()> {
    let header = format!(" {:<28}  {:>8}  {:>10}  {:>8}", "Ingredient", "Stock", "Threshold", "Need");
    execute!(
        out,
        SetBackgroundColor(Color::DarkGrey),
        SetForegroundColor(Color::White),
        Print(format!("{:width$}", truncate_string(&header, width), width = width)),
        ResetColor,
        Print("\r\n")
    )?;

    let mut rows_used = 1;
    let mut low = app.inventory.low_stock().peekable();

    if low.peek().is_none() {
        execute!(
            out,
            SetForegroundColor(Color::Green),
            Print(" Nothing to buy - every ingredient is at or above its threshold."),
            ResetColor,
            Print("\r\n")
        )?;
        rows_used += 1;
    }

    for ingredient in low.take(visible_rows.saturating_sub(rows_used)) {
        let shortfall = ingredient.lower_threshold - ingredient.tracked_weight;
        let line = format!(
            " {:<28}  {:>8}  {:>10}  {:>8}",
            truncate_string(&ingredient.name, 28),
            format_grams(ingredient.tracked_weight),
            format_grams(ingredient.lower_threshold),
            format_grams(shortfall.ceil()),
        );
        execute!(
            out,
            SetForegroundColor(Color::Red),
            Print(format!("{:width$}", truncate_string(&line, width), width = width)),
            ResetColor,
            Print("\r\n")
        )?;
        rows_used += 1;
    }

    for _ in rows_used..visible_rows {
        execute!(out, Print(format!("{:width$}\r\n", "", width = width)))?;
    }

    Ok(())
}
