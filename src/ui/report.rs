//! Plain-text report for non-interactive use
//!
//! Prints each ingredient with an ASCII gauge. The gauge follows the stored
//! threshold: an invalid threshold collapses it and prints the validation
//! message.

use std::io::{self, Write};

use crate::gauge::FillState;
use crate::inventory::Ingredient;

use super::gauge::{bar_width_px, layout_cells};
use super::utils::{format_grams, truncate_string};

const NAME_WIDTH: usize = 20;

/// Builds the ASCII gauge for one ingredient: `#` filled, `-` empty,
/// `|` at the threshold.
#[must_use]
pub fn ascii_gauge(ingredient: &Ingredient, bar_cells: usize) -> String {
    let geometry = ingredient.geometry(bar_width_px(bar_cells));
    let cells = layout_cells(&geometry, bar_cells);

    (0..bar_cells)
        .map(|col| {
            if col == cells.marker_col && geometry.fill_state != FillState::Neutral {
                '|'
            } else if col < cells.filled {
                '#'
            } else {
                '-'
            }
        })
        .collect()
}

/// Writes the report for all ingredients.
pub fn write_report<W: Write>(out: &mut W, ingredients: &[Ingredient], bar_cells: usize) -> io::Result<()> {
    for ingredient in ingredients {
        let status = ingredient.threshold_status();
        let state = ingredient.geometry(bar_width_px(bar_cells)).fill_state;
        writeln!(
            out,
            "{:<nw$}  [{}]  {:>6} / {:<6} {}",
            truncate_string(&ingredient.name, NAME_WIDTH),
            ascii_gauge(ingredient, bar_cells),
            format_grams(ingredient.tracked_weight),
            format_grams(ingredient.lower_threshold),
            state.name(),
            nw = NAME_WIDTH,
        )?;
        if let Some(msg) = status.message() {
            writeln!(out, "{:<nw$}  {}", "", msg, nw = NAME_WIDTH)?;
        }
    }
    out.flush()
}
