//! Mapping gauge geometry onto terminal cells
//!
//! Geometry is computed in virtual pixels ([`PIXELS_PER_CELL`] per column)
//! and rounded to cells here. Positions past either end of the bar are
//! clipped only at this stage.

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::constants::{BAR_LEFT_MARGIN, PIXELS_PER_CELL};
use crate::gauge::{BarGeometry, FillState};

use super::utils::fill_color;

/// Marker glyph drawn under the threshold position
pub const MARKER: char = '▲';

/// Cell positions for one gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeCells {
    /// Number of filled cells from the left
    pub filled: usize,
    /// Column where the tracked-weight label starts
    pub label_col: usize,
    /// Column of the threshold marker
    pub marker_col: usize,
}

/// Width of a bar in virtual pixels
#[must_use]
pub fn bar_width_px(bar_cells: usize) -> f64 {
    bar_cells as f64 * PIXELS_PER_CELL
}

fn px_to_cell(px: f64) -> usize {
    (px / PIXELS_PER_CELL).round().max(0.0) as usize
}

/// Rounds geometry to cells of a bar `bar_cells` wide.
#[must_use]
pub fn layout_cells(geometry: &BarGeometry, bar_cells: usize) -> GaugeCells {
    let last = bar_cells.saturating_sub(1);
    GaugeCells {
        filled: px_to_cell(geometry.filled_width_px).min(bar_cells),
        label_col: px_to_cell(geometry.tracked_label_offset_px).min(last),
        marker_col: px_to_cell(geometry.marker_offset_px).min(last),
    }
}

/// Text content of the bar row: blanks with `label` overlaid at
/// `label_col`, cut at the bar end.
#[must_use]
pub fn bar_text(cells: &GaugeCells, bar_cells: usize, label: Option<&str>) -> Vec<char> {
    let mut text = vec![' '; bar_cells];
    if let Some(label) = label {
        for (slot, c) in text.iter_mut().skip(cells.label_col).zip(label.chars()) {
            *slot = c;
        }
    }
    text
}

/// Draws the colored bar row with the tracked-weight label.
pub fn render_gauge_row<W: Write>(
    out: &mut W,
    geometry: &BarGeometry,
    bar_cells: usize,
    label: Option<&str>,
) -> io::Result<()> {
    let cells = layout_cells(geometry, bar_cells);
    let text = bar_text(&cells, bar_cells, label);
    let filled: String = text[..cells.filled].iter().collect();
    let empty: String = text[cells.filled..].iter().collect();

    let label_fg = match geometry.fill_state {
        FillState::Low => Color::White,
        _ => Color::Black,
    };

    execute!(
        out,
        Print(format!("{:m$}", "", m = BAR_LEFT_MARGIN)),
        SetBackgroundColor(fill_color(geometry.fill_state)),
        SetForegroundColor(label_fg),
        Print(filled),
        SetBackgroundColor(Color::DarkGrey),
        SetForegroundColor(Color::White),
        Print(empty),
        ResetColor,
        Print("\r\n")
    )
}

/// Draws the marker row: the marker glyph at the threshold column and,
/// unless the gauge is collapsed, the threshold label.
pub fn render_marker_row<W: Write>(
    out: &mut W,
    geometry: &BarGeometry,
    bar_cells: usize,
    label: Option<&str>,
) -> io::Result<()> {
    let cells = layout_cells(geometry, bar_cells);
    let indent = BAR_LEFT_MARGIN + cells.marker_col;

    execute!(
        out,
        Print(format!("{:indent$}", "", indent = indent)),
        SetForegroundColor(Color::White),
        Print(MARKER),
        SetForegroundColor(Color::DarkGrey),
        Print(label.map(|l| format!(" {}", l)).unwrap_or_default()),
        ResetColor,
        Print("\r\n")
    )
}
