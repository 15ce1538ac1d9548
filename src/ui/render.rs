//! Terminal rendering logic

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::app::App;
use crate::constants::VISIBLE_ROWS_OVERHEAD;

use super::components::{render_footer, render_header, render_stats};
use super::dashboard::render_dashboard;
use super::grocery::render_grocery_list;
use super::help::render_help_overlay;

/// Renders the UI to the terminal, sized to the current window.
pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    draw(stdout, app, width as usize, height as usize)
}

/// Draws a full frame of the given size.
pub fn draw<W: Write>(out: &mut W, app: &mut App, width: usize, height: usize) -> io::Result<()> {
    execute!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    if app.view_mode.is_help() {
        return render_help_overlay(out, width, height);
    }

    // === HEADER ===
    render_header(out, app, width)?;
    render_stats(out, app, width)?;

    // === BODY ===
    let visible_rows = height.saturating_sub(VISIBLE_ROWS_OVERHEAD);
    if app.view_mode.is_grocery_list() {
        render_grocery_list(out, app, visible_rows, width)?;
    } else {
        render_dashboard(out, app, visible_rows, width)?;
    }

    // === FOOTER ===
    render_footer(out, app, width)?;

    out.flush()
}
