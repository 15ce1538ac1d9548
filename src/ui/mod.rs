//! User interface rendering
//!
//! This module provides all terminal UI rendering functionality:
//! - `render` - Main rendering entry point
//! - `components` - Header, stats line, and footer
//! - `dashboard` - Ingredient blocks with gauges
//! - `gauge` - Mapping gauge geometry onto terminal cells
//! - `grocery` - Low-stock list
//! - `help` - Help overlay
//! - `report` - Plain-text report for non-interactive use
//! - `utils` - Shared utilities

mod components;
mod dashboard;
pub mod gauge;
mod grocery;
mod help;
mod render;
pub mod report;
mod utils;

pub use render::{draw, render};
