//! Dry kitchen ingredient tracker
//!
//! Tracks the stock of each ingredient against a low-stock threshold and
//! draws it as a gauge. The [`gauge`] module holds the pure calculations,
//! [`inventory`] the ingredient collection and its controller, and
//! [`app`] / [`ui`] the terminal front end.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod gauge;
pub mod inventory;
pub mod logging;
pub mod ui;
