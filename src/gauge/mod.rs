//! Inventory gauge calculator
//!
//! Pure functions that turn an ingredient's tracked weight and low-stock
//! threshold into a validation result and the geometry of its gauge.
//! Nothing here touches the terminal; the UI layer converts the pixel
//! values into cells.

pub mod geometry;
pub mod validation;

pub use geometry::{compute_bar_geometry, BarGeometry, FillState};
pub use validation::{validate_threshold, ValidationError, ValidationResult};
