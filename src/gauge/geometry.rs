//! Bar geometry for the stock gauge
//!
//! All positions are in pixels along a bar of `bar_width_px`. Values are
//! deliberately left unclamped: a tracked weight above 500 g produces a
//! filled width wider than the bar, and callers that draw into a fixed area
//! clip at draw time.

use crate::constants::{LABEL_RESERVE_PX, MAX_WEIGHT};

/// Color state of the filled region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    /// Threshold is invalid; the bar shows nothing
    Neutral,
    /// Stock is below the threshold
    Low,
    /// Stock is at or above the threshold
    Normal,
}

impl FillState {
    /// Short label for reports
    pub fn name(&self) -> &'static str {
        match self {
            FillState::Neutral => "n/a",
            FillState::Low => "LOW",
            FillState::Normal => "ok",
        }
    }
}

/// Computed positions for one gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// `tracked_weight / MAX_WEIGHT`, zero in the error state
    pub fill_fraction: f64,
    /// Width of the filled region
    pub filled_width_px: f64,
    /// Left offset of the tracked-weight label
    pub tracked_label_offset_px: f64,
    /// Left offset of the threshold marker
    pub marker_offset_px: f64,
    /// Color state of the filled region
    pub fill_state: FillState,
}

impl BarGeometry {
    /// Geometry of a collapsed gauge
    pub const NEUTRAL: BarGeometry = BarGeometry {
        fill_fraction: 0.0,
        filled_width_px: 0.0,
        tracked_label_offset_px: 0.0,
        marker_offset_px: 0.0,
        fill_state: FillState::Neutral,
    };
}

/// Computes the gauge geometry for an ingredient.
///
/// # Arguments
/// * `tracked_weight` - Current stock in grams
/// * `lower_threshold` - Low-stock threshold in grams
/// * `is_error` - Whether the threshold failed validation
/// * `bar_width_px` - Full width of the bar
///
/// # Returns
/// The [`BarGeometry`]. When `is_error` is set every offset is zero and the
/// fill state is [`FillState::Neutral`].
#[must_use]
pub fn compute_bar_geometry(
    tracked_weight: f64,
    lower_threshold: f64,
    is_error: bool,
    bar_width_px: f64,
) -> BarGeometry {
    if is_error {
        return BarGeometry::NEUTRAL;
    }

    let fill_fraction = tracked_weight / MAX_WEIGHT;
    let filled_width_px = fill_fraction * bar_width_px;
    let marker_offset_px = (lower_threshold / MAX_WEIGHT) * bar_width_px;

    // max before min: with a bar narrower than the reserve the upper bound
    // wins and the offset goes negative. f64::clamp would panic there.
    let tracked_label_offset_px = filled_width_px
        .max(0.0)
        .min(bar_width_px - LABEL_RESERVE_PX);

    let fill_state = if tracked_weight < lower_threshold {
        FillState::Low
    } else {
        FillState::Normal
    };

    BarGeometry {
        fill_fraction,
        filled_width_px,
        tracked_label_offset_px,
        marker_offset_px,
        fill_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_collapses_bar() {
        let geo = compute_bar_geometry(250.0, 100.0, true, 400.0);
        assert_eq!(geo, BarGeometry::NEUTRAL);

        let geo = compute_bar_geometry(-30.0, 9_999.0, true, 12.0);
        assert_eq!(geo.filled_width_px, 0.0);
        assert_eq!(geo.marker_offset_px, 0.0);
        assert_eq!(geo.fill_state, FillState::Neutral);
    }

    #[test]
    fn test_low_stock_example() {
        let geo = compute_bar_geometry(20.0, 50.0, false, 500.0);
        assert_eq!(geo.fill_state, FillState::Low);
        assert_eq!(geo.filled_width_px, 20.0);
        assert_eq!(geo.marker_offset_px, 50.0);
        assert_eq!(geo.tracked_label_offset_px, 20.0);
    }

    #[test]
    fn test_fill_is_linear_and_unclamped() {
        let single = compute_bar_geometry(150.0, 0.0, false, 200.0);
        let double = compute_bar_geometry(300.0, 0.0, false, 200.0);
        assert_eq!(double.filled_width_px, single.filled_width_px * 2.0);

        let over = compute_bar_geometry(1000.0, 0.0, false, 200.0);
        assert_eq!(over.filled_width_px, 400.0);
        assert_eq!(over.fill_fraction, 2.0);
    }

    #[test]
    fn test_negative_weight_extrapolates() {
        let geo = compute_bar_geometry(-50.0, 0.0, false, 500.0);
        assert_eq!(geo.filled_width_px, -50.0);
        assert_eq!(geo.tracked_label_offset_px, 0.0);
    }

    #[test]
    fn test_equal_weight_and_threshold_is_normal() {
        let geo = compute_bar_geometry(100.0, 100.0, false, 500.0);
        assert_eq!(geo.fill_state, FillState::Normal);
    }

    #[test]
    fn test_label_offset_respects_reserve() {
        let geo = compute_bar_geometry(500.0, 0.0, false, 300.0);
        assert_eq!(geo.filled_width_px, 300.0);
        assert_eq!(geo.tracked_label_offset_px, 250.0);
    }

    #[test]
    fn test_label_offset_goes_negative_on_narrow_bar() {
        let geo = compute_bar_geometry(125.0, 0.0, false, 40.0);
        assert_eq!(geo.filled_width_px, 10.0);
        assert_eq!(geo.tracked_label_offset_px, -10.0);
    }

    #[test]
    fn test_label_offset_bounds_sweep() {
        for width in [50.0, 64.0, 200.0, 480.0] {
            for weight in [-100.0, 0.0, 20.0, 250.0, 500.0, 900.0] {
                let geo = compute_bar_geometry(weight, 100.0, false, width);
                assert!(geo.tracked_label_offset_px >= 0.0);
                assert!(geo.tracked_label_offset_px <= width - 50.0);
            }
        }
    }
}
