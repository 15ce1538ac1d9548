//! Ingredient data structure

use std::fmt;

use crate::gauge::{compute_bar_geometry, validate_threshold, BarGeometry, ValidationResult};

/// Identity of an ingredient within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientId(pub u32);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked dry-goods item
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// Identity, unique within the collection
    pub id: IngredientId,
    /// Display name (free-form, not unique)
    pub name: String,
    /// Current stock in grams
    pub tracked_weight: f64,
    /// Stock level below which the ingredient counts as low
    pub lower_threshold: f64,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>, tracked_weight: f64, lower_threshold: f64) -> Self {
        Self {
            id,
            name: name.into(),
            tracked_weight,
            lower_threshold,
        }
    }

    /// Validation state of the stored threshold
    pub fn threshold_status(&self) -> ValidationResult {
        validate_threshold(self.lower_threshold)
    }

    /// Gauge geometry for a bar of the given width, flagged by the stored
    /// threshold's validity
    pub fn geometry(&self, bar_width_px: f64) -> BarGeometry {
        compute_bar_geometry(
            self.tracked_weight,
            self.lower_threshold,
            self.threshold_status().is_error(),
            bar_width_px,
        )
    }
}

/// The collection every session starts with.
pub fn sample_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new(IngredientId(1), "Ingredient 1", 250.0, 100.0),
        Ingredient::new(IngredientId(2), "Ingredient 2", 400.0, 150.0),
        Ingredient::new(IngredientId(3), "Ingredient 3", 20.0, 50.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::FillState;

    #[test]
    fn test_samples_are_seeded_in_order() {
        let samples = sample_ingredients();
        let names: Vec<&str> = samples.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Ingredient 1", "Ingredient 2", "Ingredient 3"]);
        assert_eq!(samples[2].tracked_weight, 20.0);
        assert_eq!(samples[2].lower_threshold, 50.0);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let samples = sample_ingredients();
        let mut ids: Vec<IngredientId> = samples.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn test_geometry_uses_stored_threshold_status() {
        let mut spice = Ingredient::new(IngredientId(9), "Cumin", 20.0, 50.0);
        assert_eq!(spice.geometry(500.0).fill_state, FillState::Low);

        spice.lower_threshold = 50.5;
        assert_eq!(spice.geometry(500.0), BarGeometry::NEUTRAL);
    }
}
