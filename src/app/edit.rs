//! Name and threshold editing

use tracing::{debug, warn};

use crate::gauge::ValidationResult;

use super::{App, ViewMode};

impl App {
    /// Opens the name editor for the selected ingredient
    pub fn begin_edit_name(&mut self) {
        if let Some(name) = self.selected().map(|i| i.name.clone()) {
            self.edit_buffer = name;
            self.view_mode = ViewMode::EditName;
        }
    }

    /// Opens the threshold editor for the selected ingredient
    pub fn begin_edit_threshold(&mut self) {
        if let Some(threshold) = self.selected().map(|i| i.lower_threshold) {
            self.edit_buffer = threshold.to_string();
            self.view_mode = ViewMode::EditThreshold;
        }
    }

    /// Leaves edit mode without writing anything
    pub fn cancel_edit(&mut self) {
        self.edit_buffer.clear();
        self.view_mode = ViewMode::Dashboard;
    }

    /// Writes the edit buffer through the controller and leaves edit mode
    pub fn commit_edit(&mut self) {
        match self.view_mode {
            ViewMode::EditName => self.commit_name(),
            ViewMode::EditThreshold => self.commit_threshold(),
            _ => {}
        }
        self.edit_buffer.clear();
        self.view_mode = ViewMode::Dashboard;
    }

    fn commit_name(&mut self) {
        let Some(id) = self.selected().map(|i| i.id) else {
            return;
        };
        let name = self.edit_buffer.trim().to_string();

        if let Err(e) = self.inventory.update_name(id, name) {
            self.status_message = Some(e.to_string());
        }
    }

    fn commit_threshold(&mut self) {
        let Some(id) = self.selected().map(|i| i.id) else {
            return;
        };
        let input = self.edit_buffer.trim();

        // Text that is not a finite number never reaches the ingredient.
        let value = match input.parse::<f64>().ok().filter(|v| v.is_finite()) {
            Some(v) => v,
            None => {
                debug!(%id, input, "threshold input is not a number");
                self.status_message = Some(format!("'{}' is not a number", input));
                return;
            }
        };

        match self.inventory.update_threshold(id, value) {
            Ok(update) => {
                if update.committed {
                    let flag = match update.validation {
                        ValidationResult::Valid => None,
                        ValidationResult::Invalid(err) => Some(err),
                    };
                    self.set_threshold_flag(id, flag);
                } else {
                    // The stored value is unchanged, so its gauge stays live.
                    let kept = self
                        .inventory
                        .get(id)
                        .map(|i| i.lower_threshold)
                        .unwrap_or_default();
                    let reason = update.validation.message().unwrap_or_default();
                    self.status_message = Some(format!("{} Kept {}g", reason, kept));
                }
            }
            Err(e) => {
                warn!(error = %e, "threshold update failed");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, ViewMode};
    use crate::gauge::{FillState, ValidationError};
    use crate::inventory::{IngredientController, IngredientId, ThresholdPolicy};

    fn edit_threshold(app: &mut App, text: &str) {
        app.begin_edit_threshold();
        app.edit_buffer = text.to_string();
        app.commit_edit();
    }

    #[test]
    fn test_begin_edit_prefills_buffer() {
        let mut app = App::new(IngredientController::default());
        app.begin_edit_threshold();
        assert_eq!(app.view_mode, ViewMode::EditThreshold);
        assert_eq!(app.edit_buffer, "100");

        app.cancel_edit();
        app.begin_edit_name();
        assert_eq!(app.edit_buffer, "Ingredient 1");
    }

    #[test]
    fn test_rename_selected() {
        let mut app = App::new(IngredientController::default());
        app.selected_index = 1;
        app.begin_edit_name();
        app.edit_buffer = "  Smoked Paprika ".to_string();
        app.commit_edit();

        assert_eq!(app.view_mode, ViewMode::Dashboard);
        assert_eq!(app.inventory.get(IngredientId(2)).unwrap().name, "Smoked Paprika");
    }

    #[test]
    fn test_invalid_threshold_is_stored_and_flagged() {
        let mut app = App::new(IngredientController::default());
        edit_threshold(&mut app, "750");

        assert_eq!(app.inventory.get(IngredientId(1)).unwrap().lower_threshold, 750.0);
        assert_eq!(
            app.threshold_flag(IngredientId(1)),
            Some(ValidationError::ThresholdOutOfRange)
        );

        edit_threshold(&mut app, "75");
        assert_eq!(app.threshold_flag(IngredientId(1)), None);
    }

    #[test]
    fn test_reject_policy_keeps_value_and_gauge() {
        let mut app = App::new(IngredientController::with_samples(ThresholdPolicy::RejectInvalid));
        app.selected_index = 2;
        edit_threshold(&mut app, "50.5");

        let spice = app.inventory.get(IngredientId(3)).unwrap().clone();
        assert_eq!(spice.lower_threshold, 50.0);
        assert_eq!(app.threshold_flag(IngredientId(3)), None);
        assert_eq!(app.geometry_for(&spice, 400.0).fill_state, FillState::Low);
        assert_eq!(app.flagged_count(), 0);
        assert!(app.status_message.as_deref().unwrap().ends_with("Kept 50g"));

        let low: Vec<IngredientId> = app.inventory.low_stock().map(|i| i.id).collect();
        assert_eq!(low, vec![IngredientId(3)]);
    }

    #[test]
    fn test_reject_policy_never_flags() {
        let mut app = App::new(IngredientController::with_samples(ThresholdPolicy::RejectInvalid));
        edit_threshold(&mut app, "80");
        edit_threshold(&mut app, "-3");
        assert_eq!(app.inventory.get(IngredientId(1)).unwrap().lower_threshold, 80.0);
        assert_eq!(app.threshold_flag(IngredientId(1)), None);
    }

    #[test]
    fn test_non_numeric_threshold_is_ignored() {
        let mut app = App::new(IngredientController::default());
        edit_threshold(&mut app, "lots");

        assert_eq!(app.inventory.get(IngredientId(1)).unwrap().lower_threshold, 100.0);
        assert_eq!(app.threshold_flag(IngredientId(1)), None);
        assert_eq!(app.status_message.as_deref(), Some("'lots' is not a number"));
    }

    #[test]
    fn test_non_finite_threshold_is_ignored() {
        let mut app = App::new(IngredientController::default());
        for text in ["nan", "NaN", "inf", "-inf", "infinity"] {
            edit_threshold(&mut app, text);

            let spice = app.inventory.get(IngredientId(1)).unwrap();
            assert_eq!(spice.lower_threshold, 100.0, "{text}");
            assert_eq!(app.threshold_flag(IngredientId(1)), None);
            assert_eq!(
                app.status_message.as_deref(),
                Some(format!("'{}' is not a number", text).as_str())
            );
        }

        app.begin_edit_threshold();
        assert_eq!(app.edit_buffer, "100");
    }
}
