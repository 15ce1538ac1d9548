//! Navigation methods for the application

use super::state::App;

impl App {
    /// Moves selection up by one ingredient.
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Moves selection down by one ingredient.
    pub fn move_down(&mut self) {
        if self.selected_index < self.inventory.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Moves selection up by one page of ingredient blocks.
    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.page_size());
    }

    /// Moves selection down by one page of ingredient blocks.
    pub fn page_down(&mut self) {
        self.selected_index =
            (self.selected_index + self.page_size()).min(self.inventory.len().saturating_sub(1));
    }

    /// Jumps selection to the first ingredient.
    pub fn jump_to_start(&mut self) {
        self.selected_index = 0;
    }

    /// Jumps selection to the last ingredient.
    pub fn jump_to_end(&mut self) {
        self.selected_index = self.inventory.len().saturating_sub(1);
    }

    fn page_size(&self) -> usize {
        self.visible_items.max(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::inventory::{Ingredient, IngredientController, IngredientId, ThresholdPolicy};

    fn app_with(count: u32) -> App {
        let ingredients = (1..=count)
            .map(|n| Ingredient::new(IngredientId(n), format!("Spice {n}"), 100.0, 50.0))
            .collect();
        App::new(IngredientController::new(ingredients, ThresholdPolicy::default()))
    }

    #[test]
    fn test_move_stays_in_bounds() {
        let mut app = app_with(3);
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_paging_uses_visible_items() {
        let mut app = app_with(10);
        app.visible_items = 4;
        app.page_down();
        assert_eq!(app.selected_index, 4);
        app.page_down();
        app.page_down();
        assert_eq!(app.selected_index, 9);
        app.page_up();
        assert_eq!(app.selected_index, 5);
        app.jump_to_start();
        assert_eq!(app.selected_index, 0);
        app.jump_to_end();
        assert_eq!(app.selected_index, 9);
    }
}
