//! Application state and core logic

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::gauge::{compute_bar_geometry, BarGeometry, ValidationError};
use crate::inventory::{Ingredient, IngredientController, IngredientId};

use super::ViewMode;

/// Application state
pub struct App {
    /// The session's ingredient collection
    pub inventory: IngredientController,
    /// Currently selected ingredient index
    pub selected_index: usize,
    /// Index of the first ingredient drawn on screen
    pub scroll_offset: usize,
    /// Number of ingredient blocks that fit on screen (updated by render)
    pub visible_items: usize,
    /// Current view/input mode
    pub view_mode: ViewMode,
    /// View restored when the help overlay closes
    pub(super) help_return: ViewMode,
    /// Text typed in an edit mode
    pub edit_buffer: String,
    /// Status or error message for the footer (if any)
    pub status_message: Option<String>,
    /// Gauge width in cells from config/CLI; fits the terminal when unset
    pub bar_width: Option<usize>,
    /// Validation flag from the last threshold edit of each ingredient
    threshold_flags: HashMap<IngredientId, ValidationError>,
    /// Set by the inventory listener, cleared after each render
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Creates a new App around an ingredient controller.
    ///
    /// Subscribes to the controller so that every mutation marks the
    /// screen for redraw.
    pub fn new(mut inventory: IngredientController) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        inventory.subscribe(move |event| {
            debug!(?event, "inventory changed");
            flag.set(true);
        });

        Self {
            inventory,
            selected_index: 0,
            scroll_offset: 0,
            visible_items: 1,
            view_mode: ViewMode::default(),
            help_return: ViewMode::default(),
            edit_buffer: String::new(),
            status_message: None,
            bar_width: None,
            threshold_flags: HashMap::new(),
            dirty,
        }
    }

    /// Creates an App configured from the merged config.
    pub fn with_config(inventory: IngredientController, config: &crate::config::AppConfig) -> Self {
        let mut app = Self::new(inventory);
        app.bar_width = config.bar_width();
        app
    }

    /// The ingredient under the cursor
    pub fn selected(&self) -> Option<&Ingredient> {
        self.inventory.ingredients().get(self.selected_index)
    }

    /// Validation error shown for an ingredient, if its last edit was invalid
    pub fn threshold_flag(&self, id: IngredientId) -> Option<ValidationError> {
        self.threshold_flags.get(&id).copied()
    }

    pub(super) fn set_threshold_flag(&mut self, id: IngredientId, flag: Option<ValidationError>) {
        match flag {
            Some(err) => {
                self.threshold_flags.insert(id, err);
            }
            None => {
                self.threshold_flags.remove(&id);
            }
        }
    }

    /// Number of ingredients currently flagged
    pub fn flagged_count(&self) -> usize {
        self.threshold_flags.len()
    }

    /// Gauge geometry as the dashboard draws it: the bar collapses while
    /// the ingredient carries a validation flag.
    pub fn geometry_for(&self, ingredient: &Ingredient, bar_width_px: f64) -> BarGeometry {
        compute_bar_geometry(
            ingredient.tracked_weight,
            ingredient.lower_threshold,
            self.threshold_flag(ingredient.id).is_some(),
            bar_width_px,
        )
    }

    /// Marks the screen for redraw
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }
}
