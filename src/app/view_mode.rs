//! View mode enum for application state
//!
//! Defines mutually exclusive application modes, ensuring only one
//! mode can be active at a time.

/// The current view/input mode of the application.
///
/// The mode determines how keyboard input is handled and what UI is
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Ingredient list with gauges (default mode)
    #[default]
    Dashboard,

    /// Ingredients currently below their threshold
    GroceryList,

    /// Typing a new name for the selected ingredient
    EditName,

    /// Typing a new lower threshold for the selected ingredient
    EditThreshold,

    /// Help overlay showing keyboard shortcuts
    Help,
}

impl ViewMode {
    #[inline]
    pub fn is_dashboard(&self) -> bool {
        matches!(self, ViewMode::Dashboard)
    }

    #[inline]
    pub fn is_grocery_list(&self) -> bool {
        matches!(self, ViewMode::GroceryList)
    }

    #[inline]
    pub fn is_help(&self) -> bool {
        matches!(self, ViewMode::Help)
    }

    /// Returns true while a text field is being edited
    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self, ViewMode::EditName | ViewMode::EditThreshold)
    }

    /// Prompt shown in the footer for edit modes
    pub fn edit_label(&self) -> Option<&'static str> {
        match self {
            ViewMode::EditName => Some("Ingredient Name"),
            ViewMode::EditThreshold => Some("Lower Threshold"),
            _ => None,
        }
    }
}
