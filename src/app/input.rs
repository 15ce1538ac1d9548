//! Input/keyboard event handling
//!
//! This module handles all keyboard input for the different application modes:
//! - Dashboard (ingredient list navigation)
//! - Grocery list
//! - Edit modes (text input for name and threshold)
//! - Help overlay

use crossterm::event::{KeyCode, KeyModifiers};

use super::{App, ViewMode};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue running the application
    Continue,
    /// Exit the application
    Exit,
}

impl App {
    /// Routes a key press to the handler for the current mode.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Exit;
        }

        // Clear status message on any key press
        self.status_message = None;
        self.invalidate();

        match self.view_mode {
            ViewMode::Help => self.handle_help_key(code),
            ViewMode::EditName | ViewMode::EditThreshold => self.handle_edit_key(code),
            ViewMode::GroceryList => self.handle_grocery_key(code),
            ViewMode::Dashboard => self.handle_dashboard_key(code),
        }
    }

    /// Handles key events when help overlay is shown
    fn handle_help_key(&mut self, _code: KeyCode) -> KeyAction {
        // Any key closes help
        self.view_mode = self.help_return;
        KeyAction::Continue
    }

    /// Shows help over the current view, remembering where to return
    fn open_help(&mut self) {
        self.help_return = self.view_mode;
        self.view_mode = ViewMode::Help;
    }

    /// Handles key events in the name and threshold editors
    fn handle_edit_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => self.edit_buffer.push(c),
            _ => {}
        }
        KeyAction::Continue
    }

    /// Handles key events in the grocery list
    fn handle_grocery_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Exit,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('G') => {
                self.view_mode = ViewMode::Dashboard;
            }
            KeyCode::Char('?') => self.open_help(),
            _ => {}
        }
        KeyAction::Continue
    }

    /// Handles key events on the dashboard.
    /// Returns `KeyAction::Exit` if the application should quit.
    fn handle_dashboard_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Exit,
            KeyCode::Char('n') | KeyCode::Char('N') => self.begin_edit_name(),
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                self.begin_edit_threshold()
            }
            KeyCode::Char('g') | KeyCode::Char('G') => self.view_mode = ViewMode::GroceryList,
            KeyCode::Char('?') => self.open_help(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.jump_to_start(),
            KeyCode::End => self.jump_to_end(),
            _ => {}
        }
        KeyAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{IngredientController, IngredientId};

    fn press(app: &mut App, code: KeyCode) -> KeyAction {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(IngredientController::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Exit);
        assert_eq!(
            app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Exit
        );
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut app = App::new(IngredientController::default());
        press(&mut app, KeyCode::Char('n'));
        app.edit_buffer.clear();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(app.edit_buffer, "q");
    }

    #[test]
    fn test_threshold_edit_flow() {
        let mut app = App::new(IngredientController::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.edit_buffer, "150");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "75");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.view_mode, ViewMode::Dashboard);
        assert_eq!(app.inventory.get(IngredientId(2)).unwrap().lower_threshold, 175.0);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = App::new(IngredientController::default());
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.view_mode, ViewMode::Dashboard);
        assert_eq!(app.inventory.get(IngredientId(1)).unwrap().name, "Ingredient 1");
    }

    #[test]
    fn test_grocery_and_help_toggle() {
        let mut app = App::new(IngredientController::default());
        press(&mut app, KeyCode::Char('g'));
        assert!(app.view_mode.is_grocery_list());
        press(&mut app, KeyCode::Esc);
        assert!(app.view_mode.is_dashboard());

        press(&mut app, KeyCode::Char('?'));
        assert!(app.view_mode.is_help());
        press(&mut app, KeyCode::Char('x'));
        assert!(app.view_mode.is_dashboard());
    }

    #[test]
    fn test_help_returns_to_grocery_list() {
        let mut app = App::new(IngredientController::default());
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.view_mode.is_help());

        press(&mut app, KeyCode::Enter);
        assert!(app.view_mode.is_grocery_list());

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Esc);
        assert!(app.view_mode.is_dashboard());
    }
}
