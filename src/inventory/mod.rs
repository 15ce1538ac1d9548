//! Ingredient model and the controller that owns the collection

mod controller;
mod ingredient;

pub use controller::{
    IngredientController, InventoryEvent, SubscriptionId, ThresholdPolicy, ThresholdUpdate,
};
pub use ingredient::{sample_ingredients, Ingredient, IngredientId};
