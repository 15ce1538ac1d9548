//! Owner of the ingredient collection
//!
//! The controller is the only place ingredients are mutated. Consumers that
//! need to react to edits register a listener; listeners run synchronously,
//! in subscription order, after the change has been applied.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{InventoryError, InventoryResult};
use crate::gauge::{validate_threshold, FillState, ValidationResult};

use super::{sample_ingredients, Ingredient, IngredientId};

/// What to do with a threshold edit that fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdPolicy {
    /// Store the value and report it as invalid
    #[default]
    AcceptAndFlag,
    /// Leave the stored value untouched
    RejectInvalid,
}

impl ThresholdPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ThresholdPolicy::AcceptAndFlag => "accept-and-flag",
            ThresholdPolicy::RejectInvalid => "reject-invalid",
        }
    }
}

/// Result of a threshold edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdUpdate {
    /// Validation of the submitted value
    pub validation: ValidationResult,
    /// Whether the value was written to the ingredient
    pub committed: bool,
}

/// Notification sent to listeners after a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    NameChanged {
        id: IngredientId,
        name: String,
    },
    ThresholdChanged {
        id: IngredientId,
        value: f64,
        validation: ValidationResult,
    },
    /// Invalid value dropped under [`ThresholdPolicy::RejectInvalid`]
    ThresholdRejected {
        id: IngredientId,
        value: f64,
    },
}

impl InventoryEvent {
    pub fn id(&self) -> IngredientId {
        match self {
            InventoryEvent::NameChanged { id, .. }
            | InventoryEvent::ThresholdChanged { id, .. }
            | InventoryEvent::ThresholdRejected { id, .. } => *id,
        }
    }
}

/// Handle returned by [`IngredientController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&InventoryEvent)>;

/// Single owned ingredient collection plus its listeners
pub struct IngredientController {
    ingredients: Vec<Ingredient>,
    policy: ThresholdPolicy,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl IngredientController {
    /// Creates a controller over the given collection.
    pub fn new(ingredients: Vec<Ingredient>, policy: ThresholdPolicy) -> Self {
        Self {
            ingredients,
            policy,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a controller seeded with the sample ingredients.
    pub fn with_samples(policy: ThresholdPolicy) -> Self {
        Self::new(sample_ingredients(), policy)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn get(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Ingredients whose threshold is valid and whose stock is below it
    pub fn low_stock(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| {
            i.threshold_status().is_valid()
                && i.geometry(1.0).fill_state == FillState::Low
        })
    }

    /// Renames an ingredient.
    ///
    /// # Errors
    /// [`InventoryError::UnknownIngredient`] if `id` is not in the collection.
    pub fn update_name(&mut self, id: IngredientId, value: impl Into<String>) -> InventoryResult<()> {
        let value = value.into();
        let ingredient = self.find_mut(id)?;
        debug!(%id, old = %ingredient.name, new = %value, "renaming ingredient");
        ingredient.name = value.clone();

        self.notify(&InventoryEvent::NameChanged { id, name: value });
        Ok(())
    }

    /// Sets an ingredient's lower threshold, subject to the policy.
    ///
    /// The returned [`ThresholdUpdate`] carries the validation result in
    /// both cases; an invalid value is never an `Err`.
    ///
    /// # Errors
    /// [`InventoryError::UnknownIngredient`] if `id` is not in the collection.
    pub fn update_threshold(&mut self, id: IngredientId, value: f64) -> InventoryResult<ThresholdUpdate> {
        let validation = validate_threshold(value);
        let commit = validation.is_valid() || self.policy == ThresholdPolicy::AcceptAndFlag;

        let ingredient = self.find_mut(id)?;
        let event = if commit {
            ingredient.lower_threshold = value;
            if validation.is_error() {
                warn!(%id, value, "stored invalid threshold");
            } else {
                info!(%id, value, "threshold updated");
            }
            InventoryEvent::ThresholdChanged { id, value, validation }
        } else {
            warn!(%id, value, "rejected invalid threshold");
            InventoryEvent::ThresholdRejected { id, value }
        };

        self.notify(&event);
        Ok(ThresholdUpdate {
            validation,
            committed: commit,
        })
    }

    /// Registers a listener called after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&InventoryEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn find_mut(&mut self, id: IngredientId) -> InventoryResult<&mut Ingredient> {
        self.ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(InventoryError::UnknownIngredient(id))
    }

    fn notify(&mut self, event: &InventoryEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl Default for IngredientController {
    fn default() -> Self {
        Self::with_samples(ThresholdPolicy::default())
    }
}
