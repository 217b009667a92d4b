//! Packing item domain model.
//!
//! # Responsibility
//! - Define the single entity of the system: one checklist entry.
//! - Model the packed-flag flip as a value copy, not shared mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another item within a session.
//! - `description` and `quantity` are immutable after creation; `packed` is
//!   the only field that ever changes, and only via [`Item::toggled`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every item created during a session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Smallest quantity the entry form offers.
pub const QUANTITY_MIN: u8 = 1;
/// Largest quantity the entry form offers.
pub const QUANTITY_MAX: u8 = 20;

/// One packing-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id assigned at creation.
    pub id: ItemId,
    /// What to pack. Non-empty by caller contract.
    pub description: String,
    /// How many to pack, in `[QUANTITY_MIN, QUANTITY_MAX]` by caller contract.
    pub quantity: u8,
    /// Whether the item is already in the bag.
    pub packed: bool,
}

impl Item {
    /// Creates an unpacked item with a caller-provided stable id.
    ///
    /// # Contract
    /// The boundary that accepts user input guarantees `description` is
    /// non-empty and `quantity` lies in `[QUANTITY_MIN, QUANTITY_MAX]`.
    /// This constructor trusts both; it performs no validation.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u8) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Returns a copy of this item with `packed` inverted.
    ///
    /// All other fields, including `id`, are unchanged, so the copy replaces
    /// the original in the collection without disturbing identity or order.
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}
