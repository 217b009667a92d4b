//! In-memory item store.
//!
//! # Responsibility
//! - Hold the canonical insertion-ordered collection of items.
//! - Expose the only mutation operations: add, delete, toggle, clear-all.
//!
//! # Invariants
//! - All ids in the collection are pairwise distinct.
//! - Insertion order is canonical; delete and toggle preserve the relative
//!   order of every other entry.
//! - `delete`/`toggle` with an unknown id are no-ops, so stale references
//!   (double-clicks, outdated row numbers) degrade safely.
//! - Log events carry metadata only (ids, counts), never item text.

use crate::model::item::{Item, ItemId};
use log::debug;
use uuid::Uuid;

/// Source of fresh item identifiers.
///
/// Kept as a trait so the store can be driven by a deterministic source in
/// tests while production uses random UUIDs.
pub trait IdSource {
    /// Returns an id never handed out before by this source.
    fn next_id(&mut self) -> ItemId;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> ItemId {
        Uuid::new_v4()
    }
}

/// Deterministic counter-backed id source for tests and reproducible runs.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
    next: u128,
}

impl SequentialIdSource {
    /// Starts the sequence at 1 (the nil UUID is never produced).
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> ItemId {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

/// Authoritative ordered collection of packing items.
pub struct ItemStore<G: IdSource = UuidIdSource> {
    items: Vec<Item>,
    ids: G,
}

impl ItemStore {
    /// Creates an empty store with the production UUID id source.
    pub fn new() -> Self {
        Self::with_id_source(UuidIdSource)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdSource> ItemStore<G> {
    /// Creates an empty store driven by the provided id source.
    pub fn with_id_source(ids: G) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Appends a new unpacked item and returns a copy of the stored value.
    ///
    /// # Contract
    /// The caller has already validated that `description` is non-empty and
    /// `quantity` is in `[QUANTITY_MIN, QUANTITY_MAX]`; the store trusts its
    /// inputs and never rejects an add.
    pub fn add(&mut self, description: impl Into<String>, quantity: u8) -> Item {
        let item = Item::new(self.ids.next_id(), description, quantity);
        self.items.push(item.clone());
        debug!(
            "event=item_added module=store id={} quantity={} total={}",
            item.id,
            item.quantity,
            self.items.len()
        );
        item
    }

    /// Removes the item with matching id, if present.
    pub fn delete(&mut self, id: ItemId) {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                debug!(
                    "event=item_deleted module=store id={} total={}",
                    id,
                    self.items.len()
                );
            }
            None => {
                debug!("event=item_delete_skipped module=store id={id} status=not_found");
            }
        }
    }

    /// Replaces the item with matching id by a packed-inverted copy in place.
    pub fn toggle(&mut self, id: ItemId) {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let toggled = self.items[index].toggled();
                debug!(
                    "event=item_toggled module=store id={} packed={}",
                    id, toggled.packed
                );
                self.items[index] = toggled;
            }
            None => {
                debug!("event=item_toggle_skipped module=store id={id} status=not_found");
            }
        }
    }

    /// Empties the collection unconditionally.
    ///
    /// Destructive and irreversible. The calling layer obtains user
    /// confirmation before invoking this; the store performs the clear once
    /// called.
    pub fn clear_all(&mut self) {
        let cleared = self.items.len();
        self.items.clear();
        debug!("event=list_cleared module=store cleared={cleared}");
    }

    /// Current collection snapshot in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up one item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items currently on the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
