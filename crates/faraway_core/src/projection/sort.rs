//! Sort projection: display ordering of the item collection.
//!
//! # Responsibility
//! - Reorder a collection snapshot for display per the selected mode.
//!
//! # Invariants
//! - The result is a permutation of the input: same items by id, nothing
//!   filtered, added, or mutated.
//! - `description` and `packed` orderings are stable; ties keep source order.

use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display ordering selected by the view. Defaults to insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Insertion order, as entered.
    #[default]
    Input,
    /// Ascending by description, case-folded.
    Description,
    /// Unpacked items first, packed items last.
    Packed,
}

impl SortMode {
    /// Stable wire/UI name for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Description => "description",
            Self::Packed => "packed",
        }
    }

    /// Parses a UI selector value (case-insensitive, surrounding whitespace
    /// ignored).
    pub fn parse(value: &str) -> Result<Self, SortModeParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "description" => Ok(Self::Description),
            "packed" => Ok(Self::Packed),
            other => Err(SortModeParseError {
                value: other.to_string(),
            }),
        }
    }
}

/// Unknown sort-mode selector value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortModeParseError {
    value: String,
}

impl Display for SortModeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort mode `{}`; expected input|description|packed",
            self.value
        )
    }
}

impl Error for SortModeParseError {}

/// Produces the display sequence for one collection snapshot.
///
/// Borrows the items rather than copying them; the borrow ties the view to
/// the snapshot, so it cannot outlive a store mutation.
pub fn display_order(items: &[Item], mode: SortMode) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            // Case-folded comparison approximates locale collation; the sort
            // is stable, so equal-folding descriptions keep source order.
            view.sort_by_cached_key(|item| item.description.to_lowercase());
        }
        SortMode::Packed => {
            // Stable partition: false sorts before true, source order kept
            // within each group.
            view.sort_by_key(|item| item.packed);
        }
    }
    view
}
