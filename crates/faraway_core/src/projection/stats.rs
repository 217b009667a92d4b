//! Stats projection: aggregate packing progress.
//!
//! # Responsibility
//! - Compute total/packed counts and the packed percentage from a snapshot.
//!
//! # Invariants
//! - `packed <= total`.
//! - `percentage` is `None` exactly when the list is empty; the empty-state
//!   message is a presentation concern built on top of that.
//! - Rounding rule is fixed: nearest integer, halves away from zero.

use crate::model::item::Item;
use serde::Serialize;

/// Aggregate counts derived from one collection snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackingStats {
    /// Number of items on the list.
    pub total: usize,
    /// Number of items already packed.
    pub packed: usize,
    /// Packed share in percent, rounded half-away-from-zero.
    /// `None` when the list is empty.
    pub percentage: Option<u8>,
}

/// Computes packing statistics for one collection snapshot.
pub fn packing_stats(items: &[Item]) -> PackingStats {
    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    let percentage = (total > 0).then(|| round_percentage(packed, total));
    PackingStats {
        total,
        packed,
        percentage,
    }
}

// Integer round-half-away-from-zero of `packed / total * 100`.
// Callers guarantee `total > 0` and `packed <= total`, so the result fits u8.
fn round_percentage(packed: usize, total: usize) -> u8 {
    ((packed * 200 + total) / (total * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::round_percentage;

    #[test]
    fn rounds_thirds_to_nearest() {
        assert_eq!(round_percentage(1, 3), 33);
        assert_eq!(round_percentage(2, 3), 67);
    }

    #[test]
    fn rounds_halves_away_from_zero() {
        assert_eq!(round_percentage(1, 8), 13);
        assert_eq!(round_percentage(1, 2), 50);
        assert_eq!(round_percentage(3, 8), 38);
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(round_percentage(0, 7), 0);
        assert_eq!(round_percentage(7, 7), 100);
    }
}
