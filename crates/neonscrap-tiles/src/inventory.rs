use hashbrown::HashMap;

use crate::kind::TileKind;

/// Item counts keyed by tile kind. A missing entry means zero; entries that
/// drop to zero or below are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: HashMap<TileKind, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting kit: a single tier-1 pickaxe.
    pub fn starter() -> Self {
        let mut inv = Self::new();
        inv.apply(TileKind::Pickaxe, 1);
        inv
    }

    #[inline]
    pub fn count(&self, kind: TileKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    #[inline]
    pub fn has(&self, kind: TileKind, amount: u32) -> bool {
        self.count(kind) >= amount
    }

    /// Adds `delta` (negative removes). Returns the new count.
    pub fn apply(&mut self, kind: TileKind, delta: i32) -> u32 {
        let next = self.count(kind) as i64 + delta as i64;
        if next <= 0 {
            self.counts.remove(&kind);
            0
        } else {
            let next = next.min(u32::MAX as i64) as u32;
            self.counts.insert(kind, next);
            next
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Entries sorted by kind ordinal.
    pub fn entries(&self) -> Vec<(TileKind, u32)> {
        let mut v: Vec<_> = self.counts.iter().map(|(k, c)| (*k, *c)).collect();
        v.sort_unstable_by_key(|(k, _)| *k);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_zero() {
        let inv = Inventory::new();
        assert_eq!(inv.count(TileKind::Concrete), 0);
        assert!(!inv.has(TileKind::Concrete, 1));
    }

    #[test]
    fn dropping_to_zero_removes_entry() {
        let mut inv = Inventory::new();
        inv.apply(TileKind::Concrete, 3);
        assert_eq!(inv.apply(TileKind::Concrete, -3), 0);
        assert!(inv.is_empty());
        inv.apply(TileKind::Concrete, -5);
        assert!(inv.is_empty());
    }

    #[test]
    fn starter_has_pickaxe() {
        let inv = Inventory::starter();
        assert_eq!(inv.entries(), vec![(TileKind::Pickaxe, 1)]);
    }
}
