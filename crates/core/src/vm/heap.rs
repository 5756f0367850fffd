//! Sparse integer heap.

use std::collections::HashMap;

/// Heap memory addressed by arbitrary `i64` keys.
///
/// Only written cells are stored; reading any other address yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heap {
    cells: HashMap<i64, i64>,
}

impl Heap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `address`, 0 if never written.
    #[inline]
    pub fn load(&self, address: i64) -> i64 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    /// Writes `value` at `address`.
    #[inline]
    pub fn store(&mut self, address: i64, value: i64) {
        let _ = self.cells.insert(address, value);
    }

    /// Value at `address` only if it has been written.
    pub fn get(&self, address: i64) -> Option<i64> {
        self.cells.get(&address).copied()
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Written cells sorted by address.
    pub fn sorted(&self) -> Vec<(i64, i64)> {
        let mut cells: Vec<_> = self.cells.iter().map(|(&a, &v)| (a, v)).collect();
        cells.sort_unstable_by_key(|&(a, _)| a);
        cells
    }
}

impl FromIterator<(i64, i64)> for Heap {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
