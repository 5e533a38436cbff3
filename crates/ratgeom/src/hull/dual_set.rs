//! Append-only set that stores an item or its dual, never both.

use std::collections::HashMap;
use std::hash::Hash;

/// Items in insertion order plus an index map, keyed so that an item and
/// `dual(item)` share one slot.
///
/// Slot `i` holds the stored orientation; index `!i` (bitwise complement,
/// always negative) names the dual of what slot `i` holds. With the edge
/// reversal as `dual`, this indexes undirected edges while keeping direction
/// in the sign of the index.
#[derive(Clone, Debug)]
pub struct DualIndexedSet<T, F> {
    items: Vec<T>,
    indices: HashMap<T, usize>,
    dual: F,
}

impl<T, F> DualIndexedSet<T, F>
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> T,
{
    pub fn new(dual: F) -> Self {
        Self {
            items: Vec::new(),
            indices: HashMap::new(),
            dual,
        }
    }

    /// Number of slots (an item and its dual count once).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Slot of `item`, complemented when only its dual is stored.
    pub fn index_of(&self, item: &T) -> Option<isize> {
        if let Some(&i) = self.indices.get(item) {
            return Some(i as isize);
        }
        self.indices.get(&(self.dual)(item)).map(|&i| !(i as isize))
    }

    /// Item at `index`; a negative index yields the dual of slot `!index`.
    pub fn get(&self, index: isize) -> Option<T> {
        if index < 0 {
            self.items.get(!index as usize).map(|t| (self.dual)(t))
        } else {
            self.items.get(index as usize).cloned()
        }
    }

    /// Index of `item`, inserting it first if neither it nor its dual is
    /// present. The flag is true iff a new slot was created.
    pub fn ensure_added(&mut self, item: T) -> (isize, bool) {
        if let Some(index) = self.index_of(&item) {
            return (index, false);
        }
        let slot = self.items.len();
        self.indices.insert(item.clone(), slot);
        self.items.push(item);
        (slot as isize, true)
    }

    /// Stored orientations in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}
