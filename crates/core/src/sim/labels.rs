//! Label definitions shared by every load of a VM.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::common::LoadError;
use crate::isa::Label;

/// Maps each defined label to the program index execution continues at.
///
/// The target is the index just after the label's `Mark`. A label can be
/// defined once per VM; later `Mark`s of the same label are rejected.
/// References are resolved when the jump executes, so forward jumps work
/// across loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    targets: HashMap<Label, usize>,
}

impl LabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `label` to jump to `target`.
    ///
    /// # Errors
    ///
    /// [`LoadError::DuplicateLabel`] if the label is already defined; the
    /// existing definition is kept.
    pub fn define(&mut self, label: Label, target: usize) -> Result<(), LoadError> {
        match self.targets.entry(label) {
            Entry::Occupied(_) => Err(LoadError::DuplicateLabel),
            Entry::Vacant(slot) => {
                let _ = slot.insert(target);
                Ok(())
            }
        }
    }

    /// Jump target of `label`, if defined.
    #[inline]
    pub fn resolve(&self, label: &Label) -> Option<usize> {
        self.targets.get(label).copied()
    }

    /// Returns `true` if `label` is defined.
    pub fn contains(&self, label: &Label) -> bool {
        self.targets.contains_key(label)
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if no label is defined.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterates over `(label, target)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> {
        self.targets.iter().map(|(l, &t)| (l, t))
    }
}
