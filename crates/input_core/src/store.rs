//! Central store for field values.
//!
//! This store is UI-agnostic: it does not validate or format anything. Hosts
//! run policies and write the results back here; renderers read from it.

use crate::id::FieldId;
use crate::value::{EditResult, NumericValue};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct ValueState {
    value: NumericValue,
    /// Monotonic revision counter, incremented on any change.
    rev: u64,
}

/// Central store for per-field [`NumericValue`]s.
///
/// # Example
///
/// ```
/// use input_core::{FieldId, NumericValue, NumericValueStore};
///
/// let mut store = NumericValueStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_initial(id, NumericValue::new("12"));
/// store.ensure_initial(id, NumericValue::new("99")); // already seeded
///
/// assert_eq!(store.get(id).map(|v| v.text.as_str()), Some("12"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumericValueStore {
    values: HashMap<FieldId, ValueState>,
}

impl NumericValueStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the stored value for this field, if any.
    pub fn get(&self, id: FieldId) -> Option<&NumericValue> {
        self.values.get(&id).map(|s| &s.value)
    }

    /// Monotonic revision counter for the field's value.
    ///
    /// Increments on any change. Useful for cache invalidation.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.values.get(&id).map(|s| s.rev).unwrap_or(0)
    }

    /// Ensure an entry exists; if missing, inserts `initial` (clamped).
    ///
    /// Returns `true` if a new entry was inserted.
    pub fn ensure_initial(&mut self, id: FieldId, initial: NumericValue) -> bool {
        if self.values.contains_key(&id) {
            return false;
        }
        self.values.insert(
            id,
            ValueState {
                value: initial.clamped(),
                rev: 0,
            },
        );
        true
    }

    /// Set/overwrite the value for this field (clamped).
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, id: FieldId, value: NumericValue) -> bool {
        let value = value.clamped();
        let st = self.values.entry(id).or_default();
        if st.value == value {
            return false;
        }
        st.value = value;
        st.rev = st.rev.wrapping_add(1);
        true
    }

    /// Write an edit result back. `Rejected` never touches the store.
    ///
    /// Returns `true` if the stored value changed.
    pub fn apply(&mut self, id: FieldId, result: EditResult) -> bool {
        match result {
            EditResult::Updated(value) => self.set(id, value),
            EditResult::Rejected => false,
        }
    }

    /// Remove the field's entry, returning its last value.
    pub fn remove(&mut self, id: FieldId) -> Option<NumericValue> {
        self.values.remove(&id).map(|s| s.value)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Clear all stored values.
    ///
    /// Typically called when the set of visible fields is rebuilt.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
