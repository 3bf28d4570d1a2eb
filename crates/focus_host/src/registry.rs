use crate::endpoint::EndpointHandle;
use crate::overrides::{HookKind, OverrideActions};
use input_core::{FieldId, NumericValue, NumericValueStore};
use input_policy::Policy;
use std::collections::HashMap;

/// What the host remembers about a registered field.
#[derive(Clone, Debug)]
pub(crate) struct Registration {
    pub(crate) handle: EndpointHandle,
    /// Snapshot taken at registration; re-register to pick up a new policy.
    pub(crate) policy: Policy,
}

/// Registrations, values and override hooks, keyed by field.
#[derive(Debug, Default)]
pub(crate) struct FieldRegistry {
    fields: HashMap<FieldId, Registration>,
    values: NumericValueStore,
    overrides: HashMap<FieldId, OverrideActions>,
}

impl FieldRegistry {
    /// Record a registration, replacing any earlier one for `id`.
    ///
    /// Returns `true` if `id` was already registered.
    pub(crate) fn insert(
        &mut self,
        id: FieldId,
        registration: Registration,
        initial: NumericValue,
    ) -> bool {
        self.values.ensure_initial(id, initial);
        self.fields.insert(id, registration).is_some()
    }

    pub(crate) fn remove(&mut self, id: FieldId) -> bool {
        self.overrides.remove(&id);
        self.values.remove(id);
        self.fields.remove(&id).is_some()
    }

    #[inline]
    pub(crate) fn get(&self, id: FieldId) -> Option<&Registration> {
        self.fields.get(&id)
    }

    #[inline]
    pub(crate) fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub(crate) fn values(&self) -> &NumericValueStore {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut NumericValueStore {
        &mut self.values
    }

    pub(crate) fn set_overrides(&mut self, id: FieldId, actions: OverrideActions) {
        if actions.is_empty() {
            self.overrides.remove(&id);
        } else {
            self.overrides.insert(id, actions);
        }
    }

    pub(crate) fn clear_overrides(&mut self, id: FieldId) -> Option<OverrideActions> {
        self.overrides.remove(&id)
    }

    /// Run `id`'s hook of `kind`; `false` when none is set.
    pub(crate) fn run_hook(&mut self, id: FieldId, kind: HookKind) -> bool {
        self.overrides
            .get_mut(&id)
            .is_some_and(|actions| actions.run(kind, id))
    }
}
