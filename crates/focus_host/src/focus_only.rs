use crate::endpoint::{EndpointHandle, EndpointTable, FieldEndpoint};
use crate::error::FocusError;
use crate::overrides::OverrideActions;
use crate::{FocusHost, HostConfig, KeyOutcome, OrderOptions};
use input_core::{FieldId, NumericValue, NumpadKey};
use keypad_layout::{KeyboardLayout, LayoutContext};

/// Host for exactly one field without tab order, e.g. a standalone popover.
///
/// `Next` and `Prev` keys do nothing. Registering a second field replaces
/// the first and inherits its overrides.
#[derive(Debug)]
pub struct FocusOnlyHost {
    inner: FocusHost,
    field: Option<FieldId>,
    /// Overrides set before any field was known.
    overrides: Option<OverrideActions>,
}

impl Default for FocusOnlyHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusOnlyHost {
    pub fn new() -> Self {
        Self {
            inner: FocusHost::new(HostConfig {
                wrap: false,
                enforce_order: true,
            }),
            field: None,
            overrides: None,
        }
    }

    /// The one field this host serves, if any.
    #[inline]
    pub fn field(&self) -> Option<FieldId> {
        self.field
    }

    pub fn register<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        handle: EndpointHandle,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        self.register_with_value(id, handle, NumericValue::empty(), endpoints)
    }

    pub fn register_with_value<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        handle: EndpointHandle,
        initial: NumericValue,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        if !endpoints.is_mounted(handle) {
            return Err(FocusError::Unmounted(id));
        }
        self.adopt(id, endpoints)?;
        self.inner.register_with_value(id, handle, initial, endpoints)
    }

    /// Make `id` the served field, moving overrides over from the previous
    /// one.
    fn adopt<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        let previous = self.field.filter(|p| *p != id);
        // Dropping the old id from the order resigns it if it was active.
        self.inner
            .set_order([id], OrderOptions::default(), endpoints)?;
        let carried = match previous {
            Some(previous) => {
                log::debug!(target: "focus_host", "focus-only host replaces {previous} with {id}");
                let carried = self.inner.clear_overrides(previous);
                self.inner.unregister(previous);
                carried
            }
            None => None,
        };
        self.field = Some(id);
        if let Some(actions) = carried.or_else(|| self.overrides.take()) {
            self.inner.set_overrides(id, actions);
        }
        Ok(())
    }

    /// Unregister the field. Its overrides stay with the host for the next
    /// registration.
    pub fn unregister(&mut self, id: FieldId) -> bool {
        let kept = if self.field == Some(id) {
            self.inner.clear_overrides(id)
        } else {
            None
        };
        let removed = self.inner.unregister(id);
        if let Some(actions) = kept {
            self.inner.set_overrides(id, actions);
        }
        removed
    }

    /// Install hooks for the served field, or keep them until a field is
    /// registered or activated.
    pub fn set_overrides(&mut self, actions: OverrideActions) {
        match self.field {
            Some(id) => self.inner.set_overrides(id, actions),
            None => self.overrides = Some(actions),
        }
    }

    pub fn set_scroll_into_view(&mut self, callback: impl FnMut(FieldId) + 'static) {
        self.inner.set_scroll_into_view(callback);
    }

    /// Activate the field (`Some(id)`) or clear focus (`None`).
    ///
    /// With no registered field, `id` is adopted and its activation stays
    /// pending until it registers. While another field is registered, any
    /// other id is [`FocusError::NotInOrder`].
    pub fn set_active<E: FieldEndpoint>(
        &mut self,
        target: Option<FieldId>,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        if let Some(id) = target
            && self.field != Some(id)
            && !self.field.is_some_and(|field| self.inner.is_registered(field))
        {
            self.adopt(id, endpoints)?;
        }
        self.inner.set_active(target, endpoints)
    }

    pub fn done<E: FieldEndpoint>(&mut self, endpoints: &mut EndpointTable<E>) {
        self.inner.done(endpoints);
    }

    pub fn handle_key<E: FieldEndpoint>(
        &mut self,
        key: &NumpadKey,
        endpoints: &mut EndpointTable<E>,
    ) -> KeyOutcome {
        match key {
            NumpadKey::Next | NumpadKey::Prev => {
                log::trace!(target: "focus_host.keys", "key {key} ignored by focus-only host");
                KeyOutcome::Ignored
            }
            _ => self.inner.handle_key(key, endpoints),
        }
    }

    pub fn paste<E: FieldEndpoint>(
        &mut self,
        text: &str,
        endpoints: &mut EndpointTable<E>,
    ) -> KeyOutcome {
        self.inner.paste(text, endpoints)
    }

    #[inline]
    pub fn active_id(&self) -> Option<FieldId> {
        self.inner.active_id()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    pub fn value(&self, id: FieldId) -> Option<&NumericValue> {
        self.inner.value(id)
    }

    /// Keypad without navigation keys.
    pub fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        self.inner.active_layout(LayoutContext::STANDALONE)
    }
}
