use crate::endpoint::{EndpointHandle, EndpointTable, FieldEndpoint};
use crate::error::FocusError;
use crate::overrides::{HookKind, OverrideActions};
use crate::registry::{FieldRegistry, Registration};
use crate::{FocusDirection, HostConfig, KeyOutcome, OrderOptions};
use input_core::{EditResult, FieldId, NumericValue, NumpadKey};
use input_policy::{InputPolicy, Policy};
use keypad_layout::{KeyboardLayout, LayoutContext};
use std::collections::HashSet;
use std::fmt;

type ScrollCallback = Box<dyn FnMut(FieldId)>;

/// Routes keypad input to the active field and moves focus along a tab order.
///
/// The host owns values, policies snapshots, the tab order and the active id.
/// Endpoints stay owned by the integrator's [`EndpointTable`], which every
/// call that may notify an endpoint borrows.
pub struct FocusHost {
    config: HostConfig,
    registry: FieldRegistry,
    order: Vec<FieldId>,
    active: Option<FieldId>,
    /// Active id whose activation has not reached an endpoint yet.
    pending: bool,
    scroll_into_view: Option<ScrollCallback>,
}

impl Default for FocusHost {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl fmt::Debug for FocusHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusHost")
            .field("config", &self.config)
            .field("fields", &self.registry.len())
            .field("order", &self.order)
            .field("active", &self.active)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl FocusHost {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            registry: FieldRegistry::default(),
            order: Vec::new(),
            active: None,
            pending: false,
            scroll_into_view: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    // ---- registration ------------------------------------------------

    /// Register the endpoint behind `handle` as field `id`, seeding an empty
    /// value if the field has none.
    pub fn register<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        handle: EndpointHandle,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        self.register_with_value(id, handle, NumericValue::empty(), endpoints)
    }

    /// Like [`register`](Self::register), seeding `initial` instead.
    ///
    /// An existing value always wins over `initial`. Registering the active
    /// id delivers its activation right away.
    pub fn register_with_value<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        handle: EndpointHandle,
        initial: NumericValue,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        let endpoint = endpoints.get(handle).ok_or(FocusError::Unmounted(id))?;
        if endpoint.id() != id {
            log::warn!(
                target: "focus_host",
                "endpoint reports {} but is registered as {id}",
                endpoint.id()
            );
        }
        let registration = Registration {
            handle,
            policy: endpoint.input_policy().clone(),
        };
        let replaced = self.registry.insert(id, registration, initial.clamped());
        log::debug!(
            target: "focus_host",
            "register {id} ({}){}",
            endpoint.input_policy().kind(),
            if replaced { ", replacing earlier registration" } else { "" }
        );

        if let Some(value) = self.registry.values().get(id)
            && let Some(endpoint) = endpoints.get_mut(handle)
        {
            endpoint.apply(value);
        }
        if self.active == Some(id) {
            self.deliver_activation(id, endpoints);
        }
        Ok(())
    }

    /// Forget `id`: its registration, value and overrides.
    ///
    /// The active id is left in place. If `id` was active its activation
    /// becomes pending again and completes when `id` registers anew.
    pub fn unregister(&mut self, id: FieldId) -> bool {
        let removed = self.registry.remove(id);
        if removed && self.active == Some(id) {
            self.pending = true;
        }
        log::debug!(target: "focus_host", "unregister {id} (removed={removed})");
        removed
    }

    pub fn set_overrides(&mut self, id: FieldId, actions: OverrideActions) {
        self.registry.set_overrides(id, actions);
    }

    pub fn clear_overrides(&mut self, id: FieldId) -> Option<OverrideActions> {
        self.registry.clear_overrides(id)
    }

    pub fn set_scroll_into_view(&mut self, callback: impl FnMut(FieldId) + 'static) {
        self.scroll_into_view = Some(Box::new(callback));
    }

    // ---- order and focus ---------------------------------------------

    /// Replace the tab order.
    ///
    /// If the active field is missing from `ids`, `options` decide between
    /// appending it, moving focus to the first entry, or clearing focus.
    pub fn set_order<E: FieldEndpoint>(
        &mut self,
        ids: impl IntoIterator<Item = FieldId>,
        options: OrderOptions,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        let ids: Vec<FieldId> = ids.into_iter().collect();
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
            return Err(FocusError::DuplicateInOrder(*dup));
        }
        self.order = ids;
        log::debug!(target: "focus_host", "order set to {} fields", self.order.len());

        let Some(active) = self.active else {
            return Ok(());
        };
        if self.order.contains(&active) {
            return Ok(());
        }
        if options.auto_insert_active_if_missing {
            log::debug!(target: "focus_host", "appending active {active} to order");
            self.order.push(active);
        } else if options.preserve_active {
            let first = self.order.first().copied();
            self.activate(first, endpoints);
        } else {
            self.activate(None, endpoints);
        }
        Ok(())
    }

    /// Make `target` the active field, or clear focus with `None`.
    ///
    /// Activating the already active id does nothing. With
    /// [`HostConfig::enforce_order`] set, ids outside the order are refused
    /// and focus stays where it was.
    pub fn set_active<E: FieldEndpoint>(
        &mut self,
        target: Option<FieldId>,
        endpoints: &mut EndpointTable<E>,
    ) -> Result<(), FocusError> {
        if let Some(id) = target
            && self.config.enforce_order
            && !self.order.contains(&id)
        {
            return Err(FocusError::NotInOrder(id));
        }
        self.activate(target, endpoints);
        Ok(())
    }

    pub fn focus_next<E: FieldEndpoint>(&mut self, endpoints: &mut EndpointTable<E>) {
        self.navigate(FocusDirection::Next, endpoints);
    }

    pub fn focus_prev<E: FieldEndpoint>(&mut self, endpoints: &mut EndpointTable<E>) {
        self.navigate(FocusDirection::Prev, endpoints);
    }

    /// Default focus movement, skipping `on_next`/`on_prev` hooks.
    ///
    /// For apps whose hook intercepted navigation and now want to advance.
    pub fn move_focus<E: FieldEndpoint>(
        &mut self,
        direction: FocusDirection,
        endpoints: &mut EndpointTable<E>,
    ) {
        let target = self.adjacent(direction);
        log::debug!(
            target: "focus_host",
            "move {direction:?} from {:?} to {:?}",
            self.active,
            target
        );
        self.activate(target, endpoints);
    }

    /// Finish editing: the `on_done` hook, or else clear focus.
    pub fn done<E: FieldEndpoint>(&mut self, endpoints: &mut EndpointTable<E>) {
        if let Some(id) = self.active
            && self.registry.run_hook(id, HookKind::Done)
        {
            log::debug!(target: "focus_host", "done handled by {id} override");
            return;
        }
        self.activate(None, endpoints);
    }

    fn navigate<E: FieldEndpoint>(
        &mut self,
        direction: FocusDirection,
        endpoints: &mut EndpointTable<E>,
    ) {
        let kind = match direction {
            FocusDirection::Next => HookKind::Next,
            FocusDirection::Prev => HookKind::Prev,
        };
        if let Some(id) = self.active
            && self.registry.run_hook(id, kind)
        {
            log::debug!(target: "focus_host", "{direction:?} handled by {id} override");
            return;
        }
        self.move_focus(direction, endpoints);
    }

    /// The id focus moves to, or `None` to dismiss at a boundary.
    fn adjacent(&self, direction: FocusDirection) -> Option<FieldId> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        let current = self
            .active
            .and_then(|id| self.order.iter().position(|o| *o == id));
        let index = match (current, direction) {
            (None, FocusDirection::Next) => Some(0),
            (None, FocusDirection::Prev) => Some(len - 1),
            (Some(i), FocusDirection::Next) if i + 1 < len => Some(i + 1),
            (Some(i), FocusDirection::Prev) if i > 0 => Some(i - 1),
            (Some(_), FocusDirection::Next) => self.config.wrap.then_some(0),
            (Some(_), FocusDirection::Prev) => self.config.wrap.then_some(len - 1),
        };
        index.map(|i| self.order[i])
    }

    fn activate<E: FieldEndpoint>(
        &mut self,
        target: Option<FieldId>,
        endpoints: &mut EndpointTable<E>,
    ) {
        if target == self.active {
            return;
        }
        if let Some(previous) = self.active {
            self.resign(previous, endpoints);
        }
        log::debug!(target: "focus_host", "active {:?} -> {:?}", self.active, target);
        self.active = target;
        self.pending = false;
        if let Some(id) = target {
            self.deliver_activation(id, endpoints);
        }
    }

    fn deliver_activation<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        endpoints: &mut EndpointTable<E>,
    ) {
        let Some(handle) = self.registry.get(id).map(|r| r.handle) else {
            log::debug!(target: "focus_host", "activation of {id} pending registration");
            self.pending = true;
            return;
        };
        if !endpoints.is_mounted(handle) {
            log::warn!(target: "focus_host", "stale endpoint handle for {id}; activation pending");
            self.pending = true;
            return;
        }
        self.pending = false;
        if !self.registry.run_hook(id, HookKind::BecomeActive)
            && let Some(endpoint) = endpoints.get_mut(handle)
        {
            endpoint.become_active();
        }
        if let Some(scroll) = self.scroll_into_view.as_mut() {
            scroll(id);
        }
    }

    /// Finalize the display value and notify the field it lost focus.
    fn resign<E: FieldEndpoint>(&mut self, id: FieldId, endpoints: &mut EndpointTable<E>) {
        let Some(registration) = self.registry.get(id) else {
            return;
        };
        let handle = registration.handle;
        if let Some(value) = self.registry.values().get(id) {
            let finalized = registration.policy.finalize_display(value);
            if self.registry.values_mut().set(id, finalized)
                && let Some(endpoint) = endpoints.get_mut(handle)
                && let Some(value) = self.registry.values().get(id)
            {
                endpoint.apply(value);
            }
        }
        if self.pending {
            return;
        }
        if self.registry.run_hook(id, HookKind::ResignActive) {
            return;
        }
        match endpoints.get_mut(handle) {
            Some(endpoint) => endpoint.resign_active(),
            None => log::warn!(target: "focus_host", "stale endpoint handle for {id} on resign"),
        }
    }

    // ---- editing -----------------------------------------------------

    /// Route one key: navigation keys move focus, everything else edits the
    /// active field through its policy.
    pub fn handle_key<E: FieldEndpoint>(
        &mut self,
        key: &NumpadKey,
        endpoints: &mut EndpointTable<E>,
    ) -> KeyOutcome {
        log::trace!(target: "focus_host.keys", "key {key} for {:?}", self.active);
        match key {
            NumpadKey::Next => {
                self.focus_next(endpoints);
                KeyOutcome::Navigated
            }
            NumpadKey::Prev => {
                self.focus_prev(endpoints);
                KeyOutcome::Navigated
            }
            NumpadKey::Done => {
                self.done(endpoints);
                KeyOutcome::Navigated
            }
            _ => self.edit_active(endpoints, |policy, value| policy.apply(key, value)),
        }
    }

    /// Paste `text` over the active field's selection or at its caret.
    pub fn paste<E: FieldEndpoint>(
        &mut self,
        text: &str,
        endpoints: &mut EndpointTable<E>,
    ) -> KeyOutcome {
        log::trace!(target: "focus_host.keys", "paste {} chars for {:?}", text.chars().count(), self.active);
        self.edit_active(endpoints, |policy, value| {
            policy.replace(value, value.edit_range(), text)
        })
    }

    /// Overwrite a field's value and push it to its endpoint.
    ///
    /// Returns `true` if the stored value changed; `false` for unregistered ids.
    pub fn set_value<E: FieldEndpoint>(
        &mut self,
        id: FieldId,
        value: NumericValue,
        endpoints: &mut EndpointTable<E>,
    ) -> bool {
        let Some(handle) = self.registry.get(id).map(|r| r.handle) else {
            return false;
        };
        let changed = self.registry.values_mut().set(id, value);
        if changed {
            self.push_value(id, handle, endpoints);
        }
        changed
    }

    fn edit_active<E: FieldEndpoint>(
        &mut self,
        endpoints: &mut EndpointTable<E>,
        edit: impl FnOnce(&Policy, &NumericValue) -> EditResult,
    ) -> KeyOutcome {
        let Some(id) = self.active else {
            return KeyOutcome::Ignored;
        };
        let Some(registration) = self.registry.get(id) else {
            log::trace!(target: "focus_host.keys", "{id} is not registered; ignoring");
            return KeyOutcome::Ignored;
        };
        let handle = registration.handle;
        let current = self.registry.values().get(id).cloned().unwrap_or_default();
        match edit(&registration.policy, &current) {
            EditResult::Rejected => {
                log::trace!(target: "focus_host.keys", "{id} rejected edit");
                KeyOutcome::Rejected
            }
            EditResult::Updated(next) => {
                if self.registry.values_mut().set(id, next) {
                    self.push_value(id, handle, endpoints);
                }
                KeyOutcome::Updated
            }
        }
    }

    fn push_value<E: FieldEndpoint>(
        &self,
        id: FieldId,
        handle: EndpointHandle,
        endpoints: &mut EndpointTable<E>,
    ) {
        let Some(value) = self.registry.values().get(id) else {
            return;
        };
        match endpoints.get_mut(handle) {
            Some(endpoint) => endpoint.apply(value),
            None => log::warn!(target: "focus_host", "stale endpoint handle for {id}; value not pushed"),
        }
    }

    // ---- queries -----------------------------------------------------

    #[inline]
    pub fn active_id(&self) -> Option<FieldId> {
        self.active
    }

    /// `true` while the active id waits for its endpoint to register.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn order(&self) -> &[FieldId] {
        &self.order
    }

    pub fn value(&self, id: FieldId) -> Option<&NumericValue> {
        self.registry.values().get(id)
    }

    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.registry.values().value_revision(id)
    }

    pub fn is_registered(&self, id: FieldId) -> bool {
        self.registry.contains(id)
    }

    pub fn policy(&self, id: FieldId) -> Option<&Policy> {
        self.registry.get(id).map(|r| &r.policy)
    }

    /// Keypad for the active field; navigation keys only with a tab order.
    pub fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        let ctx = LayoutContext {
            has_tab_order: !self.order.is_empty(),
        };
        self.active_layout(ctx)
    }

    pub(crate) fn active_layout(&self, ctx: LayoutContext) -> Option<KeyboardLayout> {
        let id = self.active?;
        self.policy(id).map(|policy| policy.keyboard_layout(ctx))
    }
}
