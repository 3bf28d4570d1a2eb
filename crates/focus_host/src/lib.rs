//! # focus_host
//!
//! Field registry and focus routing for keypad-driven numeric fields.
//!
//! A [`FocusHost`] tracks registered fields, a tab order and the single
//! active field. It forwards [`input_core::NumpadKey`]s to the active field's
//! [`input_policy::Policy`], stores the result and pushes it to the field's
//! [`FieldEndpoint`]. Endpoints live in an integrator-owned
//! [`EndpointTable`]; the host only keeps generation-checked handles, so an
//! unmounted endpoint is simply "not there" rather than dangling.
//!
//! [`FocusOnlyHost`] is the single-field variant for standalone popovers.
//!
//! Logging goes through the `log` facade under the `focus_host` (focus
//! transitions, registration) and `focus_host.keys` (per-key dispatch)
//! targets.

mod endpoint;
mod error;
mod focus_only;
mod host;
mod overrides;
mod registry;

pub use endpoint::{EndpointHandle, EndpointTable, FieldEndpoint};
pub use error::FocusError;
pub use focus_only::FocusOnlyHost;
pub use host::FocusHost;
pub use overrides::{OverrideActions, OverrideHook};

/// Host-wide focus behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Moving past either end of the order wraps around instead of
    /// dismissing focus.
    pub wrap: bool,
    /// `set_active` refuses ids that are not in the order.
    pub enforce_order: bool,
}

/// What `set_order` does when the active field is missing from the new order.
///
/// `auto_insert_active_if_missing` wins over `preserve_active`; with neither
/// set, focus is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Move focus to the first entry of the new order.
    pub preserve_active: bool,
    /// Append the active id to the new order.
    pub auto_insert_active_if_missing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    Next,
    Prev,
}

/// How the host handled one key or paste.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// No active registered field, or a key this host does not act on
    /// (`Next`/`Prev` on a [`FocusOnlyHost`]).
    Ignored,
    /// The policy rejected the edit; nothing changed.
    Rejected,
    /// The policy accepted the edit and the value was stored.
    Updated,
    /// A `Next`/`Prev`/`Done` key was resolved by the host.
    Navigated,
}

impl KeyOutcome {
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, KeyOutcome::Updated | KeyOutcome::Navigated)
    }
}
