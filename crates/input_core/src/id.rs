//! Opaque identifier for keypad-driven fields.
//!
//! A `FieldId` is a handle, not a resource: it carries no ownership and
//! dropping it has no effect. Endpoints allocate one for their lifetime and
//! hand copies to the host.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

/// Globally unique, copyable identifier for an input field.
///
/// # Integration
///
/// Fields that already have an identity in another system can bridge it:
///
/// ```ignore
/// impl From<FormRowId> for FieldId {
///     fn from(id: FormRowId) -> Self {
///         FieldId::from_raw(id.0)
///     }
/// }
/// ```
///
/// Raw values handed out by [`FieldId::new`] and raw values supplied through
/// [`FieldId::from_raw`] share one space; integrators should stick to one
/// scheme per host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Allocate a fresh id from the process-wide counter.
    pub fn new() -> Self {
        Self(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}
