//! # numpad
//!
//! Constrained numeric text input driven by an on-screen keypad.
//!
//! The workspace splits into layers that depend strictly downwards:
//!
//! - [`model`] (`input_core`): values, selections, keys and the value store
//! - [`layout`] (`keypad_layout`): the data-only keypad description
//! - [`policy`] (`input_policy`): integer, decimal and duration editing rules
//! - [`host`] (`focus_host`): registration, tab order and key routing
//!
//! ```
//! use numpad::model::{NumericValue, NumpadKey};
//! use numpad::policy::{DurationConfig, DurationPolicy, InputPolicy};
//!
//! let policy = DurationPolicy::new(DurationConfig::default());
//! let mut value = NumericValue::empty();
//! for d in [1, 2, 5] {
//!     if let Some(next) = policy.apply(&NumpadKey::Digit(d), &value).into_updated() {
//!         value = next;
//!     }
//! }
//! assert_eq!(value.text, "1:25");
//! ```

pub use focus_host as host;
pub use input_core as model;
pub use input_policy as policy;
pub use keypad_layout as layout;

pub use focus_host::{EndpointTable, FieldEndpoint, FocusHost, FocusOnlyHost, KeyOutcome};
pub use input_core::{EditResult, FieldId, NumericValue, NumpadKey, SelectionRange};
pub use input_policy::{InputPolicy, Policy, PolicyConfig};
pub use keypad_layout::{KeyboardLayout, LayoutContext};
