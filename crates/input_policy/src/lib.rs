//! # input_policy
//!
//! Pure editing rules for keypad-driven numeric fields.
//!
//! - [`IntegerPolicy`]: bounded digit count, optional leading `-`
//! - [`DecimalPolicy`]: separate integer/fraction budgets, configurable separator
//! - [`DurationPolicy`]: right-to-left digit entry rendered as `h:mm:ss` style groups
//!
//! All three implement [`InputPolicy`] and are wrapped by the closed
//! [`Policy`] enum that hosts store per field. Policies never log, allocate
//! state or mutate their inputs; every edit returns a fresh
//! [`input_core::EditResult`].
//!
//! ```
//! use input_core::{NumericValue, NumpadKey};
//! use input_policy::{InputPolicy, IntegerConfig, IntegerPolicy};
//!
//! let policy = IntegerPolicy::new(IntegerConfig { max_digits: 3, allow_negative: false })?;
//! let value = NumericValue::new("12");
//! let next = policy.apply(&NumpadKey::Digit(3), &value);
//! assert_eq!(next.updated().map(|v| v.text.as_str()), Some("123"));
//! assert!(policy.apply(&NumpadKey::Digit(4), next.updated().unwrap()).is_rejected());
//! # Ok::<(), input_policy::PolicyConfigError>(())
//! ```

mod decimal;
mod duration;
mod edit;
mod error;
mod integer;
mod keypad;
mod policy;

pub use decimal::{DecimalConfig, DecimalPolicy};
pub use duration::{DurationConfig, DurationPolicy, TimeLimit};
pub use error::PolicyConfigError;
pub use integer::{IntegerConfig, IntegerPolicy};
pub use policy::{InputPolicy, Policy, PolicyConfig};
