use crate::decimal::{DecimalConfig, DecimalPolicy};
use crate::duration::{DurationConfig, DurationPolicy};
use crate::error::PolicyConfigError;
use crate::integer::{IntegerConfig, IntegerPolicy};
use input_core::{EditResult, NumericValue, NumpadKey, SelectionRange};
use keypad_layout::{KeyboardLayout, LayoutContext};

/// Decides how keys and pasted text edit a field's value.
///
/// Implementations are pure: the same inputs always produce the same result
/// and nothing is mutated in place. `Rejected` means "no visible change".
pub trait InputPolicy {
    /// Apply one key to `value`.
    fn apply(&self, key: &NumpadKey, value: &NumericValue) -> EditResult;

    /// Replace `range` of `value.text` with `text`, validated like typing.
    fn replace(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult;

    /// Clean up partial input when the field loses focus.
    fn finalize_display(&self, value: &NumericValue) -> NumericValue {
        value.clone().clamped()
    }

    /// The keypad this policy wants shown.
    fn keyboard_layout(&self, ctx: LayoutContext) -> KeyboardLayout;
}

/// The closed set of policies a field can use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Integer(IntegerPolicy),
    Decimal(DecimalPolicy),
    Duration(DurationPolicy),
}

/// Serializable description of a [`Policy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PolicyConfig {
    Integer(IntegerConfig),
    Decimal(DecimalConfig),
    Duration(DurationConfig),
}

impl Policy {
    pub fn from_config(config: PolicyConfig) -> Result<Self, PolicyConfigError> {
        Ok(match config {
            PolicyConfig::Integer(c) => Policy::Integer(IntegerPolicy::new(c)?),
            PolicyConfig::Decimal(c) => Policy::Decimal(DecimalPolicy::new(c)?),
            PolicyConfig::Duration(c) => Policy::Duration(DurationPolicy::new(c)),
        })
    }

    pub fn config(&self) -> PolicyConfig {
        match self {
            Policy::Integer(p) => PolicyConfig::Integer(*p.config()),
            Policy::Decimal(p) => PolicyConfig::Decimal(*p.config()),
            Policy::Duration(p) => PolicyConfig::Duration(*p.config()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Policy::Integer(_) => "integer",
            Policy::Decimal(_) => "decimal",
            Policy::Duration(_) => "duration",
        }
    }

    fn inner(&self) -> &dyn InputPolicy {
        match self {
            Policy::Integer(p) => p,
            Policy::Decimal(p) => p,
            Policy::Duration(p) => p,
        }
    }
}

impl InputPolicy for Policy {
    #[inline]
    fn apply(&self, key: &NumpadKey, value: &NumericValue) -> EditResult {
        self.inner().apply(key, value)
    }

    #[inline]
    fn replace(&self, value: &NumericValue, range: SelectionRange, text: &str) -> EditResult {
        self.inner().replace(value, range, text)
    }

    #[inline]
    fn finalize_display(&self, value: &NumericValue) -> NumericValue {
        self.inner().finalize_display(value)
    }

    #[inline]
    fn keyboard_layout(&self, ctx: LayoutContext) -> KeyboardLayout {
        self.inner().keyboard_layout(ctx)
    }
}

impl From<IntegerPolicy> for Policy {
    fn from(p: IntegerPolicy) -> Self {
        Policy::Integer(p)
    }
}

impl From<DecimalPolicy> for Policy {
    fn from(p: DecimalPolicy) -> Self {
        Policy::Decimal(p)
    }
}

impl From<DurationPolicy> for Policy {
    fn from(p: DurationPolicy) -> Self {
        Policy::Duration(p)
    }
}
