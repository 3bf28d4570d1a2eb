use input_core::FieldId;
use std::fmt;

/// Host misuse that the host refuses instead of degrading around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusError {
    /// The endpoint handle passed to `register` does not resolve.
    Unmounted(FieldId),
    /// `set_active` named a field outside the enforced tab order.
    NotInOrder(FieldId),
    /// A tab order listed the same field twice.
    DuplicateInOrder(FieldId),
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::Unmounted(id) => write!(f, "endpoint for {id} is not mounted"),
            FocusError::NotInOrder(id) => write!(f, "{id} is not in the tab order"),
            FocusError::DuplicateInOrder(id) => write!(f, "{id} appears twice in the tab order"),
        }
    }
}

impl std::error::Error for FocusError {}
