//! # input_core
//!
//! UI-agnostic value model for keypad-driven numeric fields.
//!
//! This crate provides the building blocks shared by policies and hosts:
//! - [`FieldId`]: an opaque, copyable identifier for a field
//! - [`NumericValue`]: the text/caret/selection triple, offsets in UTF-16 code units
//! - [`EditResult`]: `Rejected | Updated(NumericValue)`
//! - [`NumpadKey`]: the abstract key vocabulary a keypad renderer emits
//! - [`NumericValueStore`]: central store for per-field values
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any rendering or layout system
//! - Policy or focus logic
//!
//! Offsets are UTF-16 code units throughout. Rust strings are UTF-8, so all
//! slicing goes through the helpers in this crate, which clamp instead of
//! panicking.

mod id;
mod key;
mod selection;
mod store;
mod text;
mod value;

pub use id::FieldId;
pub use key::{NumpadKey, ParseKeyError};
pub use selection::SelectionRange;
pub use store::NumericValueStore;
pub use value::{EditResult, NumericValue};

pub use text::{
    byte_offset, clamp_offset, count_digits, len16, next_boundary16, prev_boundary16, slice16,
    splice, utf16_offset,
};
