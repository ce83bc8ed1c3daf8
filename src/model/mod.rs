//! Pure domain types (no UI state, no I/O).

pub mod entry;
pub mod error;
pub mod key_action;
pub mod options;

pub use entry::{Entry, EntryList};
pub use error::AppError;
pub use key_action::KeyAction;
pub use options::{Options, PAGE_SIZE_MAX};
