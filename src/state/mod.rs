//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod domain;
pub mod key_handler;
pub mod list_editor;
pub mod page_size_control;
pub mod search_control;

pub use app_state::{AppState, Focus};
pub use domain::{Domain, RenderLedger, StateSlice};
pub use key_handler::{handle_action, handle_edit, TextEdit};
pub use list_editor::ListEditor;
pub use page_size_control::PageSizeControl;
pub use search_control::SearchControl;
