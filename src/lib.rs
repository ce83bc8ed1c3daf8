//! roster: TUI for filtering, paginating, and editing a named roster.
//!
//! The crate follows a Pure Core / Impure Shell split: `model` and
//! `state` are pure and synchronous (every transition is a total state
//! replacement, testable without a terminal); `view` owns the terminal
//! and translates events into those transitions. State is partitioned
//! into update domains so committing one input never re-evaluates the
//! content of unrelated view regions; see [`state::domain`].

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
