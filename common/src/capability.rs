//! # Capability Contracts
//!
//! Each trait covers exactly one responsibility. A developer specialization
//! depends on the one contract it needs and never sees the others.
//!
//! None of the methods carry a default body.

use crate::console::Console;

/// Builds the user-facing interface.
pub trait Ui {
    fn create_ui(&self, console: &dyn Console);
}

/// Prepares the storage layer.
pub trait Database {
    fn create_db(&self, console: &dyn Console);
}

/// Produces the visual design.
pub trait Design {
    fn create_design(&self, console: &dyn Console);
}
