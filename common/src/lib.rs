//! # devteam common
//!
//! The boundaries of the application: every trait here is a contract that
//! `devteam-core` implements or consumes, and nothing here knows how a line
//! actually reaches a terminal.
//!
//! * **[`capability`]**: the narrow, single-method capability contracts.
//! * **[`console`]**: the output port every status line is written through.
//! * **[`role`]**: the three developer roles and their textual form.
//! * **[`config`]**: runtime switches built by the CLI.

pub mod capability;
pub mod config;
pub mod console;
pub mod role;
