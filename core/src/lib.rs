//! # devteam core
//!
//! Concrete behavior behind the contracts in `devteam-common`.
//!
//! * **[`implementations`]**: stock capability implementations.
//! * **[`developer`]**: the [`developer::Developer`] trait and its three
//!   specializations.
//! * **[`dispatch`]**: the polymorphic [`dispatch::develop`] helper.
//! * **[`scenario`]**: the scripted example runs.

pub mod developer;
pub mod dispatch;
pub mod implementations;
pub mod scenario;
