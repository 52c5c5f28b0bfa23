//! MapVentures Hub: umbrella crate.
//!
//! This crate re-exports all MapVentures components for convenience.
//! Use feature flags to enable specific functionality.
//!
//! - [`core`]: identities, roles, and the company/event records
//! - [`auth`]: the session store and the edit-permission rules
//! - [`store`]: async resource providers and the seeded mock API
//! - `guard` (feature `guard`, default): route gates, navigation, authorized edits
//! - `cli` (feature `cli`): the `mapventures` command-line library

pub use mapventures_auth as auth;
pub use mapventures_core as core;
pub use mapventures_store as store;

#[cfg(feature = "guard")]
pub use mapventures_guard as guard;

#[cfg(feature = "cli")]
pub use mapventures_cli as cli;
