//! # mapventures-store
//!
//! Resource providers for MapVentures Hub.
//!
//! This crate supplies the listing records the rest of the hub reads:
//! - [`ResourceProvider`]: async CRUD contract, one per resource type
//! - [`MockProvider`]: in-memory provider with simulated network latency
//! - [`Catalog`]: the company and event providers, bundled
//! - [`seed`]: the records the mock API starts with

#![forbid(unsafe_code)]

pub mod error;
pub mod memory;
pub mod provider;
pub mod seed;

pub use error::{Error, Result};
pub use memory::{Latency, MockProvider};
pub use provider::{Catalog, ResourceProvider};
