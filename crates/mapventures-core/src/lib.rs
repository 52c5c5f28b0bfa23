//! MapVentures Core: shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all MapVentures
//! crates. It has no internal MapVentures dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`identity`]: Who is acting ([`Identity`], [`Role`])
//! - [`resource`]: What is being acted upon ([`Company`], [`Event`], the [`Resource`] trait)

#![forbid(unsafe_code)]

pub mod error;
pub mod identity;
pub mod resource;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use identity::{Identity, Role};
pub use resource::{
    Company, CompanyDraft, CompanyPatch, Event, EventDraft, EventPatch, Resource, ResourceType,
};
