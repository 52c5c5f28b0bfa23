//! # mapventures-guard
//!
//! Navigation guards for MapVentures Hub.
//!
//! - [`Route`]: the hub's navigation table, parsed from paths
//! - [`AuthenticatedGate`]: admits any logged-in identity, redirects everyone else to login
//! - [`OwnerGate`]: fetches the target listing and admits only identities allowed to edit it
//! - [`GateHandle`]: observable gate state (`Loading`, `Denied`, ...)
//! - [`Navigator`]: picks the right gate for a path
//! - [`ListingEditor`]: form submissions, re-authorized before every mutation

#![forbid(unsafe_code)]

pub mod editor;
pub mod error;
pub mod gate;
pub mod navigator;
pub mod route;
pub mod state;

pub use editor::ListingEditor;
pub use error::{Error, Result};
pub use gate::{denied_message, Admission, AuthenticatedGate, OwnerGate, Verdict};
pub use navigator::{EditTarget, Navigator, Outcome};
pub use route::{Access, Destination, Route};
pub use state::{GateHandle, GateState, Ticket};
