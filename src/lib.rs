//! Switch Claude Code between stored provider profiles.
//!
//! Profiles live as JSON files next to Claude Code's `settings.json`.
//! Applying one backs up the live settings, clears every profile-owned env
//! var and writes the profile's values, leaving everything else alone.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod store;
pub mod switcher;

pub use error::{ResourceKind, StoreError};
pub use switcher::Switcher;
