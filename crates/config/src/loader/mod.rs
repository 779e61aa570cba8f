//! Configuration loader for styling-pipeline sources.
//!
//! Responsibilities:
//! - Validate raw structured input into a `StylingConfig` (`load`).
//! - Layer partial overlays onto a validated base (`merge`, `ConfigOverlay`).
//! - Provide a builder-pattern `ConfigLoader` and a file source adapter.
//!
//! Does NOT handle:
//! - CSS generation, file scanning, or theme stylesheet emission (external build tool).
//! - Process exit behavior on failure (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - `load` and `merge` are pure; only `source.rs` performs I/O.
//! - Unknown fields are ignored at every level of the raw input.

mod builder;
mod error;
mod fields;
mod load;
mod overlay;
mod source;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::{ConfigError, ErrorKind};
pub use load::{load, merge};
pub use overlay::ConfigOverlay;
pub use source::{SourceFormat, environment_overlay_path, read_source};
