//! Convention-driven page build pipeline.
//!
//! Discovers page components in a routes directory, scaffolds a per-target
//! build workspace, drives the compiler for each target strictly in
//! sequence, and returns the mount registry the serving host exposes.

pub mod config;
pub mod discover;
pub mod lifecycle;
pub mod mount;
pub mod orchestrate;
pub mod scaffold;

pub use config::PipelineConfig;
pub use discover::{discover_targets, BuildTarget, DiscoverError};
pub use lifecycle::{Pipeline, PipelineError};
pub use mount::{MountEntry, MountRegistry};
pub use orchestrate::{BuildError, BuildOrchestrator};
pub use scaffold::{ScaffoldError, ScaffoldGenerator};
