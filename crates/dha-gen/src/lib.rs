//! Core generators for the DHA synthetic dataset studio.
//!
//! Data flows one direction: the identifier codec feeds the registry
//! generator, whose finished table feeds the application generator, and the
//! assembler merges both tables with the run's issue statistics. Every
//! random draw comes from one seedable generator owned by the assembler, so
//! a fixed seed (and a fixed `today`) reproduces a run byte for byte.

pub mod applications;
pub mod assemble;
pub mod plan;
pub mod pools;
mod progress;
pub mod registry;
pub mod said;

pub use assemble::{DataSet, assemble, orphan_count};
pub use plan::{FormatQuirk, MissingField, RegistryPlan};
