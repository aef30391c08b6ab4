//! Domain entities
//!
//! The portfolio graph as returned by the remote API, plus the display
//! language. All entities are read-only snapshots fetched per request.

pub mod award;
pub mod language;
pub mod portfolio;
pub mod project;
pub mod team;

pub use award::Award;
pub use language::Language;
pub use portfolio::{Portfolio, ProjectDetail};
pub use project::Project;
pub use team::Team;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize null as default (empty vec, empty string, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
