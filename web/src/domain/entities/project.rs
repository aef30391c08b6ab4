//! Project domain entity
//!
//! A portfolio project with optional English variants of its text fields.

use serde::{Deserialize, Serialize};

use super::{deserialize_null_default, Award, Team};

/// A project as returned by the portfolio API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Human-readable slug, used in detail URLs and asset paths
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub description: String,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub awards: Vec<Award>,
}
