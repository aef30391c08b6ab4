//! Team domain entity

use serde::{Deserialize, Serialize};

use super::{deserialize_null_default, Award, Project};

/// A team the portfolio owner took part in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    /// Absent in older payloads
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub awards: Vec<Award>,
}
