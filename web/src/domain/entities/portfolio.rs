//! Aggregate roots returned by a single fetch

use serde::{Deserialize, Serialize};

use super::{deserialize_null_default, Award, Project, Team};

/// The full portfolio graph. Array order is the API's order and is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub awards: Vec<Award>,
}

/// A single project with its long-form Markdown content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub info: Project,
    pub content: String,
}
