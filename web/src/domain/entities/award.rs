//! Award domain entity

use serde::{Deserialize, Serialize};

use super::{deserialize_null_default, Project, Team};

/// Date value the API uses when no award date is recorded
pub const SENTINEL_DATE: &str = "0000-00-00";

/// An award, linked to the teams and projects it was given for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub key: String,
    pub name: String,
    pub period: String,
    /// Awarding organization, may be empty
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub by: String,
    /// ISO date, or [`SENTINEL_DATE`] when unknown
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub projects: Vec<Project>,
}

impl Award {
    /// The award date, or `None` when it is the sentinel or empty
    pub fn known_date(&self) -> Option<String> {
        let date = self.date.replacen(SENTINEL_DATE, "", 1);
        if date.is_empty() {
            None
        } else {
            Some(date)
        }
    }
}
