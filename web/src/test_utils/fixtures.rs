//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{Award, Portfolio, Project, ProjectDetail, Team};

/// Create a test project with both Korean and English text
pub fn test_project() -> Project {
    Project {
        id: "11111111-2222-3333-4444-555555555555".to_string(),
        key: "beta".to_string(),
        name: "베타".to_string(),
        name_en: Some("Beta".to_string()),
        description: "베타 프로젝트".to_string(),
        description_en: Some("Beta project".to_string()),
        teams: vec![],
        awards: vec![],
    }
}

/// Create a test project with a single name and no English variants
pub fn test_project_named(key: &str, name: &str) -> Project {
    Project {
        id: format!("project-{}", key),
        key: key.to_string(),
        name: name.to_string(),
        name_en: None,
        description: format!("{} description", name),
        description_en: None,
        teams: vec![],
        awards: vec![],
    }
}

/// Create a test team with both Korean and English names
pub fn test_team() -> Team {
    Team {
        id: "team-alpha".to_string(),
        key: "alpha".to_string(),
        name: "알파".to_string(),
        name_en: Some("Alpha".to_string()),
        description: Some("알파 팀".to_string()),
        projects: vec![],
        awards: vec![],
    }
}

/// Create a test team with a single name
pub fn test_team_named(name: &str) -> Team {
    Team {
        id: format!("team-{}", name.to_lowercase()),
        key: name.to_lowercase(),
        name: name.to_string(),
        name_en: None,
        description: None,
        projects: vec![],
        awards: vec![],
    }
}

/// Create a test award linked to [`test_team`] and [`test_project`]
pub fn test_award() -> Award {
    Award {
        id: "award-grand".to_string(),
        key: "grand".to_string(),
        name: "대상".to_string(),
        period: "2021".to_string(),
        by: "ACME".to_string(),
        date: "2021-05-01".to_string(),
        teams: vec![test_team()],
        projects: vec![test_project()],
    }
}

pub fn test_portfolio() -> Portfolio {
    Portfolio {
        projects: vec![test_project()],
        teams: vec![test_team()],
        awards: vec![test_award()],
    }
}

pub fn test_project_detail() -> ProjectDetail {
    ProjectDetail {
        info: test_project(),
        content: "# 베타\n\nLong form **content**.".to_string(),
    }
}
