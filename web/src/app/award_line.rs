//! Award subtitle composition
//!
//! The line under an award's title is made of up to three segments, in
//! order: affiliation (first team and/or first project), awarding body, and
//! date. Missing segments are dropped rather than left blank; the renderer
//! puts a separator between whatever remains.

use crate::domain::entities::{Award, Language};

use super::localize::resolve_name;

/// Joins the team and project names inside the affiliation segment
pub const AFFILIATION_SEPARATOR: &str = " - ";

/// Build the subtitle segments for an award
pub fn compose_award_subtitle(award: &Award, language: Language) -> Vec<String> {
    let by = Some(award.by.as_str())
        .filter(|by| !by.is_empty())
        .map(str::to_string);

    [affiliation(award, language), by, award.known_date()]
        .into_iter()
        .flatten()
        .collect()
}

/// Localized names of the first team and first project, team first
fn affiliation(award: &Award, language: Language) -> Option<String> {
    let team = award.teams.first().map(|t| resolve_name(t, language));
    let project = award.projects.first().map(|p| resolve_name(p, language));

    let names: Vec<&str> = [team, project]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(AFFILIATION_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::award::SENTINEL_DATE;
    use crate::test_utils::{test_award, test_project_named, test_team, test_team_named};

    fn bare_award() -> Award {
        Award {
            teams: vec![],
            projects: vec![],
            by: String::new(),
            date: SENTINEL_DATE.to_string(),
            ..test_award()
        }
    }

    #[test]
    fn full_subtitle() {
        let award = Award {
            teams: vec![test_team_named("Alpha")],
            projects: vec![test_project_named("beta", "Beta")],
            by: "ACME".to_string(),
            date: "2021-05-01".to_string(),
            ..test_award()
        };

        assert_eq!(
            compose_award_subtitle(&award, Language::Ko),
            vec!["Alpha - Beta", "ACME", "2021-05-01"]
        );
    }

    #[test]
    fn everything_missing_is_empty() {
        assert!(compose_award_subtitle(&bare_award(), Language::Ko).is_empty());
        assert!(compose_award_subtitle(&bare_award(), Language::En).is_empty());
    }

    #[test]
    fn team_only_affiliation() {
        let award = Award {
            teams: vec![test_team_named("Alpha")],
            ..bare_award()
        };

        assert_eq!(compose_award_subtitle(&award, Language::Ko), vec!["Alpha"]);
    }

    #[test]
    fn project_only_affiliation() {
        let award = Award {
            projects: vec![test_project_named("beta", "Beta")],
            ..bare_award()
        };

        assert_eq!(compose_award_subtitle(&award, Language::Ko), vec!["Beta"]);
    }

    #[test]
    fn affiliation_is_localized() {
        let award = Award {
            teams: vec![test_team()],
            ..bare_award()
        };

        assert_eq!(compose_award_subtitle(&award, Language::Ko), vec!["알파"]);
        assert_eq!(compose_award_subtitle(&award, Language::En), vec!["Alpha"]);
    }

    #[test]
    fn only_first_team_and_project_are_used() {
        let award = Award {
            teams: vec![test_team_named("Alpha"), test_team_named("Gamma")],
            projects: vec![
                test_project_named("beta", "Beta"),
                test_project_named("delta", "Delta"),
            ],
            ..bare_award()
        };

        assert_eq!(
            compose_award_subtitle(&award, Language::Ko),
            vec!["Alpha - Beta"]
        );
    }

    #[test]
    fn empty_names_are_skipped() {
        let award = Award {
            teams: vec![test_team_named("")],
            projects: vec![test_project_named("beta", "Beta")],
            ..bare_award()
        };

        assert_eq!(compose_award_subtitle(&award, Language::Ko), vec!["Beta"]);
    }

    #[test]
    fn by_and_date_without_affiliation() {
        let award = Award {
            by: "ACME".to_string(),
            date: "2020-11-30".to_string(),
            ..bare_award()
        };

        assert_eq!(
            compose_award_subtitle(&award, Language::En),
            vec!["ACME", "2020-11-30"]
        );
    }

    #[test]
    fn sentinel_date_is_dropped() {
        let award = Award {
            by: "ACME".to_string(),
            ..bare_award()
        };

        assert_eq!(compose_award_subtitle(&award, Language::Ko), vec!["ACME"]);
    }

    #[test]
    fn segment_count_matches_present_candidates() {
        let teams = [vec![], vec![test_team_named("Alpha")]];
        let bys = ["", "ACME"];
        let dates = [SENTINEL_DATE, "", "2021-05-01"];

        for team in &teams {
            for by in bys {
                for date in dates {
                    let award = Award {
                        teams: team.clone(),
                        by: by.to_string(),
                        date: date.to_string(),
                        ..bare_award()
                    };

                    let expected = usize::from(!team.is_empty())
                        + usize::from(!by.is_empty())
                        + usize::from(date.starts_with("20"));
                    let segments = compose_award_subtitle(&award, Language::Ko);

                    assert_eq!(segments.len(), expected);
                    assert!(segments.iter().all(|s| !s.is_empty()));
                    assert!(segments.iter().all(|s| s != SENTINEL_DATE));
                }
            }
        }
    }
}
