//! Portfolio service
//!
//! Fetches the portfolio graph and resolves it into localized view models
//! for the renderer. Each call performs exactly one remote read.

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{Award, Language, Project, Team};
use crate::domain::ports::PortfolioApi;
use crate::error::AppError;
use crate::render::render_markdown;

use super::{compose_award_subtitle, resolve_description, resolve_name};

/// Base URLs used to build outbound links and image paths
#[derive(Debug, Clone)]
pub struct SiteUrls {
    pub assets_url: String,
    pub notion_url: String,
}

impl SiteUrls {
    pub fn from_config(config: &Config) -> Self {
        Self {
            assets_url: config.assets_url.trim_end_matches('/').to_string(),
            notion_url: config.notion_url.trim_end_matches('/').to_string(),
        }
    }

    /// Public page for a project or award; page ids are written without dashes
    fn entity_link(&self, id: &str) -> String {
        format!("{}/{}", self.notion_url, id.replace('-', ""))
    }

    fn cover_url(&self, key: &str) -> String {
        format!("{}/cover/{}.webp", self.assets_url, key)
    }

    fn thumbnail_url(&self, key: &str) -> String {
        format!("{}/project/{}.webp", self.assets_url, key)
    }
}

/// The localized portfolio page
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub language: Language,
    pub projects: Vec<ProjectCard>,
    pub teams: Vec<TeamItem>,
    pub awards: Vec<AwardItem>,
}

/// A project entry on the portfolio page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub cover_url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamItem {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
}

/// An award entry on the portfolio page
#[derive(Debug, Clone, Serialize)]
pub struct AwardItem {
    pub id: String,
    /// Award name followed by its period
    pub title: String,
    /// Subtitle segments in display order, possibly empty
    pub subtitle: Vec<String>,
    pub link: String,
}

/// The localized project detail page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetailView {
    pub language: Language,
    pub key: String,
    pub name: String,
    pub description: String,
    /// Project content rendered from Markdown
    pub content_html: String,
}

pub struct PortfolioService<A: PortfolioApi> {
    api: Arc<A>,
    urls: SiteUrls,
}

impl<A: PortfolioApi> PortfolioService<A> {
    pub fn new(api: Arc<A>, urls: SiteUrls) -> Self {
        Self { api, urls }
    }

    /// Fetch the portfolio and localize it for `language`
    pub async fn portfolio(&self, language: Language) -> Result<PortfolioView, AppError> {
        let portfolio = self.api.fetch_portfolio().await?;

        tracing::debug!(
            "Fetched portfolio: {} projects, {} teams, {} awards",
            portfolio.projects.len(),
            portfolio.teams.len(),
            portfolio.awards.len()
        );

        Ok(PortfolioView {
            language,
            projects: portfolio
                .projects
                .iter()
                .map(|p| self.project_card(p, language))
                .collect(),
            teams: portfolio
                .teams
                .iter()
                .map(|t| self.team_item(t, language))
                .collect(),
            awards: portfolio
                .awards
                .iter()
                .map(|a| self.award_item(a, language))
                .collect(),
        })
    }

    /// Fetch one project by key and localize it for `language`
    pub async fn project(
        &self,
        key: &str,
        language: Language,
    ) -> Result<ProjectDetailView, AppError> {
        let detail = self.api.fetch_project_detail(key).await?;

        Ok(ProjectDetailView {
            language,
            key: detail.info.key.clone(),
            name: resolve_name(&detail.info, language).to_string(),
            description: resolve_description(&detail.info, language).to_string(),
            content_html: render_markdown(&detail.content),
        })
    }

    fn project_card(&self, project: &Project, language: Language) -> ProjectCard {
        ProjectCard {
            id: project.id.clone(),
            key: project.key.clone(),
            name: resolve_name(project, language).to_string(),
            description: resolve_description(project, language).to_string(),
            link: self.urls.entity_link(&project.id),
            cover_url: self.urls.cover_url(&project.key),
            thumbnail_url: self.urls.thumbnail_url(&project.key),
        }
    }

    fn team_item(&self, team: &Team, language: Language) -> TeamItem {
        TeamItem {
            id: team.id.clone(),
            key: team.key.clone(),
            name: resolve_name(team, language).to_string(),
            description: resolve_description(team, language).to_string(),
        }
    }

    fn award_item(&self, award: &Award, language: Language) -> AwardItem {
        AwardItem {
            id: award.id.clone(),
            title: format!("{} {}", award.name, award.period),
            subtitle: compose_award_subtitle(award, language),
            link: self.urls.entity_link(&award.id),
        }
    }
}
