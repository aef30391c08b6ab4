//! Page renderer
//!
//! Renders localized view models to complete HTML documents.

use crate::app::{AwardItem, PortfolioView, ProjectCard, ProjectDetailView, TeamItem};
use crate::config::Config;
use crate::domain::entities::Language;

use super::site::{icon_path, LINKS, SKILLS};
use super::strings::{text, Text};

/// Separator drawn between award subtitle segments
const SEGMENT_SEPARATOR: &str = " / ";
const THEME_COLOR: &str = "#f57b51";

/// Site-wide values used in page metadata
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub site_url: String,
    pub profile_image_url: String,
}

impl SiteInfo {
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_url: config.site_url.clone(),
            profile_image_url: format!("{}/profile.png", config.assets_url.trim_end_matches('/')),
        }
    }
}

/// Error pages shown at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    Failure,
}

/// Render the portfolio page
pub fn render_index(view: &PortfolioView, site: &SiteInfo) -> String {
    let language = view.language;
    let mut buf = String::new();

    buf.push_str(&document_head(
        language,
        text(Text::MetaTitle, language),
        text(Text::IntroductionTitle, language),
    ));
    buf.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape(text(Text::MetaTitle, language))
    ));
    buf.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        escape(text(Text::IntroductionTitle, language))
    ));
    buf.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        escape(&site.site_url)
    ));
    buf.push_str(&format!(
        "<meta property=\"og:image\" content=\"{}\">\n",
        escape(&site.profile_image_url)
    ));
    buf.push_str("<meta property=\"og:image:type\" content=\"image/png\">\n");
    buf.push_str("<meta property=\"og:image:width\" content=\"512\">\n");
    buf.push_str("<meta property=\"og:image:height\" content=\"512\">\n");
    buf.push_str("</head>\n<body>\n");

    // Top bar with the language switch
    buf.push_str("<div class=\"top\">\n");
    buf.push_str(&format!("<p>{}</p>\n", escape(text(Text::Portfolio, language))));
    buf.push_str(&format!(
        "<a class=\"language\" href=\"?lang={}\">{}</a>\n",
        language.toggled(),
        escape(text(Text::LanguageChange, language))
    ));
    buf.push_str("</div>\n");

    buf.push_str(&render_side(language, site));

    buf.push_str("<main class=\"content\">\n");

    buf.push_str(&section_open(text(Text::Projects, language)));
    buf.push_str(&format!("<div class=\"projects {}\">\n", language));
    for card in &view.projects {
        buf.push_str(&render_project_card(card));
    }
    buf.push_str("</div>\n</section>\n");

    if !view.teams.is_empty() {
        buf.push_str(&section_open(text(Text::Teams, language)));
        buf.push_str("<div class=\"teams\">\n");
        for team in &view.teams {
            buf.push_str(&render_team(team));
        }
        buf.push_str("</div>\n</section>\n");
    }

    buf.push_str(&section_open(text(Text::Awards, language)));
    buf.push_str("<div class=\"awards\">\n");
    for award in &view.awards {
        buf.push_str(&render_award(award));
    }
    buf.push_str("</div>\n</section>\n");

    buf.push_str("</main>\n</body>\n</html>\n");
    buf
}

/// Render a project detail page
pub fn render_project(view: &ProjectDetailView) -> String {
    let mut buf = String::new();

    buf.push_str(&document_head(view.language, &view.name, &view.description));
    buf.push_str("</head>\n<body>\n<div class=\"scroll\">\n");
    buf.push_str(&format!(
        "<p>{} : {}</p>\n",
        escape(&view.name),
        escape(&view.description)
    ));
    buf.push_str("<article class=\"markdown\">\n");
    buf.push_str(&view.content_html);
    buf.push_str("</article>\n</div>\n</body>\n</html>\n");

    buf
}

/// Render an error page. The request language is unknown here, so both are shown.
pub fn render_error(page: ErrorPage) -> String {
    let key = match page {
        ErrorPage::NotFound => Text::NotFound,
        ErrorPage::Failure => Text::Failure,
    };

    let mut buf = String::new();
    buf.push_str(&document_head(
        Language::default(),
        text(key, Language::Ko),
        text(key, Language::En),
    ));
    buf.push_str("</head>\n<body>\n<div class=\"error\">\n");
    buf.push_str(&format!("<p>{}</p>\n", escape(text(key, Language::Ko))));
    buf.push_str(&format!("<p>{}</p>\n", escape(text(key, Language::En))));
    buf.push_str("<a href=\"/\">portfolio</a>\n</div>\n</body>\n</html>\n");
    buf
}

/// Render award subtitle segments with separators between them
fn render_subtitle(segments: &[String]) -> String {
    if segments.is_empty() {
        return String::new();
    }

    let mut buf = String::from("<div class=\"description\">");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            buf.push_str(&format!(
                "<p class=\"divider\">{}</p>",
                SEGMENT_SEPARATOR
            ));
        }
        buf.push_str(&format!("<p>{}</p>", escape(segment)));
    }
    buf.push_str("</div>\n");
    buf
}

fn render_award(award: &AwardItem) -> String {
    format!(
        "<a class=\"award\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">\n<p class=\"name\">{}</p>\n{}</a>\n",
        escape(&award.link),
        escape(&award.title),
        render_subtitle(&award.subtitle)
    )
}

fn render_project_card(card: &ProjectCard) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"project\">\n");
    buf.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">\n",
        escape(&card.link)
    ));
    buf.push_str(&format!(
        "<div class=\"preview\" style=\"background-image: url({})\"></div>\n",
        escape(&card.cover_url)
    ));
    buf.push_str(&format!(
        "<img class=\"thumbnail\" alt=\"{} thumbnail\" src=\"{}\">\n",
        escape(&card.key),
        escape(&card.thumbnail_url)
    ));
    buf.push_str(&format!("<p class=\"name\">{}</p>\n", escape(&card.name)));
    buf.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape(&card.description)
    ));
    buf.push_str("</a>\n");
    buf.push_str(&format!(
        "<a class=\"detail\" href=\"/project/{}\">+</a>\n",
        escape(&card.key)
    ));
    buf.push_str("</div>\n");

    buf
}

fn render_team(team: &TeamItem) -> String {
    let description = if team.description.is_empty() {
        String::new()
    } else {
        format!("<p class=\"description\">{}</p>\n", escape(&team.description))
    };

    format!(
        "<div class=\"team\">\n<p class=\"name\">{}</p>\n{}</div>\n",
        escape(&team.name),
        description
    )
}

fn render_side(language: Language, site: &SiteInfo) -> String {
    let mut buf = String::new();

    buf.push_str("<aside class=\"side\">\n<div class=\"header\">\n");
    buf.push_str(&format!(
        "<img alt=\"profile\" src=\"{}\">\n",
        escape(&site.profile_image_url)
    ));
    buf.push_str(&format!(
        "<div><p>{}</p><p>{}</p></div>\n",
        escape(text(Text::Hello, language)),
        escape(text(Text::Name, language))
    ));
    buf.push_str("</div>\n");

    buf.push_str(&section_open(text(Text::Skills, language)));
    buf.push_str("<div class=\"icons\">\n");
    for skill in SKILLS {
        buf.push_str(&format!(
            "<div class=\"icon\" style=\"mask-image: url('{0}'); -webkit-mask-image: url('{0}')\"></div>\n",
            icon_path(skill.icon)
        ));
    }
    buf.push_str("</div>\n</section>\n");

    buf.push_str(&section_open(text(Text::Links, language)));
    buf.push_str("<div class=\"links\">\n");
    for link in LINKS {
        buf.push_str(&format!(
            "<a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\"><div class=\"icon\" style=\"mask-image: url('{1}'); -webkit-mask-image: url('{1}')\"></div><p>{2}</p></a>\n",
            escape(link.url),
            icon_path(link.icon),
            escape(link.name)
        ));
    }
    buf.push_str("</div>\n</section>\n</aside>\n");

    buf
}

fn document_head(language: Language, title: &str, description: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"theme-color\" content=\"{}\">\n<title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n",
        language,
        THEME_COLOR,
        escape(title),
        escape(description)
    )
}

fn section_open(title: &str) -> String {
    format!(
        "<section class=\"section\">\n<p class=\"title\">{}</p>\n",
        escape(title)
    )
}

/// Escape text for HTML content and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
