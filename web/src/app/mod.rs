//! Application layer
//!
//! Language negotiation, localized field resolution, award line
//! composition, and the service that turns fetched data into view models.

pub mod award_line;
pub mod language;
pub mod localize;
pub mod portfolio_service;

pub use award_line::compose_award_subtitle;
pub use language::negotiate_language;
pub use localize::{resolve_description, resolve_name};
pub use portfolio_service::{
    AwardItem, PortfolioService, PortfolioView, ProjectCard, ProjectDetailView, SiteUrls,
    TeamItem,
};
