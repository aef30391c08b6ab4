//! Render module
//!
//! HTML pages for the portfolio, Markdown content rendering, and the static
//! text and site configuration the pages need.

pub mod markdown;
pub mod page;
pub mod site;
pub mod strings;

pub use markdown::render_markdown;
pub use page::{render_error, render_index, render_project, ErrorPage, SiteInfo};
