//! Language negotiation
//!
//! Reduces an `Accept-Language` header to one of the two display languages.
//! Only the primary subtag of the highest ranked entry is inspected: `ko`
//! selects Korean, anything else selects English, and an empty or
//! unparseable header falls back to Korean.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::Language;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\*|[A-Za-z]{1,8}(?:-[A-Za-z0-9]{1,8}){0,2})$")
        .expect("language tag pattern is valid")
});

/// One entry of an `Accept-Language` header
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Primary subtag, e.g. `en` in `en-US`, or `*`
    pub code: String,
    #[allow(dead_code)]
    pub region: Option<String>,
    pub quality: f32,
}

/// Parse an `Accept-Language` header into ranges, highest quality first.
///
/// Entries with equal quality keep their header order. Entries with an
/// invalid tag or quality are skipped.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header.split(',').filter_map(parse_range).collect();

    // sort_by is stable, so ties stay in header order
    ranges.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    ranges
}

fn parse_range(entry: &str) -> Option<LanguageRange> {
    let mut parts = entry.trim().split(';');
    let tag = parts.next()?.trim();

    if !LANGUAGE_TAG.is_match(tag) {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        if let Some(value) = param.trim().strip_prefix("q=") {
            let q: f32 = value.trim().parse().ok()?;
            if !(0.0..=1.0).contains(&q) {
                return None;
            }
            quality = q;
        }
    }

    let mut subtags = tag.split('-');
    let code = subtags.next()?.to_string();
    let region = subtags.next().map(str::to_string);

    Some(LanguageRange {
        code,
        region,
        quality,
    })
}

/// Pick the display language for a request's `Accept-Language` header
pub fn negotiate_language(header: Option<&str>) -> Language {
    let ranges = header.map(parse_accept_language).unwrap_or_default();

    match ranges.first() {
        None => Language::Ko,
        Some(range) if range.code.eq_ignore_ascii_case("ko") => Language::Ko,
        Some(_) => Language::En,
    }
}
