//! Turns a catalog site into the ordered list of searches to try.

use crate::model::Site;
use crate::profile::{
    LOCATION_PLACEHOLDER, RegionProfile, SearchLocale, TERM_PLACEHOLDER, TITLE_PLACEHOLDER,
};

/// Why a query exists. Later stages only run while the site is still short
/// of the profile's fallback minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStage {
    Primary,
    LocationFallback,
    LanguageFallback,
}

impl QueryStage {
    pub fn is_fallback(self) -> bool {
        !matches!(self, QueryStage::Primary)
    }
}

/// Everything the search client needs for a single remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub locale: SearchLocale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedQuery {
    pub stage: QueryStage,
    pub request: SearchRequest,
}

/// Builds up to three queries for `site`, in the order they should be tried.
/// The location fallback is left out when the site has no location.
pub fn plan_queries(site: &Site, profile: &RegionProfile) -> Vec<PlannedQuery> {
    let title = site.title.trim();
    let location = site.location_text();
    let term = profile.category_terms.primary_term(site.category_text());

    let mut plan = vec![PlannedQuery {
        stage: QueryStage::Primary,
        request: SearchRequest {
            query: render_template(&profile.primary_template, title, location, term),
            max_results: profile.max_results_per_call,
            locale: profile.locale.clone(),
        },
    }];

    if !location.is_empty() {
        plan.push(PlannedQuery {
            stage: QueryStage::LocationFallback,
            request: SearchRequest {
                query: render_template(&profile.location_template, title, location, term),
                max_results: profile.max_results_per_call,
                locale: profile.locale.clone(),
            },
        });
    }

    if let Some(fallback) = &profile.language_fallback {
        plan.push(PlannedQuery {
            stage: QueryStage::LanguageFallback,
            request: SearchRequest {
                query: render_template(&fallback.template, title, location, term),
                max_results: profile.max_results_per_call,
                locale: fallback.locale.clone(),
            },
        });
    }

    plan
}

/// Substitutes the placeholders and collapses whitespace runs left behind
/// by empty values.
pub fn render_template(template: &str, title: &str, location: &str, term: &str) -> String {
    let rendered = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(LOCATION_PLACEHOLDER, location)
        .replace(TERM_PLACEHOLDER, term);
    rendered.split_whitespace().collect::<Vec<_>>().join(" ")
}
