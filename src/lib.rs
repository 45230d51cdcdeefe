pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod url;

use log::debug;

use crate::config::SiteConfig;
use crate::document::Document;
use crate::extractors::{DetailExtractor, Extractor, SummaryExtractor};
use crate::fetcher::Fetcher;

pub use crate::error::ExtractError;
pub use crate::model::{Ingredient, RecipeDetail, RecipeSummary};
pub use crate::url::build_search_url;

/// Extracts every recipe summary from a parsed search-results page, in
/// document order.
pub fn extract_summaries(document: &Document) -> Vec<RecipeSummary> {
    SummaryExtractor.extract(document)
}

/// Extracts the full recipe record from a parsed detail page.
pub fn extract_detail(document: &Document) -> RecipeDetail {
    DetailExtractor.extract(document)
}

/// Fetches the search-results page for `term` at `page` offset and
/// extracts its summaries.
pub fn fetch_summaries(term: &str, page: &str) -> Result<Vec<RecipeSummary>, ExtractError> {
    let body = fetch_page(&build_search_url(term, page))?;
    let document = Document::parse(&body);
    let summaries = extract_summaries(&document);
    debug!("{summaries:#?}");
    Ok(summaries)
}

/// Fetches one recipe detail page and extracts its full record.
pub fn fetch_detail(url: &str) -> Result<RecipeDetail, ExtractError> {
    let body = fetch_page(url)?;
    let document = Document::parse(&body);
    let detail = extract_detail(&document);
    debug!("{detail:#?}");
    Ok(detail)
}

fn fetch_page(url: &str) -> Result<String, ExtractError> {
    let config = SiteConfig::load()?;
    let fetcher = Fetcher::new(&config)?;
    fetcher.fetch(url)
}
