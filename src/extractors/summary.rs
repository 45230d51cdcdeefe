use lazy_static::lazy_static;
use log::debug;
use scraper::Selector;

use crate::document::{Document, Node};
use crate::extractors::{fields, Extractor};
use crate::model::RecipeSummary;

const E: &str = "Invalid selector";
lazy_static! {
    static ref RESULT_ITEM: Selector = Selector::parse(".search-list-item").expect(E);
    static ref TITLE: Selector = Selector::parse(".search-list-item-title").expect(E);
    static ref SUBTITLE: Selector = Selector::parse(".search-list-item-subtitle").expect(E);
    static ref DETAIL_LINK: Selector = Selector::parse(".search-list-item > a").expect(E);
    static ref THUMBNAIL: Selector = Selector::parse("picture > img").expect(E);
    static ref RATING: Selector =
        Selector::parse(".search-list-item-uservotes-stars").expect(E);
    static ref DIFFICULTY: Selector =
        Selector::parse(".search-list-item-difficulty").expect(E);
    static ref PREPTIME: Selector = Selector::parse(".search-list-item-preptime").expect(E);
}

/// Builds one `RecipeSummary` per result node of a search-results page,
/// in document order. A page without result nodes yields an empty list.
pub struct SummaryExtractor;

impl Extractor for SummaryExtractor {
    type Record = Vec<RecipeSummary>;

    fn extract(&self, document: &Document) -> Vec<RecipeSummary> {
        let summaries: Vec<RecipeSummary> = document
            .find(&RESULT_ITEM)
            .iter()
            .map(summary_from)
            .collect();
        debug!("Extracted {} search results", summaries.len());
        summaries
    }
}

fn summary_from(node: &Node) -> RecipeSummary {
    let subtitle = node
        .first(&SUBTITLE)
        .map(|n| fields::collapse(&n.text()))
        .unwrap_or_default();

    let thumbnail = node
        .first(&THUMBNAIL)
        .map(|n| fields::image_source(&n))
        .unwrap_or_default();

    RecipeSummary {
        title: fields::text_of(node, &TITLE),
        subtitle,
        url: fields::absolutize(&fields::attr_of(node, &DETAIL_LINK, "href")),
        thumbnail,
        rating: fields::decimal(&fields::attr_of(node, &RATING, "title")),
        difficulty: fields::text_of(node, &DIFFICULTY),
        preptime: fields::text_of(node, &PREPTIME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_item(inner: &str) -> String {
        format!(r#"<li class="search-list-item">{inner}</li>"#)
    }

    fn search_page(items: &[String]) -> Document {
        Document::parse(&format!(
            r#"<html><body><ul class="search-list">{}</ul></body></html>"#,
            items.join("")
        ))
    }

    fn full_item() -> String {
        result_item(concat!(
            r#"<a href="/rezepte/745721177147257/Gruene-Bohnen.html">"#,
            "<h2 class=\"search-list-item-title\">Grüne Bohnen</h2>",
            "<p class=\"search-list-item-subtitle\">Klassische Beilage\nmit Speck umwickelt</p>",
            r#"<picture><img srcset="https://img.chefkoch-cdn.de/bohnen-320.jpg 320w"></picture>"#,
            r#"<div class="search-list-item-uservotes-stars" title="4.49 von 5 Sternen. 213 Bewertungen."></div>"#,
            r#"<span class="search-list-item-difficulty">simpel</span>"#,
            r#"<span class="search-list-item-preptime">30 min.</span>"#,
            "</a>",
        ))
    }

    #[test]
    fn test_full_result_node() {
        let document = search_page(&[full_item()]);
        let summaries = SummaryExtractor.extract(&document);

        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.title, "Grüne Bohnen");
        assert_eq!(summary.subtitle, "Klassische Beilage mit Speck umwickelt");
        assert_eq!(
            summary.url,
            "https://www.chefkoch.de/rezepte/745721177147257/Gruene-Bohnen.html"
        );
        assert_eq!(
            summary.thumbnail,
            "https://img.chefkoch-cdn.de/bohnen-320.jpg 320w"
        );
        assert_eq!(summary.rating, "4.49");
        assert_eq!(summary.difficulty, "simpel");
        assert_eq!(summary.preptime, "30 min.");
    }

    #[test]
    fn test_one_summary_per_result_node() {
        let items = vec![full_item(), full_item(), full_item()];
        let document = search_page(&items);
        assert_eq!(SummaryExtractor.extract(&document).len(), 3);
    }

    #[test]
    fn test_empty_results_page() {
        let document = search_page(&[]);
        assert!(SummaryExtractor.extract(&document).is_empty());
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let document = search_page(&[result_item(
            "<h2 class=\"search-list-item-title\">Nur ein Titel</h2>",
        )]);
        let summaries = SummaryExtractor.extract(&document);

        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.title, "Nur ein Titel");
        assert_eq!(summary.subtitle, "");
        assert_eq!(summary.url, "");
        assert_eq!(summary.thumbnail, "");
        assert_eq!(summary.rating, "");
        assert_eq!(summary.difficulty, "");
        assert_eq!(summary.preptime, "");
    }

    #[test]
    fn test_lazy_loaded_thumbnail_falls_back() {
        let document = search_page(&[result_item(concat!(
            r#"<picture><img srcset="data:image/gif;base64,R0lGODlhAQABAAAAACw=" "#,
            r#"data-srcset="https://img.chefkoch-cdn.de/bohnen-echt.jpg 320w"></picture>"#,
        ))]);
        let summaries = SummaryExtractor.extract(&document);

        assert_eq!(
            summaries[0].thumbnail,
            "https://img.chefkoch-cdn.de/bohnen-echt.jpg 320w"
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let document = search_page(&[full_item(), full_item()]);
        let first = SummaryExtractor.extract(&document);
        let second = SummaryExtractor.extract(&document);
        assert_eq!(first, second);
    }
}
