use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use scraper::Selector;

use crate::document::Document;
use crate::extractors::{fields, Extractor};
use crate::model::{Ingredient, RecipeDetail};

const E: &str = "Invalid selector";
lazy_static! {
    static ref PAGE_TITLE: Selector = Selector::parse(".page-title").expect(E);
    static ref RATING_AVERAGE: Selector = Selector::parse(".rating__average-rating").expect(E);
    static ref PREPARATION_INFO: Selector = Selector::parse("#preparation-info").expect(E);
    static ref METHOD: Selector = Selector::parse("#rezept-zubereitung").expect(E);
    static ref SLIDESHOW_IMAGE: Selector = Selector::parse(".slideshow-image").expect(E);
    // the site's markup really does spell the class "incredients"
    static ref INGREDIENT_ROW: Selector =
        Selector::parse(".incredients > tbody > tr").expect(E);
    static ref AMOUNT_CELL: Selector = Selector::parse("td.amount").expect(E);
    static ref CELL: Selector = Selector::parse("td").expect(E);
}

// Canonical labels of the preparation-info blob
const LABEL_PREPTIME: &str = "Arbeitszeit";
const LABEL_COOKINGTIME: &str = "Kochzeit";
const LABEL_DIFFICULTY: &str = "Schwierigkeitsgrad";

// The site's "no data supplied" phrase and the sentinel it maps to
const NO_DATA: &str = "keine Angabe";
const NO_DATA_SENTINEL: &str = "k.A.";

/// Builds the full `RecipeDetail` record for one detail page.
pub struct DetailExtractor;

impl Extractor for DetailExtractor {
    type Record = RecipeDetail;

    fn extract(&self, document: &Document) -> RecipeDetail {
        let info = document
            .first(&PREPARATION_INFO)
            .map(|n| parse_preparation_info(&n.text()))
            .unwrap_or_default();

        RecipeDetail {
            title: text_of(document, &PAGE_TITLE),
            rating: fields::normalized_rating(
                &document
                    .first(&RATING_AVERAGE)
                    .map(|n| n.text())
                    .unwrap_or_default(),
            ),
            difficulty: lookup(&info, LABEL_DIFFICULTY),
            preptime: lookup(&info, LABEL_PREPTIME),
            cookingtime: lookup(&info, LABEL_COOKINGTIME),
            thumbnail: document
                .first(&SLIDESHOW_IMAGE)
                .map(|n| n.attr_or("src", ""))
                .unwrap_or_default(),
            ingredients: ingredients(document),
            method: text_of(document, &METHOD),
        }
    }
}

/// Parses the preparation-info blob into a label-to-value map.
///
/// The blob reads like `"Arbeitszeit: ca. 30 Min. / Koch-/Backzeit: ca.
/// 1 Std. / Schwierigkeitsgrad: simpel"`. Label spellings are
/// normalized before the split so the cooking-time label's embedded
/// slash cannot break segmentation. A segment without a colon is
/// skipped; the rest of the blob still parses.
fn parse_preparation_info(blob: &str) -> HashMap<String, String> {
    let blob = blob
        .replace('\n', "")
        .replace("Koch-/Backzeit", LABEL_COOKINGTIME)
        .replace("Backzeit", LABEL_COOKINGTIME)
        .replace(NO_DATA, NO_DATA_SENTINEL);

    let mut info = HashMap::new();
    for segment in blob.split('/') {
        let segment = segment.trim();
        match segment.split_once(':') {
            Some((label, value)) => {
                info.insert(label.trim().to_string(), value.trim().to_string());
            }
            None => {
                if !segment.is_empty() {
                    debug!("Skipping preparation-info segment without a label: {segment:?}");
                }
            }
        }
    }
    info
}

/// Rows of the ingredient table in document order. Amounts can be
/// empty ("Salz und Pfeffer" has no quantity); the name is the second
/// cell of the row.
fn ingredients(document: &Document) -> Vec<Ingredient> {
    document
        .find(&INGREDIENT_ROW)
        .iter()
        .map(|row| Ingredient {
            amount: fields::text_of(row, &AMOUNT_CELL),
            ingredient: row
                .find(&CELL)
                .get(1)
                .map(|cell| cell.text().trim().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn text_of(document: &Document, selector: &Selector) -> String {
    document
        .first(selector)
        .map(|n| n.text().trim().to_string())
        .unwrap_or_default()
}

fn lookup(info: &HashMap<String, String>, label: &str) -> String {
    info.get(label).cloned().unwrap_or_default()
}
