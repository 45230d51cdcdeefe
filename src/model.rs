use serde::{Deserialize, Serialize};

/// One entry of a search-results listing.
///
/// Every field falls back to an empty string when the source page lacks
/// the matching element; extraction never fails on partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub title: String,
    pub subtitle: String,
    pub url: String,
    // historical wire key, existing consumers depend on the spelling
    #[serde(rename = "thumbnai")]
    pub thumbnail: String,
    pub rating: String,
    pub difficulty: String,
    pub preptime: String,
}

/// Full record for one recipe detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub title: String,
    pub rating: String,
    pub difficulty: String,
    pub preptime: String,
    pub cookingtime: String,
    pub thumbnail: String,
    pub ingredients: Vec<Ingredient>,
    pub method: String,
}

/// One row of a recipe's ingredient table, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: String,
    pub ingredient: String,
}
