/// Fixed origin of the recipe site, used to absolutize relative links.
pub const SITE_ORIGIN: &str = "https://www.chefkoch.de";

/// Builds the search-results URL for a search term and page offset.
///
/// `term` is inserted verbatim; a term containing reserved URL
/// characters must be encoded by the caller.
pub fn build_search_url(term: &str, page: &str) -> String {
    format!("{SITE_ORIGIN}/rs/s{page}/{term}/Rezepte.html#more2")
}
