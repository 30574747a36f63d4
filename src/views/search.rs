use serde::Serialize;

use crate::models::Title;

use super::utils::{card_year_label, pluralize, rating_label, show_href};

pub const PROMPT_MESSAGE: &str = "Enter a search query to find movies and TV shows";
pub const NO_RESULTS_HINT: &str = "Try a different search term or check your spelling";

/// Compact title card used in search results
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShowCardView {
    pub id: String,
    pub title: String,
    pub kind_label: &'static str,
    pub year_label: String,
    pub poster_url: Option<String>,
    pub rating_label: Option<String>,
    pub genres_label: Option<String>,
    pub href: String,
}

impl ShowCardView {
    pub fn new(title: &Title, country: &str) -> Self {
        let genres_label = (!title.genres.is_empty()).then(|| {
            title
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        });

        Self {
            id: title.id.clone(),
            title: title.name.clone(),
            kind_label: title.kind.label(),
            year_label: card_year_label(title.first_year, title.last_year),
            poster_url: title.poster_url.clone(),
            rating_label: rating_label(title.rating),
            genres_label,
            href: show_href(&title.id, country),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// No search was run; the query was too short
    Prompt,
    Results,
    Empty,
}

/// Everything the search page renders
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchPageView {
    pub query: String,
    pub country: String,
    pub status: SearchStatus,
    pub heading: String,
    pub hint: Option<&'static str>,
    pub results: Vec<ShowCardView>,
}

impl SearchPageView {
    pub fn prompt(query: &str, country: &str) -> Self {
        Self {
            query: query.to_string(),
            country: country.to_string(),
            status: SearchStatus::Prompt,
            heading: PROMPT_MESSAGE.to_string(),
            hint: None,
            results: Vec::new(),
        }
    }

    pub fn build(query: &str, country: &str, titles: Vec<Title>) -> Self {
        let results: Vec<ShowCardView> = titles
            .iter()
            .map(|title| ShowCardView::new(title, country))
            .collect();

        let (status, heading, hint) = if results.is_empty() {
            (
                SearchStatus::Empty,
                format!("No results found for \"{}\"", query),
                Some(NO_RESULTS_HINT),
            )
        } else {
            (
                SearchStatus::Results,
                format!(
                    "Found {} for \"{}\"",
                    pluralize(results.len(), "result", "results"),
                    query
                ),
                None,
            )
        };

        Self {
            query: query.to_string(),
            country: country.to_string(),
            status,
            heading,
            hint,
            results,
        }
    }
}
