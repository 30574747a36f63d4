use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::StreamingOffer;

/// Kind of title
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

impl TitleKind {
    /// Parses the provider's `showType`, treating anything unknown as a movie
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "series" => TitleKind::Series,
            _ => TitleKind::Movie,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleKind::Movie => "Movie",
            TitleKind::Series => "Series",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// A movie or series as returned by the availability provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    /// Provider-assigned identifier
    pub id: String,
    pub name: String,
    pub kind: TitleKind,
    /// Release year for movies, first air year for series
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub poster_url: Option<String>,
    /// Provider rating on a 0-100 scale
    pub rating: Option<u32>,
    pub genres: Vec<Genre>,
    pub cast: Vec<String>,
    pub directors: Vec<String>,
    pub creators: Vec<String>,
    pub overview: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<String>,
    /// Offers keyed by lower-case country code, in provider order
    pub streaming_options: HashMap<String, Vec<StreamingOffer>>,
}

impl Title {
    /// Creates a title with only the required fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: TitleKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            first_year: None,
            last_year: None,
            poster_url: None,
            rating: None,
            genres: Vec::new(),
            cast: Vec::new(),
            directors: Vec::new(),
            creators: Vec::new(),
            overview: None,
            imdb_id: None,
            tmdb_id: None,
            streaming_options: HashMap::new(),
        }
    }

    /// Offers for one country; empty when the provider listed none
    pub fn offers_for(&self, country: &str) -> &[StreamingOffer] {
        self.streaming_options
            .get(&country.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Country codes that have at least one offer, sorted
    pub fn countries_with_offers(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self
            .streaming_options
            .iter()
            .filter(|(_, offers)| !offers.is_empty())
            .map(|(code, _)| code.as_str())
            .collect();
        countries.sort_unstable();
        countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OfferType, Service};

    #[test]
    fn test_kind_parse_defaults_to_movie() {
        assert_eq!(TitleKind::parse("series"), TitleKind::Series);
        assert_eq!(TitleKind::parse("SERIES"), TitleKind::Series);
        assert_eq!(TitleKind::parse("movie"), TitleKind::Movie);
        assert_eq!(TitleKind::parse("documentary"), TitleKind::Movie);
    }

    #[test]
    fn test_offers_for_is_case_insensitive() {
        let mut title = Title::new("42", "Inception", TitleKind::Movie);
        title.streaming_options.insert(
            "us".to_string(),
            vec![StreamingOffer::new(
                Service::new("netflix", "Netflix"),
                OfferType::Subscription,
                "https://netflix.com/title/1",
            )],
        );

        assert_eq!(title.offers_for("US").len(), 1);
        assert!(title.offers_for("jp").is_empty());
    }

    #[test]
    fn test_countries_with_offers_skips_empty() {
        let mut title = Title::new("42", "Inception", TitleKind::Movie);
        let offer = StreamingOffer::new(
            Service::new("netflix", "Netflix"),
            OfferType::Subscription,
            "https://netflix.com/title/1",
        );
        title
            .streaming_options
            .insert("us".to_string(), vec![offer.clone()]);
        title.streaming_options.insert("de".to_string(), vec![offer]);
        title.streaming_options.insert("jp".to_string(), vec![]);

        assert_eq!(title.countries_with_offers(), vec!["de", "us"]);
    }
}
