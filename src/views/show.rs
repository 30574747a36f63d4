use serde::Serialize;

use crate::{
    countries::{self, Country, CountryDisplay},
    models::Title,
    services::normalizer::OfferPolicy,
};

use super::{
    streaming::StreamingOptionsView,
    utils::{details_year_label, rating_label},
};

/// Cast list is cut to this many names
const CAST_PREVIEW: usize = 5;

/// Header block of the show page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShowDetailsView {
    pub id: String,
    pub title: String,
    pub kind_label: &'static str,
    pub years_label: Option<String>,
    pub rating_label: Option<String>,
    pub poster_url: Option<String>,
    pub genres: Vec<String>,
    pub overview: Option<String>,
    pub cast: Vec<String>,
    pub directors: Vec<String>,
    pub creators: Vec<String>,
    pub imdb_id: Option<String>,
}

impl From<&Title> for ShowDetailsView {
    fn from(title: &Title) -> Self {
        Self {
            id: title.id.clone(),
            title: title.name.clone(),
            kind_label: title.kind.label(),
            years_label: details_year_label(title.first_year, title.last_year),
            rating_label: rating_label(title.rating),
            poster_url: title.poster_url.clone(),
            genres: title.genres.iter().map(|g| g.name.clone()).collect(),
            overview: title.overview.clone().filter(|o| !o.trim().is_empty()),
            cast: title.cast.iter().take(CAST_PREVIEW).cloned().collect(),
            directors: title.directors.clone(),
            creators: title.creators.clone(),
            imdb_id: title.imdb_id.clone(),
        }
    }
}

/// Everything the show page renders for one country
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShowPageView {
    pub details: ShowDetailsView,
    pub country: CountryDisplay,
    pub streaming: StreamingOptionsView,
    /// Countries offered by the country selector
    pub countries: &'static [Country],
    /// Countries where the provider listed any offer for this title
    pub countries_with_offers: Vec<String>,
}

impl ShowPageView {
    pub fn build(title: &Title, country: &str, policy: OfferPolicy) -> Self {
        Self {
            details: ShowDetailsView::from(title),
            country: countries::display(country),
            streaming: StreamingOptionsView::from_offers(title.offers_for(country), policy),
            countries: countries::all(),
            countries_with_offers: title
                .countries_with_offers()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OfferType, Service, StreamingOffer, TitleKind};

    fn spirited_away() -> Title {
        let mut title = Title::new("82", "Spirited Away", TitleKind::Movie);
        title.first_year = Some(2001);
        title.rating = Some(86);
        title.cast = [
            "Rumi Hiiragi",
            "Miyu Irino",
            "Mari Natsuki",
            "Takashi Naito",
            "Yasuko Sawaguchi",
            "Tatsuya Gashuin",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        title.directors = vec!["Hayao Miyazaki".to_string()];
        title.streaming_options.insert(
            "us".to_string(),
            vec![StreamingOffer::new(
                Service::new("max", "Max"),
                OfferType::Subscription,
                "https://play.max.com/movie/1",
            )],
        );
        title
    }

    #[test]
    fn test_details_view() {
        let details = ShowDetailsView::from(&spirited_away());

        assert_eq!(details.kind_label, "Movie");
        assert_eq!(details.years_label.as_deref(), Some("2001"));
        assert_eq!(details.rating_label.as_deref(), Some("86/100"));
        assert_eq!(details.cast.len(), CAST_PREVIEW);
        assert_eq!(details.directors, vec!["Hayao Miyazaki".to_string()]);
    }

    #[test]
    fn test_page_for_country_with_offers() {
        let page = ShowPageView::build(&spirited_away(), "us", OfferPolicy::streaming_only());

        assert_eq!(page.country.name, "United States");
        assert_eq!(page.streaming.options.len(), 1);
        assert_eq!(page.countries_with_offers, vec!["us".to_string()]);
    }

    #[test]
    fn test_page_for_country_without_offers() {
        let page = ShowPageView::build(&spirited_away(), "jp", OfferPolicy::streaming_only());

        assert_eq!(page.country.name, "Japan");
        assert!(page.streaming.is_empty());
        assert!(page.streaming.empty_message.is_some());
    }
}
