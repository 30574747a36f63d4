use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

pub mod streaming;
pub mod title;

pub use streaming::{
    AudioTrack, OfferType, Price, Quality, Service, ServiceImages, StreamingOffer, Subtitle,
};
pub use title::{Genre, Title, TitleKind};

// ============================================================================
// Streaming Availability API Types
// ============================================================================
//
// Everything beyond `id` and `title` is treated as optional. Conversion into
// the domain types above happens once, here, so the rest of the crate never
// deals with half-populated provider payloads.

/// Accepts `null` wherever a collection or flag may be missing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes array items one at a time, skipping the ones that don't fit `T`.
/// Anything other than an array decodes as empty.
fn decode_items<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed provider record");
                None
            }
        })
        .collect()
}

/// Lists where one bad entry must not sink the whole payload
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(decode_items)
        .unwrap_or_default())
}

/// Country-keyed option lists; `null` or malformed countries decode as empty
fn lenient_country_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, Vec<ApiStreamingOption>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|(country, options)| (country, decode_items(options)))
        .collect())
}

/// Prices arrive as `"3.99"` from some endpoints and `3.99` from others
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Raw show from `/shows/search/title` and `/shows/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiShow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub show_type: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tmdb_id: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub first_air_year: Option<i32>,
    #[serde(default)]
    pub last_air_year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub genres: Vec<ApiGenre>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub cast: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub directors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub creators: Vec<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub image_set: Option<ApiImageSet>,
    #[serde(default, deserialize_with = "lenient_country_map")]
    pub streaming_options: HashMap<String, Vec<ApiStreamingOption>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenre {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiImageSet {
    #[serde(default)]
    pub vertical_poster: Option<ApiPosterSizes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPosterSizes {
    #[serde(default)]
    pub w480: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStreamingOption {
    #[serde(default)]
    pub service: Option<ApiService>,
    #[serde(rename = "type", default)]
    pub offer_type: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub price: Option<ApiPrice>,
    #[serde(default)]
    pub addon: Option<ApiService>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub audios: Vec<ApiLocale>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub subtitles: Vec<ApiSubtitle>,
    /// Unix timestamp, seconds
    #[serde(default)]
    pub expires_on: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiService {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub image_set: Option<ApiServiceImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiServiceImageSet {
    #[serde(default)]
    pub light_theme_image: Option<String>,
    #[serde(default)]
    pub dark_theme_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLocale {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Subtitle entry; newer payloads nest the language under `locale`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSubtitle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed_captions: bool,
    #[serde(default)]
    pub locale: Option<ApiLocale>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPrice {
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub formatted: Option<String>,
}

impl From<ApiShow> for Title {
    fn from(show: ApiShow) -> Self {
        let kind = show
            .show_type
            .as_deref()
            .map(TitleKind::parse)
            .unwrap_or(TitleKind::Movie);

        let poster_url = show
            .image_set
            .and_then(|set| set.vertical_poster)
            .and_then(|sizes| sizes.w480)
            .or(show.poster_url);

        let streaming_options = show
            .streaming_options
            .into_iter()
            .map(|(country, options)| {
                let offers = options
                    .into_iter()
                    .filter_map(ApiStreamingOption::into_offer)
                    .collect();
                (country.to_ascii_lowercase(), offers)
            })
            .collect();

        Title {
            id: show.id,
            name: show.title,
            kind,
            first_year: show.release_year.or(show.first_air_year),
            last_year: show.last_air_year,
            poster_url,
            rating: show
                .rating
                .filter(|r| r.is_finite() && *r >= 0.0)
                .map(|r| r.round() as u32),
            genres: show
                .genres
                .into_iter()
                .map(|g| Genre {
                    name: g.name.unwrap_or_else(|| g.id.clone()),
                    id: g.id,
                })
                .collect(),
            cast: show.cast,
            directors: show.directors,
            creators: show.creators,
            overview: show.overview,
            imdb_id: show.imdb_id,
            tmdb_id: show.tmdb_id,
            streaming_options,
        }
    }
}

impl ApiService {
    /// A service without an id can't be deduplicated or linked, so it yields `None`
    fn into_service(self) -> Option<Service> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        let images = self.image_set.unwrap_or_default();
        Some(Service {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            home_url: self.home_page,
            image_urls: ServiceImages {
                light: images.light_theme_image,
                dark: images.dark_theme_image,
            },
        })
    }
}

impl ApiSubtitle {
    fn into_subtitle(self) -> Option<Subtitle> {
        let (language, region) = match self.locale {
            Some(ApiLocale {
                language: Some(language),
                region,
            }) => (language, region),
            _ => (self.language?, self.region),
        };

        Some(Subtitle {
            language,
            region,
            closed_captions: self.closed_captions,
        })
    }
}

impl ApiPrice {
    fn into_price(self) -> Option<Price> {
        let formatted = match (self.formatted, &self.amount, &self.currency) {
            (Some(formatted), _, _) => formatted,
            (None, Some(amount), Some(currency)) => format!("{} {}", amount, currency),
            (None, Some(amount), None) => amount.clone(),
            (None, None, _) => return None,
        };

        Some(Price {
            amount: self.amount,
            currency: self.currency,
            formatted,
        })
    }
}

impl ApiStreamingOption {
    /// Converts to a domain offer, dropping options that can't be displayed
    pub fn into_offer(self) -> Option<StreamingOffer> {
        let Some(service) = self.service.and_then(ApiService::into_service) else {
            tracing::debug!(
                offer_type = ?self.offer_type,
                "Skipping streaming option without service"
            );
            return None;
        };

        let Some(offer_type) = self.offer_type.as_deref().and_then(OfferType::parse) else {
            tracing::debug!(
                service = %service.id,
                offer_type = ?self.offer_type,
                "Skipping streaming option with unknown type"
            );
            return None;
        };

        let Some(link) = self.link.or_else(|| self.video_link.clone()) else {
            tracing::debug!(service = %service.id, "Skipping streaming option without link");
            return None;
        };

        Some(StreamingOffer {
            service,
            offer_type,
            quality: self.quality.as_deref().and_then(Quality::parse),
            link,
            video_link: self.video_link,
            price: self.price.and_then(ApiPrice::into_price),
            addon: self.addon.and_then(ApiService::into_service),
            audios: self
                .audios
                .into_iter()
                .filter_map(|audio| {
                    Some(AudioTrack {
                        language: audio.language?,
                        region: audio.region,
                    })
                })
                .collect(),
            subtitles: self
                .subtitles
                .into_iter()
                .filter_map(ApiSubtitle::into_subtitle)
                .collect(),
            expires_on: self
                .expires_on
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }
}
