/// Streaming Availability API provider (via RapidAPI)
///
/// Endpoints used:
/// 1. Title search: `GET /shows/search/title?title=..&country=..`
/// 2. Show details: `GET /shows/{id}?country=..`, streaming options included
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ApiShow, Title},
    services::providers::AvailabilityProvider,
};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PROVIDER_NAME: &str = "streaming_availability";

#[derive(Clone)]
pub struct StreamingAvailabilityProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: Url,
    api_host: String,
    output_language: String,
}

impl std::fmt::Debug for StreamingAvailabilityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingAvailabilityProvider")
            .field("api_url", &self.api_url.as_str())
            .field("output_language", &self.output_language)
            .finish_non_exhaustive()
    }
}

impl StreamingAvailabilityProvider {
    pub fn new(
        api_key: String,
        api_url: &str,
        output_language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| AppError::Config(format!("Invalid provider URL {}: {}", api_url, e)))?;
        let api_host = api_url
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Config(format!("Provider URL {} has no host", api_url)))?;

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            api_host,
            output_language,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.rapidapi_key.clone(),
            &config.streaming_api_url,
            config.output_language.clone(),
            config.request_timeout(),
        )
    }

    /// Builds `{api_url}/{segments..}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("Provider URL {} can't be a base", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// A 404 becomes `NotFound` only for lookups by ID (`lookup_id` set);
    /// every other non-2xx status is a provider failure.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        lookup_id: Option<&str>,
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(query)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = lookup_id {
                return Err(AppError::NotFound(format!("Show {} not found", id)));
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                provider = PROVIDER_NAME,
                "Provider returned an error status"
            );
            return Err(AppError::Provider(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl AvailabilityProvider for StreamingAvailabilityProvider {
    async fn search_titles(&self, title: &str, country: &str) -> AppResult<Vec<Title>> {
        let url = self.endpoint(&["shows", "search", "title"])?;
        let shows: Vec<ApiShow> = self
            .fetch(
                url,
                &[
                    ("title", title),
                    ("country", country),
                    ("output_language", self.output_language.as_str()),
                ],
                None,
            )
            .await?;

        let titles: Vec<Title> = shows.into_iter().map(Title::from).collect();

        tracing::info!(
            query = %title,
            country = %country,
            results = titles.len(),
            provider = PROVIDER_NAME,
            "Title search completed"
        );

        Ok(titles)
    }

    async fn get_title(&self, id: &str, country: &str) -> AppResult<Title> {
        let url = self.endpoint(&["shows", id])?;
        let show: ApiShow = self
            .fetch(
                url,
                &[
                    ("country", country),
                    ("output_language", self.output_language.as_str()),
                ],
                Some(id),
            )
            .await?;

        let title = Title::from(show);

        tracing::info!(
            title_id = %id,
            country = %country,
            offers = title.offers_for(country).len(),
            provider = PROVIDER_NAME,
            "Show details fetched"
        );

        Ok(title)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
