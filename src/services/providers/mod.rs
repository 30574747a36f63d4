/// Availability provider abstraction
///
/// The catalog is served by a third-party metadata/availability API. Handlers
/// and services only see this trait, so the HTTP implementation can be swapped
/// for a fake in tests.
use crate::{error::AppResult, models::Title};

pub mod streaming_availability;

pub use streaming_availability::StreamingAvailabilityProvider;

/// Trait for title metadata and availability providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Search for titles by name in one country
    ///
    /// Fails with `AppError::Provider`/`AppError::Transport` on any provider
    /// or network failure. No retries.
    async fn search_titles(&self, title: &str, country: &str) -> AppResult<Vec<Title>>;

    /// Fetch one title, including its streaming options, by provider ID
    ///
    /// Fails with `AppError::NotFound` when the provider doesn't know the ID.
    async fn get_title(&self, id: &str, country: &str) -> AppResult<Title>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
