use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::{
    services::{
        debounce::Debouncer,
        providers::AvailabilityProvider,
        title_search::{self, SearchOutcome},
    },
    views::search::SearchPageView,
};

/// Message pushed to a live search client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveSearchEvent {
    Results { page: SearchPageView },
    Error { query: String, message: String },
}

/// Search-as-you-type session for one client.
///
/// Input is debounced; only the latest input can produce an event, and a
/// superseded provider call is dropped without emitting anything.
pub struct LiveSearch {
    provider: Arc<dyn AvailabilityProvider>,
    country: String,
    debouncer: Debouncer,
    events: mpsc::Sender<LiveSearchEvent>,
}

impl LiveSearch {
    pub fn new(
        provider: Arc<dyn AvailabilityProvider>,
        country: String,
        window: Duration,
        events: mpsc::Sender<LiveSearchEvent>,
    ) -> Self {
        Self {
            provider,
            country,
            debouncer: Debouncer::new(window),
            events,
        }
    }

    /// Handles the current contents of the search box
    pub fn input(&self, raw: &str) {
        let query = match title_search::validate_query(raw) {
            Ok(query) => query.to_string(),
            Err(_) => {
                // Too short to search; drop whatever was pending
                self.debouncer.cancel();
                return;
            }
        };

        let provider = Arc::clone(&self.provider);
        let country = self.country.clone();
        let events = self.events.clone();

        self.debouncer.schedule(async move {
            let event =
                match title_search::search_titles(provider.as_ref(), &query, &country).await {
                    Ok(SearchOutcome::Results(titles)) => LiveSearchEvent::Results {
                        page: SearchPageView::build(&query, &country, titles),
                    },
                    Ok(SearchOutcome::Skipped) => return,
                    Err(e) => {
                        tracing::warn!(error = %e, query = %query, "Live search failed");
                        LiveSearchEvent::Error {
                            message: e.user_message(),
                            query,
                        }
                    }
                };

            if events.send(event).await.is_err() {
                tracing::debug!("Live search client disconnected before results arrived");
            }
        });
    }

    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, PROVIDER_FAILURE_MESSAGE};
    use crate::models::{Title, TitleKind};
    use crate::services::providers::MockAvailabilityProvider;
    use crate::views::search::SearchStatus;

    const WINDOW: Duration = Duration::from_millis(300);

    fn session(
        provider: MockAvailabilityProvider,
    ) -> (LiveSearch, mpsc::Receiver<LiveSearchEvent>) {
        let (tx, rx) = mpsc::channel(8);
        let search = LiveSearch::new(Arc::new(provider), "us".to_string(), WINDOW, tx);
        (search, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_input_fires_once_with_latest_query() {
        let mut provider = MockAvailabilityProvider::new();
        provider
            .expect_search_titles()
            .times(1)
            .returning(|title, country| {
                assert_eq!(title, "incep");
                assert_eq!(country, "us");
                Ok(vec![Title::new("1", "Inception", TitleKind::Movie)])
            });
        let (search, mut rx) = session(provider);

        for text in ["in", "inc", "ince", "incep"] {
            search.input(text);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        match rx.recv().await {
            Some(LiveSearchEvent::Results { page }) => {
                assert_eq!(page.query, "incep");
                assert_eq!(page.status, SearchStatus::Results);
                assert_eq!(page.results.len(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_cancels_pending_search() {
        let mut provider = MockAvailabilityProvider::new();
        provider.expect_search_titles().never();
        let (search, mut rx) = session(provider);

        search.input("Inception");
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.input("I");

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_failure_emits_generic_error() {
        let mut provider = MockAvailabilityProvider::new();
        provider
            .expect_search_titles()
            .times(1)
            .returning(|_, _| Err(AppError::Provider("API returned status 502: oops".to_string())));
        let (search, mut rx) = session(provider);

        search.input("Inception");

        match rx.recv().await {
            Some(LiveSearchEvent::Error { query, message }) => {
                assert_eq!(query, "Inception");
                assert_eq!(message, PROVIDER_FAILURE_MESSAGE);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = LiveSearchEvent::Error {
            query: "x".to_string(),
            message: "m".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["query"], "x");
    }
}
