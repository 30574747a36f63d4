use crate::{
    error::{AppError, AppResult},
    models::Title,
    services::providers::AvailabilityProvider,
};

/// Shorter queries (after trimming) are never sent to the provider
pub const MIN_QUERY_CHARS: usize = 2;

/// Result of a title search request
#[derive(Debug)]
pub enum SearchOutcome {
    /// Query too short; the provider wasn't called
    Skipped,
    Results(Vec<Title>),
}

/// Trims `query` and checks it is long enough to search for
pub fn validate_query(query: &str) -> AppResult<&str> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Err(AppError::Validation(format!(
            "Search query must be at least {} characters",
            MIN_QUERY_CHARS
        )));
    }
    Ok(trimmed)
}

/// Service function for title search
///
/// Delegates to the configured provider. A query that fails validation is
/// not an error for the caller: it yields `SearchOutcome::Skipped`.
pub async fn search_titles(
    provider: &dyn AvailabilityProvider,
    query: &str,
    country: &str,
) -> AppResult<SearchOutcome> {
    let query = match validate_query(query) {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(error = %e, "Search skipped");
            return Ok(SearchOutcome::Skipped);
        }
    };

    let titles = provider.search_titles(query, country).await?;
    Ok(SearchOutcome::Results(titles))
}

/// Service function for the show detail lookup
pub async fn title_details(
    provider: &dyn AvailabilityProvider,
    id: &str,
    country: &str,
) -> AppResult<Title> {
    provider.get_title(id.trim(), country).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TitleKind;
    use crate::services::providers::MockAvailabilityProvider;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  Inception ").unwrap(), "Inception");
    }

    #[test]
    fn test_validate_query_rejects_short_input() {
        assert!(matches!(validate_query(" a "), Err(AppError::Validation(_))));
        assert!(matches!(validate_query(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_query_counts_characters_not_bytes() {
        assert_eq!(validate_query("千と").unwrap(), "千と");
        assert!(validate_query("千").is_err());
    }

    #[tokio::test]
    async fn test_short_query_skips_provider() {
        let mut provider = MockAvailabilityProvider::new();
        provider.expect_search_titles().never();

        let outcome = assert_ok!(search_titles(&provider, " x ", "us").await);

        assert!(matches!(outcome, SearchOutcome::Skipped));
    }

    #[tokio::test]
    async fn test_search_passes_trimmed_query_and_country() {
        let mut provider = MockAvailabilityProvider::new();
        provider
            .expect_search_titles()
            .times(1)
            .returning(|title, country| {
                assert_eq!(title, "Inception");
                assert_eq!(country, "gb");
                Ok(vec![Title::new("1", "Inception", TitleKind::Movie)])
            });

        let outcome = assert_ok!(search_titles(&provider, "  Inception  ", "gb").await);

        match outcome {
            SearchOutcome::Results(titles) => assert_eq!(titles.len(), 1),
            SearchOutcome::Skipped => panic!("expected results"),
        }
    }

    #[tokio::test]
    async fn test_search_propagates_provider_error() {
        let mut provider = MockAvailabilityProvider::new();
        provider
            .expect_search_titles()
            .times(1)
            .returning(|_, _| Err(AppError::Provider("API returned status 503".to_string())));

        let err = assert_err!(search_titles(&provider, "Inception", "us").await);

        assert!(err.is_provider_failure());
    }

    #[tokio::test]
    async fn test_title_details_propagates_not_found() {
        let mut provider = MockAvailabilityProvider::new();
        provider
            .expect_get_title()
            .times(1)
            .returning(|id, _| Err(AppError::NotFound(format!("Show {} not found", id))));

        let err = assert_err!(title_details(&provider, "404", "us").await);

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
