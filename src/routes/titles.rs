use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use super::AppState;
use crate::{
    countries,
    error::AppResult,
    middleware::RequestId,
    services::title_search::{self, SearchOutcome},
    views::{SearchPageView, ShowPageView},
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShowParams {
    country: Option<String>,
}

/// Handler for the search page
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchPageView>> {
    let country = countries::resolve(params.country.as_deref(), &state.default_country);
    let query = params.q.trim();

    let page = match title_search::search_titles(state.provider.as_ref(), query, &country).await? {
        SearchOutcome::Skipped => SearchPageView::prompt(query, &country),
        SearchOutcome::Results(titles) => {
            tracing::info!(
                %request_id,
                query,
                country = %country,
                results = titles.len(),
                "Search completed"
            );
            SearchPageView::build(query, &country, titles)
        }
    };

    Ok(Json(page))
}

/// Handler for the show page of one title in one country
pub async fn show(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
    Query(params): Query<ShowParams>,
) -> AppResult<Json<ShowPageView>> {
    let country = countries::resolve(params.country.as_deref(), &state.default_country);

    let title = title_search::title_details(state.provider.as_ref(), &id, &country).await?;
    let page = ShowPageView::build(&title, &country, state.offer_policy);

    tracing::info!(
        %request_id,
        id = %title.id,
        country = %country,
        options = page.streaming.options.len(),
        "Show page built"
    );

    Ok(Json(page))
}
