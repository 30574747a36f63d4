use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::countries::{self, Country, CountryDisplay};

#[derive(Debug, Deserialize)]
pub struct CountryParams {
    search: Option<String>,
}

/// Country selector contents
#[derive(Debug, Serialize)]
pub struct CountryListView {
    pub default_country: CountryDisplay,
    pub countries: Vec<&'static Country>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CountryParams>,
) -> Json<CountryListView> {
    let search = params.search.unwrap_or_default();

    Json(CountryListView {
        default_country: countries::display(&state.default_country),
        countries: countries::filter(&search),
    })
}
