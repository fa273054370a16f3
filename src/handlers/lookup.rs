use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{error::Result, handlers::AppState, views};

/// Query string of the lookup tab
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub name: String,
}

/// Lookup tab handler
pub async fn lookup_page(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Html<String>> {
    let outcome = state.lookup_service.lookup(&params.name).await;
    Ok(Html(views::render_lookup_page(&outcome)?))
}
