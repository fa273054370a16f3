use axum::{
    extract::{Form, State},
    response::Html,
};

use crate::{
    error::Result,
    handlers::AppState,
    models::sale::EntryForm,
    services::EntryOutcome,
    views,
};

/// Entry tab handler
pub async fn entry_page(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state, &EntryOutcome::Idle).await
}

/// Save handler for the entry form
pub async fn submit_sale(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Html<String>> {
    let outcome = state.entry_service.submit(form).await;
    render(&state, &outcome).await
}

async fn render(state: &AppState, outcome: &EntryOutcome) -> Result<Html<String>> {
    // Re-read on every render so the selector reflects the current catalog.
    let books = state.store.list_books().await?;
    Ok(Html(views::render_entry_page(outcome, &books)?))
}
