//! Landing page.

use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::error::ApiError;

/// Template rendered for the site root.
pub const INDEX_TEMPLATE: &str = "index.html";

/// GET / — renders the frontend entry page.
#[tracing::instrument(skip(state))]
pub async fn render(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.templates.render(INDEX_TEMPLATE)?;
    Ok(Html(page))
}
