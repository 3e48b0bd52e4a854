use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};

use super::pages;
use super::AppState;
use crate::models::PostId;
use crate::view::{BlogView, Draft, SubmitOutcome};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home).post(submit_post))
        .route("/posts/:id", get(post_detail))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

/// Fresh page: load the list, empty form.
async fn home(State(state): State<AppState>) -> Response {
    let mut view = BlogView::new();
    view.load(&state.api).await;

    Html(view.render(state.config.display_offset).into_string()).into_response()
}

/// Form submission (POST /).
///
/// Every outcome re-renders the page: a published post comes back with a
/// cleared form, a skipped or failed one with the fields as typed.
async fn submit_post(State(state): State<AppState>, Form(draft): Form<Draft>) -> Response {
    let mut view = BlogView::with_draft(draft);

    match view.submit(&state.api).await {
        // Already re-loaded by the submission itself.
        SubmitOutcome::Published => {}
        SubmitOutcome::Skipped | SubmitOutcome::Failed => view.load(&state.api).await,
    }

    Html(view.render(state.config.display_offset).into_string()).into_response()
}

async fn post_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = id
        .parse::<serde_json::Number>()
        .map_or_else(|_| PostId::Text(id.clone()), PostId::Number);

    match state.api.get_post(&id).await {
        Ok(Some(post)) => {
            let html = pages::render_post_detail_page(&post, state.config.display_offset);
            Html(html.into_string()).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Html(pages::render_post_not_found_page(&id).into_string()),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, post_id = %id, "Failed to fetch post");
            (
                StatusCode::BAD_GATEWAY,
                Html(pages::render_unavailable_page().into_string()),
            )
                .into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
