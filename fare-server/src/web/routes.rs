//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::search::{SearchError, SearchOrchestrator};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/airports", get(list_airports))
        .route("/api/airports/search", get(search_airports))
        .route("/api/search", get(search))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page() -> IndexTemplate {
    IndexTemplate
}

/// Check if the request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// List every served airport.
async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    let airports = state
        .airports
        .all()
        .await
        .iter()
        .map(AirportResult::from_airport)
        .collect();

    Json(AirportsResponse { airports })
}

/// Search airports by code, name, city, or country (autocomplete).
async fn search_airports(
    State(state): State<AppState>,
    Query(req): Query<AirportSearchQuery>,
) -> Json<AirportsResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let matches = state.airports.search(&req.q, limit).await;

    let airports = matches.iter().map(AirportResult::from_airport).collect();

    Json(AirportsResponse { airports })
}

/// Run a fare search.
async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let criteria = req
        .to_criteria()
        .map_err(|message| AppError::BadRequest { message })?;

    let orchestrator = SearchOrchestrator::new(state.fares.as_ref(), state.config.as_ref());
    let outcomes = orchestrator.search(&criteria).await.map_err(AppError::from)?;

    // Return HTML or JSON based on the Accept header. An empty result set
    // is a valid "no itineraries found" answer, not an error.
    if accepts_html(&headers) {
        let results: Vec<ItineraryView> =
            outcomes.iter().map(ItineraryView::from_outcome).collect();

        let template = ResultsTemplate { results };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results: Vec<SearchResult> =
            outcomes.iter().map(SearchResult::from_outcome).collect();

        Ok(Json(SearchResponse { results }).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidCriteria(message) => AppError::BadRequest { message },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, value.parse().unwrap());
        headers
    }

    #[test]
    fn accept_header_detection() {
        assert!(accepts_html(&headers_with_accept(
            "text/html,application/xhtml+xml"
        )));
        assert!(!accepts_html(&headers_with_accept("application/json")));
        assert!(!accepts_html(&HeaderMap::new()));
    }

    #[test]
    fn search_error_mapping() {
        let err = AppError::from(SearchError::InvalidCriteria("missing origin".into()));
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = AppError::from(SearchError::Fetch("boom".into()));
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
