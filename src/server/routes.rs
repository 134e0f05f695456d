//! HTTP routes

use crate::engine::{evaluate_with, resolve_hint};
use crate::error::QueryError;
use crate::render;
use crate::server::api::{GuessForm, GuessResponse, HintRequest, HintResponse};
use crate::server::state::AppState;
use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use std::path::Path as FsPath;
use tracing::{debug, error, warn};

/// Build the application router
///
/// With `disable_caching` every response tells clients not to cache it,
/// which makes editing puzzles while the server runs less confusing.
pub fn router(state: AppState, disable_caching: bool) -> Router {
    let router = Router::new()
        .route("/", get(serve_index))
        .route("/main.css", get(serve_css))
        .route("/main.js", get(serve_js))
        .route("/puzzles/{id}", get(add_trailing_slash))
        .route("/puzzles/{id}/", get(serve_puzzle))
        .route("/puzzles/{id}/{file}", get(serve_puzzle_file))
        .route("/guess", post(handle_guess))
        .route("/hint", post(handle_hint))
        .fallback(not_found)
        .with_state(state);

    if disable_caching {
        router.layer(middleware::from_fn(no_cache))
    } else {
        router
    }
}

/// Error response with a plain-text reason
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl ToString) -> Self {
        ApiError {
            status,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(render::index_page(&state.catalog).into_string())
}

async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], render::MAIN_CSS)
}

async fn serve_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        render::MAIN_JS,
    )
}

async fn add_trailing_slash(Path(id): Path<String>) -> Redirect {
    Redirect::temporary(&format!("/puzzles/{id}/"))
}

async fn serve_puzzle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(puzzle) => Html(render::puzzle_page(puzzle).into_string()).into_response(),
        None => {
            warn!(puzzle = %id, "Unknown puzzle requested");
            not_found_response().into_response()
        }
    }
}

async fn serve_puzzle_file(
    State(state): State<AppState>,
    Path((id, file)): Path<(String, String)>,
) -> Response {
    // Only names from the catalog's file set are served, so `file` can never
    // escape the puzzle directory.
    let known = state
        .catalog
        .get(&id)
        .is_some_and(|puzzle| puzzle.has_file(&file));
    if !known {
        warn!(puzzle = %id, file = %file, "Unknown puzzle file requested");
        return not_found_response().into_response();
    }

    let path = state.root.join(&id).join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read puzzle file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn handle_guess(
    State(state): State<AppState>,
    Form(form): Form<GuessForm>,
) -> Result<Json<GuessResponse>, ApiError> {
    let GuessForm { puzzle, guess } = form;

    // The success lookup reads from disk
    let outcome = {
        let state = state.clone();
        let (puzzle, guess) = (puzzle.clone(), guess.clone());
        tokio::task::spawn_blocking(move || {
            evaluate_with(&state.catalog, state.success.as_ref(), &puzzle, &guess)
        })
        .await
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e))?
    };

    let outcome = outcome.map_err(|e| match e {
        QueryError::EmptyInput | QueryError::UnknownPuzzle(_) => {
            debug!(error = %e, "Rejected guess");
            ApiError::new(StatusCode::BAD_REQUEST, e)
        }
        other => {
            error!(error = %other, "Guess evaluation failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, other)
        }
    })?;

    state.store.record_guess(&puzzle, &guess, outcome.kind());
    Ok(Json(GuessResponse::new(puzzle, guess, outcome)))
}

async fn handle_hint(
    State(state): State<AppState>,
    Json(request): Json<HintRequest>,
) -> Result<Json<HintResponse>, ApiError> {
    let hint = resolve_hint(&state.catalog, &request.puzzle, request.hint_requested).map_err(
        |e| match e {
            QueryError::UnknownPuzzle(_) => ApiError::new(StatusCode::NOT_FOUND, e),
            other => ApiError::new(StatusCode::BAD_REQUEST, other),
        },
    )?;

    // resolve_hint only succeeds for indices within 0..len
    state
        .store
        .record_hint(&request.puzzle, request.hint_requested as usize);

    Ok(Json(HintResponse {
        hint_requested: request.hint_requested,
        hint: hint.to_string(),
    }))
}

async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    warn!(%uri, "No route");
    not_found_response()
}

fn not_found_response() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page().into_string()),
    )
}

async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    response
}

/// Content type for a download, from its extension
fn content_type(path: &FsPath) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        _ => {
            warn!(path = %path.display(), "Unknown file type, serving as binary");
            "application/octet-stream"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(FsPath::new("a/map.PDF")), "application/pdf");
        assert_eq!(content_type(FsPath::new("notes.txt")), "text/plain; charset=utf-8");
        assert_eq!(content_type(FsPath::new("blob")), "application/octet-stream");
    }
}
