use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::error;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router, ServiceExt,
};
use serde::{Deserialize, Serialize};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    format!(
        "{}d {:02}:{:02}:{:02}",
        total_seconds / 86_400,
        (total_seconds % 86_400) / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// JSON body shared by movie create and update.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MovieDetailsBody {
    pub director_id: i64,
    pub movie_name: String,
    pub lead_actor: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn get_movies(State(store): State<GuardedMovieStore>) -> Response {
    match store.list_movie_names() {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => {
            error!("Failed to list movies: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn post_movie(
    State(store): State<GuardedMovieStore>,
    Json(body): Json<MovieDetailsBody>,
) -> Response {
    match store.add_movie(body.director_id, &body.movie_name, &body.lead_actor) {
        Ok(_) => "Movie Successfully Added".into_response(),
        Err(err) => {
            error!("Failed to add movie: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn get_movie(State(store): State<GuardedMovieStore>, Path(movie_id): Path<i64>) -> Response {
    match store.get_movie(movie_id) {
        Ok(Some(movie)) => Json(movie).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            error!("Failed to fetch movie {}: {}", movie_id, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn put_movie(
    State(store): State<GuardedMovieStore>,
    Path(movie_id): Path<i64>,
    Json(body): Json<MovieDetailsBody>,
) -> Response {
    match store.update_movie(movie_id, body.director_id, &body.movie_name, &body.lead_actor) {
        Ok(_) => "Movie Details Updated".into_response(),
        Err(err) => {
            error!("Failed to update movie {}: {}", movie_id, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn delete_movie(
    State(store): State<GuardedMovieStore>,
    Path(movie_id): Path<i64>,
) -> Response {
    // Deleting an absent movie affects zero rows and still confirms.
    match store.delete_movie(movie_id) {
        Ok(_) => "Movie Removed".into_response(),
        Err(err) => {
            error!("Failed to delete movie {}: {}", movie_id, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn get_directors(State(store): State<GuardedMovieStore>) -> Response {
    match store.list_directors() {
        Ok(directors) => Json(directors).into_response(),
        Err(err) => {
            error!("Failed to list directors: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn get_director_movies(
    State(store): State<GuardedMovieStore>,
    Path(director_id): Path<i64>,
) -> Response {
    match store.movies_by_director(director_id) {
        Ok(movies) => Json(movies).into_response(),
        Err(err) => {
            error!("Failed to list movies of director {}: {}", director_id, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

impl ServerState {
    fn new(config: ServerConfig, movie_store: GuardedMovieStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            movie_store,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(config: ServerConfig, movie_store: GuardedMovieStore) -> Router {
    let state = ServerState::new(config, movie_store);

    Router::new()
        .route("/", get(home))
        .route("/movies", get(get_movies))
        .route("/movies", post(post_movie))
        .route("/movies/{movie_id}", get(get_movie))
        .route("/movies/{movie_id}", put(put_movie))
        .route("/movies/{movie_id}", delete(delete_movie))
        .route("/directors", get(get_directors))
        .route("/directors/{director_id}/movies", get(get_director_movies))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    movie_store: GuardedMovieStore,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, movie_store);

    // The public surface uses trailing-slash paths ("/movies/"); trim
    // before routing so both spellings resolve.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?)
}
