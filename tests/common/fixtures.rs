//! Test data fixtures
//!
//! Creates a temporary movie database seeded with the directors and movies
//! described in `constants`.

use super::constants::*;
use anyhow::Result;
use movie_catalog_server::movie_store::{MovieStore, SqliteMovieStore};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_db() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("movies.db");

    let store = SqliteMovieStore::new(&db_path)?;

    assert_eq!(store.add_director(DIRECTOR_NOLAN_NAME)?, DIRECTOR_NOLAN_ID);
    assert_eq!(
        store.add_director(DIRECTOR_TARANTINO_NAME)?,
        DIRECTOR_TARANTINO_ID
    );
    assert_eq!(
        store.add_director(DIRECTOR_VILLENEUVE_NAME)?,
        DIRECTOR_VILLENEUVE_ID
    );

    assert_eq!(
        store.add_movie(DIRECTOR_NOLAN_ID, MOVIE_INCEPTION_NAME, MOVIE_INCEPTION_ACTOR)?,
        MOVIE_INCEPTION_ID
    );
    assert_eq!(
        store.add_movie(
            DIRECTOR_NOLAN_ID,
            MOVIE_OPPENHEIMER_NAME,
            MOVIE_OPPENHEIMER_ACTOR
        )?,
        MOVIE_OPPENHEIMER_ID
    );
    assert_eq!(
        store.add_movie(
            DIRECTOR_TARANTINO_ID,
            MOVIE_PULP_FICTION_NAME,
            MOVIE_PULP_FICTION_ACTOR
        )?,
        MOVIE_PULP_FICTION_ID
    );

    Ok((temp_dir, db_path))
}
