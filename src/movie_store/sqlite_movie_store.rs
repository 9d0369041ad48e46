use super::models::{Director, Movie, MovieName};
use super::schema::MOVIE_VERSIONED_SCHEMAS;
use super::MovieStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Debug)]
pub struct SqliteMovieStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMovieStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open movie database at {:?}", path))?;
        Self::with_connection(conn)
    }

    /// Wrap an already-open connection.
    ///
    /// A fresh database (`PRAGMA user_version` 0) gets the latest schema.
    /// Anything else must carry a known version and match its schema
    /// structurally, and is migrated forward if it is behind.
    pub fn with_connection(mut conn: Connection) -> Result<Self> {
        let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if raw_version == 0 {
            info!("Creating new movie database schema");
            MOVIE_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        } else {
            let db_version = raw_version - BASE_DB_VERSION as i64;
            let schema = MOVIE_VERSIONED_SCHEMAS
                .iter()
                .find(|schema| schema.version as i64 == db_version)
                .with_context(|| format!("Unknown movie database version {}", db_version))?;
            schema.validate(&conn).with_context(|| {
                format!(
                    "Movie database schema validation failed for version {}",
                    db_version
                )
            })?;

            let latest_version = MOVIE_VERSIONED_SCHEMAS.last().unwrap().version;
            if (db_version as usize) < latest_version {
                info!(
                    "Migrating movie database from version {} to {}",
                    db_version, latest_version
                );
                Self::migrate(&mut conn, db_version as usize)?;
            }
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn migrate(conn: &mut Connection, from_version: usize) -> Result<()> {
        let tx = conn.transaction()?;
        let mut version = from_version;
        for schema in MOVIE_VERSIONED_SCHEMAS
            .iter()
            .filter(|schema| schema.version > from_version)
        {
            if let Some(migration) = schema.migration {
                migration(&tx).with_context(|| {
                    format!("Failed to migrate movie database to version {}", schema.version)
                })?;
            }
            version = schema.version;
        }
        tx.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + version),
            [],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Insert a director row and return the assigned id.
    ///
    /// Directors are read-only over HTTP; this exists to pre-populate the
    /// table (imports, test fixtures).
    pub fn add_director(&self, director_name: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO director (director_name) VALUES (?1)",
            params![director_name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn row_to_movie(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        Ok(Movie {
            movie_id: row.get("movie_id")?,
            director_id: row.get("director_id")?,
            movie_name: row.get("movie_name")?,
            lead_actor: row.get("lead_actor")?,
        })
    }
}

impl MovieStore for SqliteMovieStore {
    fn list_movie_names(&self) -> Result<Vec<MovieName>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT movie_name FROM movie ORDER BY movie_id")?;
        let movies = stmt
            .query_map([], |row| {
                Ok(MovieName {
                    movie_name: row.get("movie_name")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(movies)
    }

    fn add_movie(&self, director_id: i64, movie_name: &str, lead_actor: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO movie (director_id, movie_name, lead_actor) VALUES (?1, ?2, ?3)",
            params![director_id, movie_name, lead_actor],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn get_movie(&self, movie_id: i64) -> Result<Option<Movie>> {
        let conn = self.conn.lock().unwrap();
        let movie = conn
            .query_row(
                "SELECT movie_id, director_id, movie_name, lead_actor
                 FROM movie WHERE movie_id = ?1",
                params![movie_id],
                Self::row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }

    fn update_movie(
        &self,
        movie_id: i64,
        director_id: i64,
        movie_name: &str,
        lead_actor: &str,
    ) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(
            "UPDATE movie SET director_id = ?1, movie_name = ?2, lead_actor = ?3
             WHERE movie_id = ?4",
            params![director_id, movie_name, lead_actor, movie_id],
        )?;
        Ok(affected)
    }

    fn delete_movie(&self, movie_id: i64) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute("DELETE FROM movie WHERE movie_id = ?1", params![movie_id])?;
        Ok(affected)
    }

    fn list_directors(&self) -> Result<Vec<Director>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT director_id, director_name FROM director ORDER BY director_id")?;
        let directors = stmt
            .query_map([], |row| {
                Ok(Director {
                    director_id: row.get("director_id")?,
                    director_name: row.get("director_name")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(directors)
    }

    fn movies_by_director(&self, director_id: i64) -> Result<Vec<MovieName>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT movie_name FROM movie WHERE director_id = ?1 ORDER BY movie_id",
        )?;
        let movies = stmt
            .query_map(params![director_id], |row| {
                Ok(MovieName {
                    movie_name: row.get("movie_name")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(movies)
    }
}
