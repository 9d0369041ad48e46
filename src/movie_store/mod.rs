mod models;
mod schema;
mod sqlite_movie_store;

pub use models::*;
pub use schema::MOVIE_VERSIONED_SCHEMAS;
pub use sqlite_movie_store::SqliteMovieStore;

use anyhow::Result;

/// Storage behind the HTTP handlers.
///
/// Every operation maps to a single parameterized statement against the
/// movie database; there are no transactions spanning operations.
pub trait MovieStore: Send + Sync {
    /// Names of all movies, in `movie_id` order.
    fn list_movie_names(&self) -> Result<Vec<MovieName>>;
    /// Insert a new movie and return the assigned movie id.
    ///
    /// `director_id` is not checked against the director table.
    fn add_movie(&self, director_id: i64, movie_name: &str, lead_actor: &str) -> Result<i64>;
    /// Fetch one movie by id, or `None` if no such row exists.
    fn get_movie(&self, movie_id: i64) -> Result<Option<Movie>>;
    /// Overwrite all mutable fields of a movie. Returns the number of rows
    /// affected (0 if the movie does not exist).
    fn update_movie(
        &self,
        movie_id: i64,
        director_id: i64,
        movie_name: &str,
        lead_actor: &str,
    ) -> Result<usize>;
    /// Delete a movie by id. Returns the number of rows affected; deleting
    /// an absent id is a no-op, not an error.
    fn delete_movie(&self, movie_id: i64) -> Result<usize>;
    /// All directors, in `director_id` order.
    fn list_directors(&self) -> Result<Vec<Director>>;
    /// Names of the movies attributed to one director, in `movie_id` order.
    /// Empty for directors with no movies, including unknown ids.
    fn movies_by_director(&self, director_id: i64) -> Result<Vec<MovieName>>;
}
