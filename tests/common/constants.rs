//! Shared constants for end-to-end tests

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

// Seeded directors (ids follow insertion order in the fixture)
pub const DIRECTOR_NOLAN_ID: i64 = 1;
pub const DIRECTOR_NOLAN_NAME: &str = "Nolan";
pub const DIRECTOR_TARANTINO_ID: i64 = 2;
pub const DIRECTOR_TARANTINO_NAME: &str = "Tarantino";
/// A director with no movies.
pub const DIRECTOR_VILLENEUVE_ID: i64 = 3;
pub const DIRECTOR_VILLENEUVE_NAME: &str = "Villeneuve";

// Seeded movies
pub const MOVIE_INCEPTION_ID: i64 = 1;
pub const MOVIE_INCEPTION_NAME: &str = "Inception";
pub const MOVIE_INCEPTION_ACTOR: &str = "DiCaprio";
pub const MOVIE_OPPENHEIMER_ID: i64 = 2;
pub const MOVIE_OPPENHEIMER_NAME: &str = "Oppenheimer";
pub const MOVIE_OPPENHEIMER_ACTOR: &str = "Murphy";
pub const MOVIE_PULP_FICTION_ID: i64 = 3;
pub const MOVIE_PULP_FICTION_NAME: &str = "Pulp Fiction";
pub const MOVIE_PULP_FICTION_ACTOR: &str = "Travolta";

/// Number of movies seeded by the fixture; the next insert gets id
/// `SEEDED_MOVIE_COUNT + 1`.
pub const SEEDED_MOVIE_COUNT: i64 = 3;
