use serde::{Deserialize, Serialize};

/// A full movie record.
///
/// Serializes with camelCase keys, matching the public JSON surface
/// (`movie_id` column -> `movieId` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub director_id: i64,
    pub movie_name: String,
    pub lead_actor: String,
}

/// Listing entry carrying only a movie's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieName {
    pub movie_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub director_id: i64,
    pub director_name: String,
}
