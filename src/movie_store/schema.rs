//! SQLite schema definitions for the movie database.

use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

/// Movie table. `director_id` carries no foreign key: a movie may reference
/// a director row that does not exist.
const MOVIE_TABLE_V1: Table = Table {
    name: "movie",
    columns: &[
        Column {
            name: "movie_id",
            sql_type: &SqlType::Integer,
            is_primary_key: true,
            non_null: false,
        },
        Column {
            name: "director_id",
            sql_type: &SqlType::Integer,
            is_primary_key: false,
            non_null: true,
        },
        Column {
            name: "movie_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: true,
        },
        Column {
            name: "lead_actor",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: true,
        },
    ],
    indices: &[("idx_movie_director_id", "director_id")],
};

/// Director table. Read-only over HTTP; rows are pre-populated.
const DIRECTOR_TABLE_V1: Table = Table {
    name: "director",
    columns: &[
        Column {
            name: "director_id",
            sql_type: &SqlType::Integer,
            is_primary_key: true,
            non_null: false,
        },
        Column {
            name: "director_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: true,
        },
    ],
    indices: &[],
};

pub const MOVIE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[MOVIE_TABLE_V1, DIRECTOR_TABLE_V1],
    migration: None,
}];
