use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Entry, Movie, Person};

/// Per-person metrics derived from one snapshot.
///
/// Metrics without qualifying data are `None`, never a sentinel number.
/// `avg_rating_given`, `rating_std_dev` and `avg_rating_received` only count
/// ratings on fully-rated entries; `avg_deviation_from_group` and
/// `self_lowest_count` run over every rated entry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonStats {
    pub person: Person,
    pub total_picks: i64,
    pub movies_rated: i64,
    pub avg_rating_given: Option<f64>,
    pub avg_rating_received: Option<f64>,
    pub first_pick_count: i64,
    pub last_pick_count: i64,
    pub rating_std_dev: Option<f64>,
    pub avg_deviation_from_group: Option<f64>,
    pub self_lowest_count: i64,
    pub total_runtime_picked: i64,
    pub avg_release_year: Option<f64>,
}

/// A single-winner superlative over one person metric.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub winner: Person,
    pub formatted_value: String,
}

/// A superlative won by a movie rather than a person.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieAward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub movie: Movie,
    pub entry: Entry,
    pub formatted_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub person: Person,
    pub value: f64,
    pub label: String,
}

/// A ranked, display-ready list of persons by one metric.
/// `max_value` lets the presentation layer size proportional bars.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Leaderboard {
    pub title: String,
    pub icon: String,
    pub entries: Vec<LeaderboardEntry>,
    pub max_value: f64,
}

/// The full season recap, recomputed from scratch on every request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecapReport {
    pub advantage_holder: Option<Person>,
    pub advantage_round: i32,
    pub awards: Vec<Award>,
    pub movie_awards: Vec<MovieAward>,
    pub leaderboards: Vec<Leaderboard>,
    pub person_stats: Vec<PersonStats>,
    pub total_movies_watched: i64,
    pub total_watch_time_minutes: i64,
    pub total_rounds: i32,
    pub fully_rated_entries: i64,
}
