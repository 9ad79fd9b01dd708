use crate::models::{Entry, FactSnapshot, Movie};

use super::{fully_rated_ids, mean, population_std_dev};

/// A fully-rated entry with the dispersion of its scores.
#[derive(Debug, Clone)]
pub struct EntryDispersion {
    pub entry: Entry,
    pub movie: Movie,
    pub avg_rating: f64,
    pub rating_std_dev: f64,
}

/// Orders fully-rated entries by how divided the club was on them:
/// population standard deviation descending, entry id as tiebreak.
pub fn rank(snapshot: &FactSnapshot) -> Vec<EntryDispersion> {
    let fully_rated = fully_rated_ids(snapshot);

    let mut ranked: Vec<EntryDispersion> = snapshot
        .entries
        .iter()
        .filter(|e| fully_rated.contains(&e.id))
        .filter_map(|entry| {
            let scores: Vec<f64> = snapshot
                .ratings
                .iter()
                .filter(|r| r.entry_id == entry.id)
                .map(|r| r.score)
                .collect();
            let movie = snapshot.movie(entry.movie_id)?;
            Some(EntryDispersion {
                entry: entry.clone(),
                movie: movie.clone(),
                avg_rating: mean(&scores)?,
                rating_std_dev: population_std_dev(&scores)?,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.rating_std_dev
            .total_cmp(&a.rating_std_dev)
            .then(a.entry.id.cmp(&b.entry.id))
    });
    ranked
}
