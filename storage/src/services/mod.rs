pub mod advantage;
pub mod awards;
pub mod divisiveness;
pub mod leaderboards;
pub mod recap;
pub mod stats;

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::FactSnapshot;

/// Entries rated by every currently known person.
///
/// The threshold tracks the live participant count; a snapshot without
/// persons has no fully-rated entries (the predicate would otherwise hold
/// vacuously for unrated entries).
pub(crate) fn fully_rated_ids(snapshot: &FactSnapshot) -> HashSet<Uuid> {
    if snapshot.persons.is_empty() {
        return HashSet::new();
    }

    let mut raters: HashMap<Uuid, usize> = HashMap::new();
    for rating in &snapshot.ratings {
        *raters.entry(rating.entry_id).or_default() += 1;
    }

    raters
        .into_iter()
        .filter(|(_, count)| *count == snapshot.persons.len())
        .map(|(entry_id, _)| entry_id)
        .collect()
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor N, not N-1), matching Postgres
/// STDDEV_POP. `None` on an empty slice.
pub(crate) fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
pub(crate) mod testutil {
    use uuid::Uuid;

    use crate::models::{Entry, FactSnapshot, Movie, Person, Rating};

    fn timestamp() -> chrono::NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    pub fn person(n: u128) -> Person {
        Person {
            id: Uuid::from_u128(n),
            initial: format!("P{n}"),
            name: format!("Person {n}"),
        }
    }

    pub fn movie(n: u128, release_year: Option<i32>, runtime_minutes: Option<i32>) -> Movie {
        Movie {
            id: Uuid::from_u128(n),
            title: format!("Movie {n}"),
            release_year,
            runtime_minutes,
            poster_url: None,
        }
    }

    pub fn entry(n: u128, movie: u128, group: i32, position: i32, picker: Option<u128>) -> Entry {
        Entry {
            id: Uuid::from_u128(n),
            movie_id: Uuid::from_u128(movie),
            group_number: group,
            position,
            picked_by_person_id: picker.map(Uuid::from_u128),
            watched_at: None,
            added_at: timestamp(),
        }
    }

    pub fn rating(person: u128, entry: u128, score: f64) -> Rating {
        Rating {
            person_id: Uuid::from_u128(person),
            entry_id: Uuid::from_u128(entry),
            score,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn snapshot(
        persons: Vec<Person>,
        movies: Vec<Movie>,
        entries: Vec<Entry>,
        ratings: Vec<Rating>,
    ) -> FactSnapshot {
        FactSnapshot {
            persons,
            movies,
            entries,
            ratings,
        }
    }

    /// The worked two-person scenario: round 1, entry 1 picked by person 1
    /// (rated 8 and 6), entry 2 picked by person 2 (rated 4 and 4).
    pub fn two_person_round() -> FactSnapshot {
        snapshot(
            vec![person(1), person(2)],
            vec![movie(10, Some(1994), Some(120)), movie(11, Some(2020), Some(90))],
            vec![entry(1, 10, 1, 1, Some(1)), entry(2, 11, 1, 2, Some(2))],
            vec![
                rating(1, 1, 8.0),
                rating(2, 1, 6.0),
                rating(1, 2, 4.0),
                rating(2, 2, 4.0),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::*;

    #[test]
    fn fully_rated_tracks_live_person_count() {
        let mut snap = two_person_round();
        assert_eq!(fully_rated_ids(&snap).len(), 2);

        // A third participant joins; nothing is fully rated anymore.
        snap.persons.push(person(3));
        assert!(fully_rated_ids(&snap).is_empty());
    }

    #[test]
    fn no_persons_means_nothing_fully_rated() {
        let snap = snapshot(vec![], vec![], vec![entry(1, 10, 1, 1, None)], vec![]);
        assert!(fully_rated_ids(&snap).is_empty());
    }

    #[test]
    fn population_std_dev_uses_divisor_n() {
        assert_eq!(population_std_dev(&[8.0, 4.0]), Some(2.0));
        assert_eq!(population_std_dev(&[5.0]), Some(0.0));
        assert_eq!(population_std_dev(&[]), None);
    }
}
