use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::dto::recap::PersonStats;
use crate::models::{FactSnapshot, Person};

use super::{fully_rated_ids, mean, population_std_dev};

/// Computes every per-person metric from one snapshot.
///
/// Output is ordered by person id; a person with no contributing data gets
/// zeroed counts and `None` metrics, never an error.
pub fn aggregate(snapshot: &FactSnapshot) -> Vec<PersonStats> {
    let fully_rated = fully_rated_ids(snapshot);
    let round_bounds = round_position_bounds(snapshot);
    let entry_averages = entry_rating_averages(snapshot);

    let mut persons: Vec<&Person> = snapshot.persons.iter().collect();
    persons.sort_by_key(|p| p.id);

    persons
        .into_iter()
        .map(|person| aggregate_person(person, snapshot, &fully_rated, &round_bounds, &entry_averages))
        .collect()
}

fn aggregate_person(
    person: &Person,
    snapshot: &FactSnapshot,
    fully_rated: &HashSet<Uuid>,
    round_bounds: &HashMap<i32, (i32, i32)>,
    entry_averages: &HashMap<Uuid, f64>,
) -> PersonStats {
    let picks: Vec<_> = snapshot
        .entries
        .iter()
        .filter(|e| e.picked_by_person_id == Some(person.id))
        .collect();
    let given: Vec<_> = snapshot
        .ratings
        .iter()
        .filter(|r| r.person_id == person.id)
        .collect();

    // Mean and spread of scores given, restricted to fully-rated entries.
    let complete_scores: Vec<f64> = given
        .iter()
        .filter(|r| fully_rated.contains(&r.entry_id))
        .map(|r| r.score)
        .collect();

    // Scores this person's own picks received, same restriction.
    let received_scores: Vec<f64> = snapshot
        .ratings
        .iter()
        .filter(|r| fully_rated.contains(&r.entry_id))
        .filter(|r| {
            picks
                .iter()
                .any(|e| e.id == r.entry_id)
        })
        .map(|r| r.score)
        .collect();

    // Deviation from the entry's own average runs over every rated entry,
    // not just fully-rated ones. Different completeness filter than the
    // given/received metrics above; kept that way on purpose.
    let deviations: Vec<f64> = given
        .iter()
        .filter_map(|r| entry_averages.get(&r.entry_id).map(|avg| (r.score - avg).abs()))
        .collect();

    let mut first_pick_count = 0;
    let mut last_pick_count = 0;
    for pick in &picks {
        if let Some(&(min_pos, max_pos)) = round_bounds.get(&pick.group_number) {
            if pick.position == min_pos {
                first_pick_count += 1;
            }
            if pick.position == max_pos {
                last_pick_count += 1;
            }
        }
    }

    let self_lowest_count = picks
        .iter()
        .filter(|pick| rated_own_pick_lowest(snapshot, person.id, pick.id))
        .count() as i64;

    let mut total_runtime_picked = 0i64;
    let mut release_years = Vec::new();
    for pick in &picks {
        if let Some(movie) = snapshot.movie(pick.movie_id) {
            if let Some(runtime) = movie.runtime_minutes {
                total_runtime_picked += i64::from(runtime);
            }
            if let Some(year) = movie.release_year {
                release_years.push(f64::from(year));
            }
        }
    }

    PersonStats {
        person: person.clone(),
        total_picks: picks.len() as i64,
        movies_rated: given.len() as i64,
        avg_rating_given: mean(&complete_scores),
        avg_rating_received: mean(&received_scores),
        first_pick_count,
        last_pick_count,
        rating_std_dev: population_std_dev(&complete_scores),
        avg_deviation_from_group: mean(&deviations),
        self_lowest_count,
        total_runtime_picked,
        avg_release_year: mean(&release_years),
    }
}

/// (min position, max position) per round.
fn round_position_bounds(snapshot: &FactSnapshot) -> HashMap<i32, (i32, i32)> {
    let mut bounds: HashMap<i32, (i32, i32)> = HashMap::new();
    for entry in &snapshot.entries {
        bounds
            .entry(entry.group_number)
            .and_modify(|(min, max)| {
                *min = (*min).min(entry.position);
                *max = (*max).max(entry.position);
            })
            .or_insert((entry.position, entry.position));
    }
    bounds
}

/// Average score per entry, over whatever ratings it has.
fn entry_rating_averages(snapshot: &FactSnapshot) -> HashMap<Uuid, f64> {
    let mut sums: HashMap<Uuid, (f64, usize)> = HashMap::new();
    for rating in &snapshot.ratings {
        let slot = sums.entry(rating.entry_id).or_insert((0.0, 0));
        slot.0 += rating.score;
        slot.1 += 1;
    }
    sums.into_iter()
        .map(|(entry_id, (sum, count))| (entry_id, sum / count as f64))
        .collect()
}

/// True when the person rated their own pick and nobody scored it lower.
/// Ties for the minimum all count.
fn rated_own_pick_lowest(snapshot: &FactSnapshot, person_id: Uuid, entry_id: Uuid) -> bool {
    let scores: Vec<f64> = snapshot
        .ratings
        .iter()
        .filter(|r| r.entry_id == entry_id)
        .map(|r| r.score)
        .collect();
    if scores.is_empty() {
        return false;
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);

    snapshot
        .ratings
        .iter()
        .any(|r| r.entry_id == entry_id && r.person_id == person_id && r.score == min)
}
