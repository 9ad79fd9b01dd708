use std::collections::HashSet;

use uuid::Uuid;

use crate::error::{Result, StorageError};

use super::{Entry, Movie, Person, Rating};

/// All club facts as of one point in time.
///
/// The recap engine consumes exactly one snapshot per invocation and performs
/// no I/O of its own. Collection order carries no meaning; the engine
/// normalizes before computing so that identical snapshots always produce
/// identical reports.
#[derive(Debug, Clone, Default)]
pub struct FactSnapshot {
    pub persons: Vec<Person>,
    pub movies: Vec<Movie>,
    pub entries: Vec<Entry>,
    pub ratings: Vec<Rating>,
}

impl FactSnapshot {
    /// Checks the invariants the engine is not responsible for repairing.
    ///
    /// Absence of data is never an error; only broken references, duplicate
    /// ratings, and non-positive round or position values are rejected.
    pub fn validate(&self) -> Result<()> {
        let person_ids: HashSet<Uuid> = self.persons.iter().map(|p| p.id).collect();
        let entry_ids: HashSet<Uuid> = self.entries.iter().map(|e| e.id).collect();

        for entry in &self.entries {
            if entry.group_number < 1 {
                return Err(StorageError::InvalidSnapshot(format!(
                    "entry {} has non-positive group number {}",
                    entry.id, entry.group_number
                )));
            }
            if entry.position < 1 {
                return Err(StorageError::InvalidSnapshot(format!(
                    "entry {} has non-positive position {}",
                    entry.id, entry.position
                )));
            }
        }

        let mut seen_pairs = HashSet::new();
        for rating in &self.ratings {
            if !person_ids.contains(&rating.person_id) {
                return Err(StorageError::InvalidSnapshot(format!(
                    "rating references unknown person {}",
                    rating.person_id
                )));
            }
            if !entry_ids.contains(&rating.entry_id) {
                return Err(StorageError::InvalidSnapshot(format!(
                    "rating references unknown entry {}",
                    rating.entry_id
                )));
            }
            if !seen_pairs.insert((rating.person_id, rating.entry_id)) {
                return Err(StorageError::InvalidSnapshot(format!(
                    "duplicate rating for person {} on entry {}",
                    rating.person_id, rating.entry_id
                )));
            }
        }

        Ok(())
    }

    /// Returns a copy with every collection sorted by identifier, giving all
    /// downstream extremum scans a stable iteration order.
    pub fn normalized(&self) -> Self {
        let mut snapshot = self.clone();
        snapshot.persons.sort_by_key(|p| p.id);
        snapshot.movies.sort_by_key(|m| m.id);
        snapshot.entries.sort_by_key(|e| e.id);
        snapshot
            .ratings
            .sort_by_key(|r| (r.entry_id, r.person_id));
        snapshot
    }

    pub fn movie(&self, id: Uuid) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use crate::services::testutil::{entry, person, rating, snapshot};

    #[test]
    fn empty_snapshot_is_valid() {
        assert!(snapshot(vec![], vec![], vec![], vec![]).validate().is_ok());
    }

    #[test]
    fn rejects_rating_for_unknown_person() {
        let snap = snapshot(
            vec![person(1)],
            vec![],
            vec![entry(1, 10, 1, 1, Some(1))],
            vec![rating(2, 1, 5.0)],
        );
        let err = snap.validate().unwrap_err();
        assert!(err.to_string().contains("unknown person"));
    }

    #[test]
    fn rejects_rating_for_unknown_entry() {
        let snap = snapshot(
            vec![person(1)],
            vec![],
            vec![],
            vec![rating(1, 9, 5.0)],
        );
        let err = snap.validate().unwrap_err();
        assert!(err.to_string().contains("unknown entry"));
    }

    #[test]
    fn rejects_duplicate_rating_pair() {
        let snap = snapshot(
            vec![person(1)],
            vec![],
            vec![entry(1, 10, 1, 1, Some(1))],
            vec![rating(1, 1, 5.0), rating(1, 1, 7.0)],
        );
        let err = snap.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate rating"));
    }

    #[test]
    fn rejects_non_positive_round_and_position() {
        let snap = snapshot(vec![], vec![], vec![entry(1, 10, 0, 1, None)], vec![]);
        assert!(snap.validate().is_err());

        let snap = snapshot(vec![], vec![], vec![entry(1, 10, 1, 0, None)], vec![]);
        assert!(snap.validate().is_err());
    }

    #[test]
    fn normalized_orders_by_id() {
        let snap = snapshot(
            vec![person(2), person(1)],
            vec![],
            vec![entry(2, 10, 1, 2, None), entry(1, 11, 1, 1, None)],
            vec![],
        );
        let normalized = snap.normalized();
        assert!(normalized.persons[0].id < normalized.persons[1].id);
        assert!(normalized.entries[0].id < normalized.entries[1].id);
    }
}
