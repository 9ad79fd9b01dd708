use crate::dto::recap::RecapReport;
use crate::error::Result;
use crate::models::FactSnapshot;

use super::{advantage, awards, divisiveness, fully_rated_ids, leaderboards, stats};

/// Recomputes the full season recap from one snapshot.
///
/// Pure and total over well-formed input; fails only when `validate`
/// rejects the snapshot. Identical snapshots produce byte-identical
/// serialized reports.
pub fn build_report(snapshot: &FactSnapshot) -> Result<RecapReport> {
    snapshot.validate()?;
    let snapshot = snapshot.normalized();

    let person_stats = stats::aggregate(&snapshot);
    let ranking = divisiveness::rank(&snapshot);
    let awards = awards::person_awards(&person_stats);
    let movie_awards = awards::movie_awards(&ranking);
    let leaderboards = leaderboards::build(&person_stats);

    // With no entries the club is still in round 1, but the summary
    // reports zero completed rounds.
    let max_round = snapshot.entries.iter().map(|e| e.group_number).max();
    let advantage = advantage::resolve(&snapshot, max_round.unwrap_or(1));

    let total_watch_time_minutes = snapshot
        .entries
        .iter()
        .filter_map(|e| snapshot.movie(e.movie_id))
        .filter_map(|m| m.runtime_minutes)
        .map(i64::from)
        .sum();
    let total_rounds = max_round.unwrap_or(0);

    Ok(RecapReport {
        advantage_holder: advantage.holder,
        advantage_round: advantage.round,
        awards,
        movie_awards,
        leaderboards,
        total_movies_watched: snapshot.entries.len() as i64,
        total_watch_time_minutes,
        total_rounds,
        fully_rated_entries: fully_rated_ids(&snapshot).len() as i64,
        person_stats,
    })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::super::testutil::*;
    use super::*;
    use crate::models::FactSnapshot;

    #[test]
    fn empty_snapshot_yields_empty_report() {
        let report = build_report(&FactSnapshot::default()).unwrap();
        assert_eq!(report.advantage_holder, None);
        assert!(report.awards.is_empty());
        assert!(report.movie_awards.is_empty());
        assert!(report.leaderboards.is_empty());
        assert!(report.person_stats.is_empty());
        assert_eq!(report.total_movies_watched, 0);
        assert_eq!(report.total_watch_time_minutes, 0);
        assert_eq!(report.total_rounds, 0);
        assert_eq!(report.fully_rated_entries, 0);
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let snap = snapshot(vec![], vec![], vec![], vec![rating(1, 1, 5.0)]);
        assert!(build_report(&snap).is_err());
    }

    #[test]
    fn identical_snapshots_serialize_identically() {
        let snap = two_person_round();

        // Same facts, shuffled collection order.
        let mut shuffled = snap.clone();
        shuffled.persons.reverse();
        shuffled.entries.reverse();
        shuffled.ratings.reverse();

        let a = serde_json::to_string(&build_report(&snap).unwrap()).unwrap();
        let b = serde_json::to_string(&build_report(&shuffled).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn scenario_report_end_to_end() {
        let report = build_report(&two_person_round()).unwrap();

        assert_eq!(report.total_movies_watched, 2);
        assert_eq!(report.total_watch_time_minutes, 210);
        assert_eq!(report.total_rounds, 1);
        assert_eq!(report.fully_rated_entries, 2);

        // One round only: no advantage yet.
        assert_eq!(report.advantage_holder, None);

        let hype = report.movie_awards.iter().find(|a| a.id == "hype_train").unwrap();
        assert_eq!(hype.entry.id, Uuid::from_u128(1));
        let unifier = report.movie_awards.iter().find(|a| a.id == "unifier").unwrap();
        assert_eq!(unifier.entry.id, Uuid::from_u128(2));

        assert_eq!(report.person_stats.len(), 2);
        assert_eq!(report.leaderboards.len(), 3);
    }

    #[test]
    fn advantage_flows_once_a_second_round_opens() {
        let mut snap = two_person_round();
        snap.movies.push(movie(12, None, None));
        snap.entries.push(entry(3, 12, 2, 1, Some(1)));

        let report = build_report(&snap).unwrap();
        assert_eq!(report.advantage_round, 1);
        assert_eq!(report.advantage_holder.unwrap().id, Uuid::from_u128(2));
        assert_eq!(report.total_rounds, 2);
    }
}
