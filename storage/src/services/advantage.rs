use crate::models::{FactSnapshot, Person};

/// Who holds the multi-pick advantage going into the current round.
#[derive(Debug, Clone, PartialEq)]
pub struct Advantage {
    pub holder: Option<Person>,
    pub round: i32,
}

/// The advantage goes to whoever picked last (maximum position) in the
/// previous round. Round 1 has no holder, and a last pick without a
/// recorded picker leaves the advantage unclaimed.
pub fn resolve(snapshot: &FactSnapshot, current_round: i32) -> Advantage {
    if current_round <= 1 {
        return Advantage {
            holder: None,
            round: 0,
        };
    }

    let prev_round = current_round - 1;
    let last_pick = snapshot
        .entries
        .iter()
        .filter(|e| e.group_number == prev_round)
        .max_by_key(|e| (e.position, std::cmp::Reverse(e.id)));

    let holder = last_pick
        .and_then(|e| e.picked_by_person_id)
        .and_then(|id| snapshot.person(id))
        .cloned();

    Advantage {
        holder,
        round: prev_round,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::super::testutil::*;
    use super::*;

    #[test]
    fn round_one_has_no_holder() {
        let resolved = resolve(&two_person_round(), 1);
        assert_eq!(resolved.holder, None);
        assert_eq!(resolved.round, 0);
    }

    #[test]
    fn last_picker_of_previous_round_holds_advantage() {
        let resolved = resolve(&two_person_round(), 2);
        assert_eq!(resolved.round, 1);
        assert_eq!(resolved.holder.unwrap().id, Uuid::from_u128(2));
    }

    #[test]
    fn last_pick_without_picker_leaves_advantage_unclaimed() {
        let snap = snapshot(
            vec![person(1)],
            vec![movie(10, None, None)],
            vec![entry(1, 10, 1, 1, Some(1)), entry(2, 10, 1, 2, None)],
            vec![],
        );
        let resolved = resolve(&snap, 2);
        assert_eq!(resolved.holder, None);
        assert_eq!(resolved.round, 1);
    }

    #[test]
    fn empty_previous_round_yields_no_holder() {
        let snap = snapshot(vec![person(1)], vec![], vec![], vec![]);
        let resolved = resolve(&snap, 3);
        assert_eq!(resolved.holder, None);
        assert_eq!(resolved.round, 2);
    }
}
