use crate::dto::recap::{Leaderboard, LeaderboardEntry, PersonStats};

/// Builds the three ranked boards. A board with no qualifying entries is
/// omitted rather than emitted empty.
pub fn build(stats: &[PersonStats]) -> Vec<Leaderboard> {
    let mut leaderboards = Vec::new();

    let boards: [(&str, &str, fn(&PersonStats) -> Option<(f64, String)>); 3] = [
        ("Generosity Index", "\u{1F381}", |ps| {
            if ps.movies_rated == 0 {
                return None;
            }
            let avg = ps.avg_rating_given?;
            Some((avg, format!("{avg:.1}")))
        }),
        ("Pick Success Rate", "\u{1F3AF}", |ps| {
            if ps.total_picks == 0 {
                return None;
            }
            let avg = ps.avg_rating_received?;
            (avg > 0.0).then(|| (avg, format!("{avg:.1}")))
        }),
        ("Total Picks", "\u{1F3AC}", |ps| {
            (ps.total_picks > 0).then(|| (ps.total_picks as f64, ps.total_picks.to_string()))
        }),
    ];

    for (title, icon, select) in boards {
        if let Some(board) = build_board(title, icon, stats, select) {
            leaderboards.push(board);
        }
    }

    leaderboards
}

fn build_board(
    title: &str,
    icon: &str,
    stats: &[PersonStats],
    select: fn(&PersonStats) -> Option<(f64, String)>,
) -> Option<Leaderboard> {
    let mut entries: Vec<LeaderboardEntry> = stats
        .iter()
        .filter_map(|ps| {
            let (value, label) = select(ps)?;
            Some(LeaderboardEntry {
                person: ps.person.clone(),
                value,
                label,
            })
        })
        .collect();

    if entries.is_empty() {
        return None;
    }

    entries.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then(a.person.id.cmp(&b.person.id))
    });
    let max_value = entries[0].value;

    Some(Leaderboard {
        title: title.to_string(),
        icon: icon.to_string(),
        entries,
        max_value,
    })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::super::testutil::*;
    use super::super::stats;
    use super::*;

    fn board<'a>(boards: &'a [Leaderboard], title: &str) -> Option<&'a Leaderboard> {
        boards.iter().find(|b| b.title == title)
    }

    #[test]
    fn scenario_builds_all_three_boards() {
        let boards = build(&stats::aggregate(&two_person_round()));
        assert_eq!(boards.len(), 3);

        let generosity = board(&boards, "Generosity Index").unwrap();
        assert_eq!(generosity.entries[0].person.id, Uuid::from_u128(1));
        assert_eq!(generosity.entries[0].label, "6.0");
        assert_eq!(generosity.max_value, 6.0);

        let success = board(&boards, "Pick Success Rate").unwrap();
        assert_eq!(success.entries[0].person.id, Uuid::from_u128(1));
        assert_eq!(success.max_value, 7.0);

        let picks = board(&boards, "Total Picks").unwrap();
        assert_eq!(picks.entries.len(), 2);
        assert_eq!(picks.entries[0].label, "1");
    }

    #[test]
    fn boards_without_qualifiers_are_omitted() {
        let snap = snapshot(vec![person(1)], vec![], vec![], vec![]);
        assert!(build(&stats::aggregate(&snap)).is_empty());
    }

    #[test]
    fn equal_values_rank_by_person_id() {
        let snap = snapshot(
            vec![person(2), person(1)],
            vec![movie(10, None, None)],
            vec![entry(1, 10, 1, 1, Some(1)), entry(2, 10, 1, 2, Some(2))],
            vec![],
        );
        let boards = build(&stats::aggregate(&snap));
        let picks = board(&boards, "Total Picks").unwrap();
        assert_eq!(picks.entries[0].person.id, Uuid::from_u128(1));
        assert_eq!(picks.entries[1].person.id, Uuid::from_u128(2));
    }

    #[test]
    fn rater_without_complete_entries_stays_off_generosity_board() {
        // Person 1 rated something, but nothing is fully rated.
        let snap = snapshot(
            vec![person(1), person(2)],
            vec![movie(10, None, None)],
            vec![entry(1, 10, 1, 1, Some(2))],
            vec![rating(1, 1, 6.0)],
        );
        let boards = build(&stats::aggregate(&snap));
        assert!(board(&boards, "Generosity Index").is_none());
        assert!(board(&boards, "Pick Success Rate").is_none());
    }
}
