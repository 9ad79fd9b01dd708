use crate::dto::recap::{Award, MovieAward, PersonStats};

use super::divisiveness::EntryDispersion;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Max,
    Min,
}

/// One superlative category: which metric, which direction, and how the
/// winning value reads. A metric returning `None` means the person does not
/// qualify; the category is dropped entirely when nobody does.
struct Category {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    direction: Direction,
    metric: fn(&PersonStats) -> Option<f64>,
    format: fn(f64) -> String,
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "headliner",
            title: "The Headliner",
            description: "Always opening night material",
            icon: "\u{1F451}",
            direction: Direction::Max,
            metric: |ps| positive(ps.first_pick_count as f64),
            format: |v| format!("{} first picks", v as i64),
        },
        Category {
            id: "biggest_loser",
            title: "The Biggest Loser",
            description: "The comeback kid (3 entries next time!)",
            icon: "\u{1F3B0}",
            direction: Direction::Max,
            metric: |ps| positive(ps.last_pick_count as f64),
            format: |v| format!("{} last picks", v as i64),
        },
        Category {
            id: "corporate_darling",
            title: "Corporate Darling",
            description: "The family always approves",
            icon: "\u{1F4BC}",
            direction: Direction::Max,
            metric: |ps| {
                if ps.total_picks == 0 {
                    return None;
                }
                ps.avg_rating_received.and_then(positive)
            },
            format: |v| format!("{v:.1} avg on picks"),
        },
        Category {
            id: "harsh_critic",
            title: "The Harsh Critic",
            description: "Tough crowd, party of one",
            icon: "\u{1F9D0}",
            direction: Direction::Min,
            metric: |ps| ps.avg_rating_given,
            format: |v| format!("{v:.1} avg given"),
        },
        Category {
            id: "easy_pleaser",
            title: "The Easy Pleaser",
            description: "Everything's a 10 with popcorn",
            icon: "\u{1F60A}",
            direction: Direction::Max,
            metric: |ps| ps.avg_rating_given.and_then(positive),
            format: |v| format!("{v:.1} avg given"),
        },
        Category {
            id: "critical_outlier",
            title: "The Critical Outlier",
            description: "Marching to their own projector",
            icon: "\u{1F3AD}",
            direction: Direction::Max,
            metric: |ps| ps.avg_deviation_from_group.and_then(positive),
            format: |v| format!("{v:.1} points different on average"),
        },
        Category {
            id: "movie_masochist",
            title: "The Movie Masochist",
            description: "Picks 'em, then roasts 'em",
            icon: "\u{1F605}",
            direction: Direction::Max,
            metric: |ps| positive(ps.self_lowest_count as f64),
            format: |v| format!("{} times", v as i64),
        },
        Category {
            id: "steady_hand",
            title: "The Steady Hand",
            description: "You always know what you're getting",
            icon: "\u{1F4CF}",
            direction: Direction::Min,
            metric: |ps| ps.rating_std_dev,
            format: |v| format!("{v:.1} rating spread"),
        },
        Category {
            id: "wildcard",
            title: "The Wildcard",
            description: "10 or 2, no in-between",
            icon: "\u{1F3B2}",
            direction: Direction::Max,
            metric: |ps| ps.rating_std_dev.and_then(positive),
            format: |v| format!("{v:.1} rating spread"),
        },
        Category {
            id: "throwback_royalty",
            title: "Throwback Royalty",
            description: "They don't make 'em like they used to",
            icon: "\u{1F4FC}",
            direction: Direction::Min,
            metric: |ps| ps.avg_release_year,
            format: |v| format!("avg year: {v:.0}"),
        },
        Category {
            id: "fresh_picker",
            title: "The Fresh Picker",
            description: "First in line at the multiplex",
            icon: "\u{1F37F}",
            direction: Direction::Max,
            metric: |ps| ps.avg_release_year.and_then(positive),
            format: |v| format!("avg year: {v:.0}"),
        },
        Category {
            id: "marathon_runner",
            title: "The Marathon Runner",
            description: "Bladder of steel",
            icon: "\u{23F1}\u{FE0F}",
            direction: Direction::Max,
            metric: |ps| positive(ps.total_runtime_picked as f64),
            format: |v| {
                let minutes = v as i64;
                format!("{}h {}m total", minutes / 60, minutes % 60)
            },
        },
    ]
}

/// Picks one winner per category. `stats` is ordered by person id and the
/// champion is only replaced on a strictly better value, so ties always
/// resolve to the lowest qualifying id.
pub fn person_awards(stats: &[PersonStats]) -> Vec<Award> {
    let mut awards = Vec::new();

    for category in categories() {
        let mut best: Option<(f64, &PersonStats)> = None;
        for ps in stats {
            let Some(value) = (category.metric)(ps) else {
                continue;
            };
            let beats = match best {
                None => true,
                Some((champion, _)) => match category.direction {
                    Direction::Max => value > champion,
                    Direction::Min => value < champion,
                },
            };
            if beats {
                best = Some((value, ps));
            }
        }

        if let Some((value, winner)) = best {
            awards.push(Award {
                id: category.id.to_string(),
                title: category.title.to_string(),
                description: category.description.to_string(),
                icon: category.icon.to_string(),
                winner: winner.person.clone(),
                formatted_value: (category.format)(value),
            });
        }
    }

    awards
}

/// The two movie superlatives over the divisiveness ranking.
///
/// Hype Train needs actual disagreement (stddev > 0); the Unifier needs a
/// second fully-rated entry, so the two never land on the same one.
pub fn movie_awards(ranking: &[EntryDispersion]) -> Vec<MovieAward> {
    let mut awards = Vec::new();

    if let Some(hype_train) = ranking.first()
        && hype_train.rating_std_dev > 0.0
    {
        awards.push(MovieAward {
            id: "hype_train".to_string(),
            title: "The Hype Train".to_string(),
            description: "Love it or hate it".to_string(),
            icon: "\u{1F682}".to_string(),
            movie: hype_train.movie.clone(),
            entry: hype_train.entry.clone(),
            formatted_value: format!("Rating spread: {:.1}", hype_train.rating_std_dev),
        });
    }

    if ranking.len() > 1
        && let Some(unifier) = ranking.last()
    {
        awards.push(MovieAward {
            id: "unifier".to_string(),
            title: "The Unifier".to_string(),
            description: "Rare family consensus".to_string(),
            icon: "\u{1F91D}".to_string(),
            movie: unifier.movie.clone(),
            entry: unifier.entry.clone(),
            formatted_value: format!("Rating spread: {:.1}", unifier.rating_std_dev),
        });
    }

    awards
}
