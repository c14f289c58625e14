//! "Size Özel Öneriler": heuristic ranking of other events.

use eventticket_wire::Event;

pub const DEFAULT_LIMIT: usize = 6;

/// Bonus for sharing the requested category
const CATEGORY_BONUS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub event: Event,
    pub score: i64,
}

/// Rank `events` for display next to `current_event_id`.
///
/// Events are pre-sorted by remaining tickets (desc) then price (asc); that
/// position seeds the score, boosts are added, and the final order is a
/// stable sort by descending score.
pub fn rank(
    events: Vec<Event>,
    current_event_id: Option<i64>,
    category: Option<&str>,
    limit: usize,
) -> Vec<Recommendation> {
    let mut events: Vec<Event> = events
        .into_iter()
        .filter(|e| Some(e.id) != current_event_id)
        .collect();

    events.sort_by(|a, b| {
        b.remaining_tickets
            .cmp(&a.remaining_tickets)
            .then_with(|| a.price.total_cmp(&b.price))
    });

    let mut ranked: Vec<Recommendation> = events
        .into_iter()
        .enumerate()
        .map(|(index, event)| Recommendation {
            score: score(&event, index, category),
            event,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Score of an event at `index` in the pre-sorted list
pub fn score(event: &Event, index: usize, category: Option<&str>) -> i64 {
    let mut score = 100.0 - index as f64;
    score += (event.remaining_tickets as f64 / 10.0).min(20.0);
    score += (50.0 - event.price / 10.0).max(0.0);
    if let Some(wanted) = category.filter(|c| !c.is_empty()) {
        if event.category_slug() == Some(wanted) {
            score += CATEGORY_BONUS;
        }
    }
    // Halves round up, including for negative scores
    (score + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventticket_wire::Category;

    fn event(id: i64, remaining: i64, price: f64, slug: &str) -> Event {
        Event {
            id,
            title: format!("E{}", id),
            slug: String::new(),
            description: String::new(),
            image: None,
            date: "2024-09-01".into(),
            time: "20:00:00".into(),
            location: String::new(),
            category: Some(Category {
                id: 1,
                name: slug.to_string(),
                slug: slug.to_string(),
                description: String::new(),
            }),
            price,
            available_tickets: 100,
            remaining_tickets: remaining,
            is_active: true,
        }
    }

    #[test]
    fn test_score_formula() {
        // 100 - 0 + min(250/10, 20) + max(0, 50 - 150/10) = 155
        assert_eq!(score(&event(1, 250, 150.0, "tiyatro"), 0, None), 155);
        // expensive event gets no price boost; 100 - 2 + 0.5 + 0 = 98.5 rounds to 99
        assert_eq!(score(&event(2, 5, 900.0, "tiyatro"), 2, None), 99);
        // category match adds 30
        assert_eq!(
            score(&event(1, 250, 150.0, "konser"), 0, Some("konser")),
            185
        );
    }

    #[test]
    fn test_cheaper_ranks_higher_on_equal_remaining() {
        let ranked = rank(
            vec![event(1, 50, 400.0, "a"), event(2, 50, 100.0, "a")],
            None,
            None,
            DEFAULT_LIMIT,
        );
        assert_eq!(ranked[0].event.id, 2);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_category_match_scores_strictly_higher() {
        let a = event(1, 80, 200.0, "konser");
        let b = event(2, 80, 200.0, "spor");
        let ranked = rank(vec![b, a], None, Some("konser"), DEFAULT_LIMIT);
        assert_eq!(ranked[0].event.id, 1);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_current_event_excluded_and_limited() {
        let events: Vec<Event> = (1..=10).map(|i| event(i, 100 - i, 100.0, "a")).collect();
        let ranked = rank(events, Some(3), None, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|r| r.event.id != 3));
        // scores are non-increasing
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_presorted_order() {
        // identical events: stable sort keeps pre-sort order, index decides score
        let ranked = rank(
            vec![event(1, 10, 100.0, "a"), event(2, 10, 100.0, "a")],
            None,
            None,
            DEFAULT_LIMIT,
        );
        assert_eq!(ranked[0].event.id, 1);
        assert_eq!(ranked[0].score, ranked[1].score + 1);
    }
}
