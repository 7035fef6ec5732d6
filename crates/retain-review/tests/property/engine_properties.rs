use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use retain_core::item::ReviewItem;
use retain_core::rating::Rating;
use retain_review::scoring::weight;
use retain_review::{familiarity, ReviewEngine};

fn arb_rating() -> impl Strategy<Value = Rating> {
    prop_oneof![
        Just(Rating::Unknown),
        Just(Rating::Recognized),
        Just(Rating::Familiar),
        Just(Rating::Confident),
        Just(Rating::Mastered),
    ]
}

fn make_item(id: u64, familiarity: f64, times: u32, hours_ago: Option<i64>, now: DateTime<Utc>) -> ReviewItem {
    let recent_reviews = match hours_ago {
        Some(hours) => vec![(now - Duration::hours(hours)).to_rfc3339()],
        None => Vec::new(),
    };
    ReviewItem {
        id,
        familiarity_score: familiarity,
        times_reviewed: times,
        recent_reviews,
    }
}

// ── Weight monotone in familiarity ───────────────────────────────────────

proptest! {
    #[test]
    fn weight_non_increasing_in_familiarity(
        familiarity in 0.0f64..=99.0,
        times in 0u32..1000,
    ) {
        let lower = weight::calculate(familiarity, times).unwrap();
        let higher = weight::calculate(familiarity + 1.0, times).unwrap();
        prop_assert!(
            lower >= higher - f64::EPSILON,
            "weight rose with familiarity: {} < {}",
            lower,
            higher
        );
    }
}

// ── Weight monotone in review count ──────────────────────────────────────

proptest! {
    #[test]
    fn weight_non_increasing_in_review_count(
        familiarity in 0.0f64..=100.0,
        times in 0u32..500,
        offset in 1u32..500,
    ) {
        let fewer = weight::calculate(familiarity, times).unwrap();
        let more = weight::calculate(familiarity, times + offset).unwrap();
        prop_assert!(fewer >= more - f64::EPSILON);
    }
}

// ── Familiarity dominance at a 20-point gap ──────────────────────────────

proptest! {
    #[test]
    fn familiarity_gap_of_twenty_dominates(
        familiarity in 0.0f64..=80.0,
        times_low in 0u32..1000,
        times_high in 0u32..1000,
    ) {
        let low = weight::calculate(familiarity, times_low).unwrap();
        let high = weight::calculate(familiarity + 20.0, times_high).unwrap();
        prop_assert!(
            low > high,
            "gap of 20 should dominate: weight({}, {}) = {} vs weight({}, {}) = {}",
            familiarity, times_low, low,
            familiarity + 20.0, times_high, high
        );
    }
}

// ── Updated score bounded to [0, 100] ────────────────────────────────────

proptest! {
    #[test]
    fn updated_score_stays_in_bounds(
        score in 0.0f64..=100.0,
        rating in arb_rating(),
        times in 0u32..1000,
    ) {
        let updated = familiarity::next_score(score, rating, times).unwrap();
        prop_assert!(
            (0.0..=100.0).contains(&updated),
            "score out of bounds: {}",
            updated
        );
    }
}

// ── Updated score monotone in rating ─────────────────────────────────────

proptest! {
    #[test]
    fn higher_rating_never_lowers_the_score(
        score in 0.0f64..=100.0,
        raw_rating in 1u8..=4,
        times in 0u32..1000,
    ) {
        let lower = familiarity::next_score(
            score,
            Rating::try_from(raw_rating).unwrap(),
            times,
        ).unwrap();
        let higher = familiarity::next_score(
            score,
            Rating::try_from(raw_rating + 1).unwrap(),
            times,
        ).unwrap();
        prop_assert!(lower <= higher + f64::EPSILON);
    }
}

// ── Diminishing returns for reinforcement ────────────────────────────────

proptest! {
    #[test]
    fn gains_do_not_grow_with_the_score(
        low in 0.0f64..=50.0,
        offset in 0.0f64..=50.0,
        raw_rating in 4u8..=5,
        times in 0u32..100,
    ) {
        let rating = Rating::try_from(raw_rating).unwrap();
        let high = low + offset;
        let gain_low = familiarity::next_score(low, rating, times).unwrap() - low;
        let gain_high = familiarity::next_score(high, rating, times).unwrap() - high;
        prop_assert!(
            gain_low >= gain_high - 1e-9,
            "gain should not grow: {} at {} vs {} at {}",
            gain_low, low, gain_high, high
        );
    }
}

// ── Growing forgetting penalty ───────────────────────────────────────────

proptest! {
    #[test]
    fn drops_do_not_shrink_with_the_score(
        low in 0.0f64..=50.0,
        offset in 0.0f64..=50.0,
        raw_rating in 1u8..=2,
        times in 0u32..100,
    ) {
        let rating = Rating::try_from(raw_rating).unwrap();
        let high = low + offset;
        let drop_low = low - familiarity::next_score(low, rating, times).unwrap();
        let drop_high = high - familiarity::next_score(high, rating, times).unwrap();
        prop_assert!(
            drop_high >= drop_low - 1e-9,
            "drop should not shrink: {} at {} vs {} at {}",
            drop_low, low, drop_high, high
        );
    }
}

// ── Queue size and uniqueness ────────────────────────────────────────────

proptest! {
    #[test]
    fn queue_has_min_count_items_and_no_duplicates(
        entries in prop::collection::vec(
            (0.0f64..=100.0, 0u32..200, prop::option::of(0i64..400)),
            0..30,
        ),
        count in 0usize..40,
        seed in any::<u64>(),
    ) {
        let now = Utc::now();
        let pool: Vec<ReviewItem> = entries
            .iter()
            .enumerate()
            .map(|(i, (familiarity, times, hours_ago))| {
                make_item(i as u64, *familiarity, *times, *hours_ago, now)
            })
            .collect();

        let engine = ReviewEngine::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let queue = engine.select_at(&pool, count, now, &mut rng).unwrap();

        prop_assert_eq!(queue.len(), count.min(pool.len()));

        let mut ids: Vec<u64> = queue.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), queue.len(), "duplicate ids in queue");
    }
}
