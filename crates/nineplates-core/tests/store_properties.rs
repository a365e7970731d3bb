//! Property tests for plate store invariants.

use chrono::{Duration, NaiveDate};
use nineplates_core::{
    classify_urgency, compute_efficiency, Consequence, MemoryStore, PlateStore, UrgencyTier,
    MAX_TITLE_CHARS,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

proptest! {
    #[test]
    fn title_never_exceeds_limit(title in "\\PC{1,40}") {
        prop_assume!(!title.trim().is_empty());
        let mut store = PlateStore::open(MemoryStore::new());
        store.add_plate(&title, today(), Consequence::default()).unwrap();
        prop_assert!(store.plates()[0].title.chars().count() <= MAX_TITLE_CHARS);
    }

    #[test]
    fn smash_adds_exact_consequence(n in 1i64..=9, prior in 0usize..5) {
        let mut store = PlateStore::open(MemoryStore::new());
        for i in 0..prior {
            store.add_plate(&format!("p{i}"), today(), Consequence::new(9).unwrap()).unwrap();
            let id = store.plates()[0].id.clone();
            store.smash_plate(&id).unwrap();
        }
        let before = store.user().clone();

        let id = store
            .add_plate("target", today(), Consequence::new(n).unwrap())
            .unwrap()
            .plate_id()
            .unwrap()
            .to_string();
        store.smash_plate(&id).unwrap();

        prop_assert_eq!(store.user().consequence_tally, before.consequence_tally + n as u64);
        prop_assert_eq!(store.user().plates_smashed, before.plates_smashed + 1);
        prop_assert_eq!(store.user().plates_saved, before.plates_saved);
        prop_assert!(store.plate(&id).is_none());
    }

    #[test]
    fn plate_count_never_exceeds_capacity(attempts in 0usize..30) {
        let mut store = PlateStore::open(MemoryStore::new());
        for i in 0..attempts {
            let _ = store.add_plate(&format!("p{i}"), today(), Consequence::default()).unwrap();
            prop_assert!(store.plates().len() <= store.user().max_plates);
        }
    }

    #[test]
    fn score_stays_in_range(saved in 0u64..1000, smashed in 0u64..1000, tally in 0u64..10_000) {
        let e = compute_efficiency(saved, smashed, tally);
        prop_assert!((0.0..=100.0).contains(&e.score));
        prop_assert!(e.score >= e.level.min_score());
    }

    #[test]
    fn overdue_iff_not_positive(offset in -400i64..400) {
        let u = classify_urgency(today() + Duration::days(offset), today());
        prop_assert_eq!(u.days_remaining, offset);
        prop_assert_eq!(u.tier == UrgencyTier::Overdue, offset <= 0);
        prop_assert_eq!(u.allows_deadline_edit(), offset > 0);
    }
}
