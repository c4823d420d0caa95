use estatus_core::models::{Event, Severity};
use estatus_rollup::{entities_from_events, rollup, rollup_chunked};
use proptest::prelude::*;

fn event() -> impl Strategy<Value = Event> {
    (
        prop_oneof![Just("a"), Just("b"), Just("c"), Just("d")],
        -1i64..5,
        any::<bool>(),
    )
        .prop_map(|(entity, status, silenced)| Event::new(entity, status, silenced))
}

fn events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(event(), 0..80)
}

proptest! {
    #[test]
    fn rollup_is_order_independent(
        (original, shuffled) in events().prop_flat_map(|evs| (Just(evs.clone()), Just(evs).prop_shuffle()))
    ) {
        prop_assert_eq!(rollup(&original), rollup(&shuffled));
    }

    #[test]
    fn chunked_equals_sequential(evs in events(), chunk_size in 1usize..20) {
        prop_assert_eq!(rollup_chunked(&evs, chunk_size), rollup(&evs));
    }

    #[test]
    fn totals_account_for_every_event(evs in events()) {
        let map = rollup(&evs);
        let total: u64 = map.values().map(|s| s.total).sum();
        prop_assert_eq!(total as usize, evs.len());
        for status in map.values() {
            prop_assert!(status.is_consistent());
        }
        prop_assert_eq!(map.len(), entities_from_events(&evs).len());
    }

    #[test]
    fn status_is_merge_of_unsilenced_events(evs in events()) {
        let map = rollup(&evs);
        for (entity, status) in &map {
            let expected = evs
                .iter()
                .filter(|e| e.entity_name() == entity && !e.is_silenced())
                .map(|e| Severity::bucket(e.check_status()))
                .fold(Severity::Ok, Severity::merge);
            prop_assert_eq!(status.status, expected);
        }
    }

    #[test]
    fn fully_silenced_entity_stays_ok(
        statuses in proptest::collection::vec(-1i64..5, 1..20)
    ) {
        let evs: Vec<Event> = statuses.iter().map(|s| Event::new("quiet", *s, true)).collect();
        let quiet = rollup(&evs)["quiet"];
        prop_assert_eq!(quiet.status, Severity::Ok);
        prop_assert_eq!(quiet.silenced as usize, statuses.len());
    }
}
