use estatus_core::models::{display_token, EntityStatus, Severity};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Ok),
        Just(Severity::Warning),
        Just(Severity::Critical),
        Just(Severity::Unknown),
    ]
}

proptest! {
    #[test]
    fn merge_is_commutative(a in severity(), b in severity()) {
        prop_assert_eq!(a.merge(b), b.merge(a));
    }

    #[test]
    fn merge_is_associative(a in severity(), b in severity(), c in severity()) {
        prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
    }

    #[test]
    fn merge_is_idempotent(a in severity()) {
        prop_assert_eq!(a.merge(a), a);
    }

    #[test]
    fn ok_is_identity(a in severity()) {
        prop_assert_eq!(Severity::Ok.merge(a), a);
        prop_assert_eq!(a.merge(Severity::Ok), a);
    }

    #[test]
    fn display_and_bucket_disagree_only_outside_known_codes(code in any::<i64>()) {
        match Severity::from_code(code) {
            Some(s) => {
                prop_assert_eq!(display_token(code), s.token());
                prop_assert_eq!(Severity::bucket(code), s);
            }
            None => {
                prop_assert_eq!(display_token(code), "UNKN");
                prop_assert_eq!(Severity::bucket(code), Severity::Ok);
            }
        }
    }

    #[test]
    fn record_keeps_total_consistent(
        results in proptest::collection::vec((-2i64..6, any::<bool>()), 0..64)
    ) {
        let mut status = EntityStatus::default();
        for (code, silenced) in &results {
            status.record(*code, *silenced);
            prop_assert!(status.is_consistent());
        }
        prop_assert_eq!(status.total as usize, results.len());
        prop_assert_eq!(
            status.silenced as usize,
            results.iter().filter(|(_, s)| *s).count()
        );
    }
}
