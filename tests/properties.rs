use bluetime::{Delta, DifferenceMode, TimeUnit, UtcInstant};
use proptest::prelude::*;

// Keep epochs inside chrono's range so relative mode reads real fields.
const SPAN: i64 = 8_000_000_000_000;

proptest! {
    /// Property: wrapping an epoch never alters it.
    #[test]
    fn prop_from_epoch_roundtrip(epoch in any::<i64>()) {
        prop_assert_eq!(UtcInstant::from_epoch(epoch).epoch_seconds(), epoch);
    }

    /// Property: an instant is zero away from itself in every unit and mode.
    #[test]
    fn prop_self_difference_is_zero(epoch in -SPAN..SPAN, relative in any::<bool>()) {
        let t = UtcInstant::from_epoch(epoch);
        let all = t.differences(&t, DifferenceMode::from_relative_flag(relative));
        for (_, delta) in &all {
            prop_assert!(delta.is_zero());
        }
    }

    /// Property: swapping the operands negates every absolute difference.
    #[test]
    fn prop_absolute_antisymmetry(a in -SPAN..SPAN, b in -SPAN..SPAN) {
        let (x, y) = (UtcInstant::from_epoch(a), UtcInstant::from_epoch(b));
        for unit in TimeUnit::ASCENDING {
            let forward = x.difference(&y, unit, DifferenceMode::Absolute);
            let backward = y.difference(&x, unit, DifferenceMode::Absolute);
            prop_assert_eq!(forward, -backward);
        }
    }

    /// Property: absolute seconds are the exact signed gap, receiver first.
    #[test]
    fn prop_absolute_seconds_exact(a in -SPAN..SPAN, b in -SPAN..SPAN) {
        let delta = UtcInstant::from_epoch(a)
            .difference(&UtcInstant::from_epoch(b), TimeUnit::Seconds, DifferenceMode::Absolute);
        prop_assert_eq!(delta, Delta::Whole(b - a));
    }

    /// Property: the sign follows the epoch ordering in relative mode too.
    #[test]
    fn prop_relative_sign_follows_ordering(a in -SPAN..SPAN, b in -SPAN..SPAN) {
        let (x, y) = (UtcInstant::from_epoch(a), UtcInstant::from_epoch(b));
        for (_, delta) in &x.differences(&y, DifferenceMode::Relative) {
            let value = delta.as_f64();
            if a < b {
                prop_assert!(value >= 0.0);
            } else {
                prop_assert!(value <= 0.0);
            }
        }
    }
}
