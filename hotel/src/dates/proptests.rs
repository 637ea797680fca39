//! Property-based tests for stay date validation and overlap.

use super::{parse_date, validate_range, DateField, StayDates};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

// Dates within a few years of a fixed origin
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..2000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    })
}

// Valid stays of one to thirty nights
fn stay_strategy() -> impl Strategy<Value = StayDates> {
    (date_strategy(), 1i64..=30).prop_map(|(checkin, nights)| {
        StayDates::new(checkin, checkin + Duration::days(nights)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Formatting then parsing a date is lossless
    #[test]
    fn formatted_dates_parse_back(date in date_strategy()) {
        let text = date.format(super::DATE_FORMAT).to_string();
        prop_assert_eq!(parse_date(&text, DateField::Checkin).unwrap(), date);
    }

    // A range is accepted exactly when checkout is strictly later
    #[test]
    fn range_accepted_iff_checkout_after_checkin(a in date_strategy(), b in date_strategy()) {
        let result = validate_range(&a.to_string(), &b.to_string());
        prop_assert_eq!(result.is_ok(), b > a);
    }

    // Overlap is symmetric
    #[test]
    fn overlap_is_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // Every stay overlaps itself
    #[test]
    fn overlap_is_reflexive(a in stay_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // Overlap agrees with sharing at least one night
    #[test]
    fn overlap_matches_shared_night(a in stay_strategy(), b in stay_strategy()) {
        let mut shared = false;
        let mut night = a.checkin();
        while night < a.checkout() {
            if b.contains(night) {
                shared = true;
                break;
            }
            night += Duration::days(1);
        }
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    // A stay starting on another's checkout day never overlaps it
    #[test]
    fn back_to_back_stays_do_not_overlap(a in stay_strategy(), nights in 1i64..=30) {
        let next = StayDates::new(a.checkout(), a.checkout() + Duration::days(nights)).unwrap();
        prop_assert!(!a.overlaps(&next));
        prop_assert!(!next.overlaps(&a));
    }
}
