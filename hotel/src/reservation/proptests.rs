//! Property-based tests for the in-memory blocking predicate.

use super::{NewReservation, Reservation, ReservationId};
use crate::dates::StayDates;
use crate::room::RoomId;
use crate::status::ReservationStatus;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn stay_strategy() -> impl Strategy<Value = StayDates> {
    (0i64..400, 1i64..=21).prop_map(|(offset, nights)| {
        let checkin = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset);
        StayDates::new(checkin, checkin + Duration::days(nights)).unwrap()
    })
}

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ReservationStatus::ALL.to_vec())
}

fn reservation(room: &str, stay: StayDates, status: ReservationStatus) -> Reservation {
    NewReservation {
        room_id: RoomId::new(room),
        guest_name: "Guest".into(),
        stay,
        status,
        total_amount: Decimal::ONE,
    }
    .with_id(ReservationId::new("existing"))
}

proptest! {
    // Canceled reservations never block any stay
    #[test]
    fn canceled_never_blocks(existing in stay_strategy(), wanted in stay_strategy()) {
        let r = reservation("room-1", existing, ReservationStatus::Canceled);
        prop_assert!(!r.blocks(&RoomId::new("room-1"), &wanted, None));
    }

    // Reservations of another room never block
    #[test]
    fn other_rooms_never_block(
        existing in stay_strategy(),
        wanted in stay_strategy(),
        status in status_strategy()
    ) {
        let r = reservation("room-1", existing, status);
        prop_assert!(!r.blocks(&RoomId::new("room-2"), &wanted, None));
    }

    // A reservation never blocks its own re-submission
    #[test]
    fn excluded_reservation_never_blocks(
        existing in stay_strategy(),
        wanted in stay_strategy(),
        status in status_strategy()
    ) {
        let r = reservation("room-1", existing, status);
        prop_assert!(!r.blocks(&RoomId::new("room-1"), &wanted, Some(&r.id)));
    }

    // For an active reservation of the same room, blocking is exactly overlap
    #[test]
    fn active_same_room_blocks_iff_overlap(
        existing in stay_strategy(),
        wanted in stay_strategy(),
        status in status_strategy()
    ) {
        prop_assume!(status != ReservationStatus::Canceled);
        let r = reservation("room-1", existing, status);
        prop_assert_eq!(
            r.blocks(&RoomId::new("room-1"), &wanted, None),
            existing.overlaps(&wanted)
        );
    }
}
