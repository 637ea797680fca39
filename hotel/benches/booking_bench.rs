use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use tempfile::TempDir;

use hotel::database::{Database, DatabaseConfig};
use hotel::dates::validate_range;
use hotel::{ReservationRequest, ReservationService, RoomId, RoomRequest, RoomService};

const BOOKING_COUNTS: &[usize] = &[10, 100, 500];

fn setup_database() -> (TempDir, Database, RoomId) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db = Database::open(DatabaseConfig::new(temp_dir.path().join("hotel.db")))
        .expect("failed to open temporary database");
    let room = RoomService::new(&db)
        .create(&RoomRequest {
            number: 101,
            room_type: "STANDARD".into(),
            capacity: 2,
            price_per_night: Decimal::new(12050, 2),
            status: "ATIVO".into(),
        })
        .expect("failed to create room");
    (temp_dir, db, room)
}

/// One-night stay starting `offset` days after 2025-01-01.
fn booking(room: &RoomId, offset: usize) -> ReservationRequest {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
        + chrono::Days::new(offset as u64);
    let end = start + chrono::Days::new(1);
    ReservationRequest::new(
        room.as_str(),
        format!("Guest {offset}"),
        start.to_string(),
        end.to_string(),
        Decimal::new(12050, 2),
    )
}

fn populate(db: &Database, room: &RoomId, count: usize) {
    let service = ReservationService::new(db);
    for offset in 0..count {
        service
            .create(booking(room, offset))
            .expect("failed to create booking");
    }
}

fn bench_validate_range(c: &mut Criterion) {
    c.bench_function("validate_range", |b| {
        b.iter(|| validate_range(black_box("2025-06-01"), black_box("2025-06-05")));
    });
}

fn bench_create_after_existing(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_with_overlap_check");
    for &count in BOOKING_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let (dir, db, room) = setup_database();
                    populate(&db, &room, count);
                    (dir, db, room)
                },
                |(_dir, mut db, room)| {
                    let request = booking(&room, count + 1);
                    db.immediate(|conn| ReservationService::new(conn).create(request))
                        .expect("booking should succeed");
                },
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

fn bench_rejected_conflict(c: &mut Criterion) {
    let (_dir, db, room) = setup_database();
    populate(&db, &room, 100);
    let service = ReservationService::new(&db);

    c.bench_function("reject_conflicting_booking", |b| {
        b.iter(|| {
            let result = service.create(black_box(booking(&room, 50)));
            assert!(result.is_err());
        });
    });
}

criterion_group!(
    benches,
    bench_validate_range,
    bench_create_after_existing,
    bench_rejected_conflict
);
criterion_main!(benches);
