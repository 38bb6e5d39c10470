mod common;

use diesel::prelude::*;
use hotel_ops::db::{seed_rooms, DbConnection, RepositoryError, RoomOperations};
use hotel_ops::models::booking::NewReservation;
use hotel_ops::test_utils;

fn reservation_for(guest: &str) -> NewReservation {
    NewReservation {
        guest_name: guest.to_string(),
        phone: "555-0100".to_string(),
        check_in_date: "2024-01-01".to_string(),
        check_out_date: "2024-01-03".to_string(),
        room_id: 0,
    }
}

#[test]
fn seed_rooms_populates_101_to_110() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let room_ops = RoomOperations::new(pool);

    let available = room_ops.list_available_rooms().expect("list rooms");
    assert_eq!(available.len(), 10);

    let numbers: Vec<&str> = available.iter().map(|r| r.room_number.as_str()).collect();
    assert!(numbers.contains(&"101"));
    assert!(numbers.contains(&"110"));
    assert!(available.iter().all(|r| !r.is_booked));
}

#[test]
fn seed_rooms_is_idempotent() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();

    // Fixtures already seeded once; a second pass must not duplicate rooms.
    let inserted = seed_rooms(&pool).expect("reseed");
    assert_eq!(inserted, 0);

    let room_ops = RoomOperations::new(pool);
    assert_eq!(room_ops.list_available_rooms().expect("list").len(), 10);
}

#[test]
fn book_creates_reservation_and_flips_flag() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let room_ops = RoomOperations::new(pool.clone());

    let created = room_ops
        .book("101", reservation_for("A. Guest"))
        .expect("book room 101");
    assert_eq!(created.guest_name, "A. Guest");

    let mut conn = DbConnection::new(&pool).expect("db connection");

    use hotel_ops::db::schema::rooms::dsl::*;
    let (room_id_val, booked_flag): (i32, bool) = rooms
        .filter(room_number.eq("101"))
        .select((id, is_booked))
        .first(conn.connection())
        .expect("fetch room");
    assert!(booked_flag);
    assert_eq!(created.room_id, room_id_val);

    use hotel_ops::db::schema::reservations::dsl::reservations;
    let count: i64 = reservations
        .count()
        .get_result(conn.connection())
        .expect("count reservations");
    assert_eq!(count, 1);

    let available = room_ops.list_available_rooms().expect("list rooms");
    assert_eq!(available.len(), 9);
    assert!(available.iter().all(|r| r.room_number != "101"));
}

#[test]
fn pre_booked_rooms_are_excluded_from_listing() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();

    {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        test_utils::insert_room(conn.connection(), "200", false).expect("insert room 200");
        test_utils::insert_room(conn.connection(), "201", true).expect("insert room 201");
    }

    let room_ops = RoomOperations::new(pool);
    let available = room_ops.list_available_rooms().expect("list rooms");
    assert_eq!(available.len(), 11);
    assert!(available.iter().any(|r| r.room_number == "200"));
    assert!(available.iter().all(|r| r.room_number != "201"));
}

#[test]
fn book_unknown_room_fails_without_reservation() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let room_ops = RoomOperations::new(pool.clone());

    let result = room_ops.book("999", reservation_for("B. Guest"));
    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    let mut conn = DbConnection::new(&pool).expect("db connection");
    use hotel_ops::db::schema::reservations::dsl::reservations;
    let count: i64 = reservations
        .count()
        .get_result(conn.connection())
        .expect("count reservations");
    assert_eq!(count, 0);
}

#[test]
fn book_already_booked_room_fails() {
    let (pool, _fixtures, _db) = common::setup_pool_with_fixtures();
    let room_ops = RoomOperations::new(pool.clone());

    room_ops
        .book("102", reservation_for("First Guest"))
        .expect("first booking");
    let second = room_ops.book("102", reservation_for("Second Guest"));
    assert!(matches!(second, Err(RepositoryError::NotFound(_))));

    let mut conn = DbConnection::new(&pool).expect("db connection");
    use hotel_ops::db::schema::reservations::dsl::reservations;
    let count: i64 = reservations
        .count()
        .get_result(conn.connection())
        .expect("count reservations");
    assert_eq!(count, 1, "second booking should not create a reservation");
}
