use crate::db::{
    establish_connection_pool, run_db_migrations, seed_rooms, DbConnection, RepositoryError,
};
use crate::models::booking::NewReservation;
use crate::models::inventory::{NewFoodItem, NewSupply};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

// Fixture strategy:
// - Each test gets its own throwaway SQLite file, so no cross-test cleanup
//   or single-threading is needed.
// - Rooms come from the production seed (101-110); inventory rows come from
//   the helpers below.

pub fn build_test_pool(database_url: &str) -> Pool<ConnectionManager<SqliteConnection>> {
    let pool = establish_connection_pool(database_url);
    run_db_migrations(pool.clone()).expect("Unable to run migrations");
    pool
}

pub struct TestFixtures {
    pub supply_id: i32,
    pub food_item_id: i32,
}

/// Seeds rooms 101-110 plus one supply and one food item.
pub fn seed_basic_fixtures(
    pool: &Pool<ConnectionManager<SqliteConnection>>,
) -> Result<TestFixtures, RepositoryError> {
    seed_rooms(pool)?;

    let mut conn = DbConnection::new(pool)?;
    let supply_id = insert_supply(conn.connection(), "Towels", 25)?;
    let food_item_id = insert_food_item(conn.connection(), "Rice", "3kg")?;

    Ok(TestFixtures {
        supply_id,
        food_item_id,
    })
}

pub fn insert_room(
    conn: &mut SqliteConnection,
    room_number_val: &str,
    is_booked_val: bool,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::rooms::dsl::*;

    diesel::insert_into(rooms)
        .values((room_number.eq(room_number_val), is_booked.eq(is_booked_val)))
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_reservation(
    conn: &mut SqliteConnection,
    guest_name_val: &str,
    phone_val: &str,
    check_in_val: &str,
    check_out_val: &str,
    room_id_val: i32,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::reservations::dsl::*;

    let new_reservation = NewReservation {
        guest_name: guest_name_val.to_string(),
        phone: phone_val.to_string(),
        check_in_date: check_in_val.to_string(),
        check_out_date: check_out_val.to_string(),
        room_id: room_id_val,
    };

    diesel::insert_into(reservations)
        .values(&new_reservation)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_supply(
    conn: &mut SqliteConnection,
    item_name_val: &str,
    quantity_val: i32,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::supplies::dsl::*;

    let new_supply = NewSupply {
        item_name: item_name_val.to_string(),
        quantity: quantity_val,
    };

    diesel::insert_into(supplies)
        .values(&new_supply)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_food_item(
    conn: &mut SqliteConnection,
    item_name_val: &str,
    quantity_val: &str,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::food_inventory::dsl::*;

    let new_item = NewFoodItem {
        item_name: item_name_val.to_string(),
        quantity: quantity_val.to_string(),
    };

    diesel::insert_into(food_inventory)
        .values(&new_item)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}
