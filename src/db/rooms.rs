use crate::db::errors::RepositoryError;
use crate::db::schema::rooms::dsl::*;
use crate::db::DbConnection;
use crate::models::booking::{NewReservation, Reservation, Room};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use log::error;

pub struct RoomOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl RoomOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    pub fn list_available_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "list_available_rooms: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        rooms
            .filter(is_booked.eq(false))
            .load::<Room>(conn.connection())
            .map_err(|e| {
                error!("list_available_rooms: error fetching rooms: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    /// Books the room with the given number for a guest.
    ///
    /// The availability flag is flipped with a single conditional UPDATE, so
    /// two racing requests for the same room cannot both succeed. The flag
    /// update and the reservation insert are still two separate statements.
    pub fn book(
        &self,
        booked_room_number: &str,
        reservation: NewReservation,
    ) -> Result<Reservation, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("book: failed to acquire DB connection: {}", e);
            e
        })?;

        let claimed = diesel::update(
            rooms
                .filter(room_number.eq(booked_room_number))
                .filter(is_booked.eq(false)),
        )
        .set(is_booked.eq(true))
        .execute(conn.connection())
        .map_err(|e| {
            error!(
                "book: error claiming room '{}': {}",
                booked_room_number, e
            );
            RepositoryError::DatabaseError(e)
        })?;

        if claimed == 0 {
            return Err(RepositoryError::NotFound(format!(
                "rooms: {booked_room_number}"
            )));
        }

        let booked_room_id: i32 = rooms
            .filter(room_number.eq(booked_room_number))
            .select(id)
            .first(conn.connection())
            .map_err(|e| {
                error!(
                    "book: error fetching id of room '{}': {}",
                    booked_room_number, e
                );
                RepositoryError::DatabaseError(e)
            })?;

        let reservation = NewReservation {
            room_id: booked_room_id,
            ..reservation
        };

        use crate::db::schema::reservations::dsl::reservations;
        diesel::insert_into(reservations)
            .values(&reservation)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "book: error inserting reservation for guest '{}': {}",
                    reservation.guest_name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}

impl Clone for RoomOperations {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}
