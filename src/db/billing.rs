use crate::db::errors::RepositoryError;
use crate::db::schema::{bills, reservations, rooms};
use crate::db::DbConnection;
use crate::models::billing::{Bill, NewBill};
use crate::models::booking::ReservationSummary;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;

use log::error;

pub struct BillingOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl BillingOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    pub fn list_active_reservations(&self) -> Result<Vec<ReservationSummary>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "list_active_reservations: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        reservations::table
            .inner_join(rooms::table)
            .select((
                reservations::id,
                reservations::guest_name,
                reservations::phone,
                reservations::check_in_date,
                reservations::check_out_date,
                rooms::room_number,
            ))
            .load::<ReservationSummary>(conn.connection())
            .map_err(|e| {
                error!(
                    "list_active_reservations: error fetching reservations: {}",
                    e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Closes out a stay: writes the bill, removes the reservation and frees
    /// the room. The three statements are not wrapped in a transaction; a
    /// crash in between leaves the room flag and reservation out of sync.
    pub fn generate_bill(
        &self,
        reservation_id: i32,
        room_price: f64,
        food_charge: f64,
        activities_charge: f64,
    ) -> Result<Bill, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "generate_bill: failed to acquire DB connection for reservation {}: {}",
                reservation_id, e
            );
            e
        })?;

        let (guest_name, phone, room_number, billed_room_id): (String, String, String, i32) =
            reservations::table
                .inner_join(rooms::table)
                .filter(reservations::id.eq(reservation_id))
                .select((
                    reservations::guest_name,
                    reservations::phone,
                    rooms::room_number,
                    reservations::room_id,
                ))
                .first(conn.connection())
                .map_err(|e| match e {
                    Error::NotFound => {
                        RepositoryError::NotFound(format!("reservations: {reservation_id}"))
                    }
                    other => {
                        error!(
                            "generate_bill: error fetching reservation {}: {}",
                            reservation_id, other
                        );
                        RepositoryError::DatabaseError(other)
                    }
                })?;

        let new_bill = NewBill {
            guest_name,
            phone,
            room_number,
            total_payment: room_price + food_charge + activities_charge,
        };

        let bill: Bill = diesel::insert_into(bills::table)
            .values(&new_bill)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "generate_bill: error inserting bill for reservation {}: {}",
                    reservation_id, e
                );
                RepositoryError::DatabaseError(e)
            })?;

        diesel::delete(reservations::table.filter(reservations::id.eq(reservation_id)))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "generate_bill: error deleting reservation {}: {}",
                    reservation_id, e
                );
                RepositoryError::DatabaseError(e)
            })?;

        diesel::update(rooms::table.filter(rooms::id.eq(billed_room_id)))
            .set(rooms::is_booked.eq(false))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "generate_bill: error freeing room {}: {}",
                    billed_room_id, e
                );
                RepositoryError::DatabaseError(e)
            })?;

        Ok(bill)
    }

    pub fn list_bills(&self) -> Result<Vec<Bill>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("list_bills: failed to acquire DB connection: {}", e);
            e
        })?;

        bills::table
            .order_by(bills::id.asc())
            .load::<Bill>(conn.connection())
            .map_err(|e| {
                error!("list_bills: error fetching bills: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }
}

impl Clone for BillingOperations {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}
