use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::rooms)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub is_booked: bool,
}

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::reservations)]
pub struct Reservation {
    pub id: i32,
    pub guest_name: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room_id: i32,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::reservations)]
pub struct NewReservation {
    pub guest_name: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room_id: i32,
}

/// Reservation joined to its room, as shown on the checkout page.
#[derive(Queryable, Debug, Serialize, ToSchema)]
pub struct ReservationSummary {
    pub id: i32,
    pub guest_name: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room_number: String,
}
