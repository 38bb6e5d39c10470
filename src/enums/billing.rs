use crate::models::billing::Bill;
use crate::models::booking::ReservationSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AllReservationsResponse {
    pub status: String,
    pub data: Vec<ReservationSummary>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AllBillsResponse {
    pub status: String,
    pub data: Vec<Bill>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct BillForm {
    pub reservation_id: i32,
    pub room_price: f64,
    pub food_charge: f64,
    pub activities_charge: f64,
}
