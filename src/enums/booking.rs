use crate::models::booking::Room;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AllRoomsResponse {
    pub status: String,
    pub data: Vec<Room>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct BookingForm {
    pub guest_name: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub room_number: String,
}
