use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::bills)]
pub struct Bill {
    pub id: i32,
    pub guest_name: String,
    pub phone: String,
    pub room_number: String,
    pub total_payment: f64,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::bills)]
pub struct NewBill {
    pub guest_name: String,
    pub phone: String,
    pub room_number: String,
    pub total_payment: f64,
}
