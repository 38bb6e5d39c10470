use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::supplies)]
pub struct Supply {
    pub id: i32,
    pub item_name: String,
    pub quantity: i32,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::supplies)]
pub struct NewSupply {
    pub item_name: String,
    pub quantity: i32,
}

// Quantity stays free-form text ("3kg", "5L") on insert; the update path
// coerces to an integer. See FoodOperations::update_quantity.
#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::food_inventory)]
pub struct FoodItem {
    pub id: i32,
    pub item_name: String,
    pub quantity: String,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::db::schema::food_inventory)]
pub struct NewFoodItem {
    pub item_name: String,
    pub quantity: String,
}
