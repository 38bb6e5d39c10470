use crate::models::inventory::{FoodItem, Supply};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AllSuppliesResponse {
    pub status: String,
    pub data: Vec<Supply>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AllFoodItemsResponse {
    pub status: String,
    pub data: Vec<FoodItem>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct NewSupplyForm {
    pub item_name: String,
    pub quantity: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct NewFoodItemForm {
    pub item_name: String,
    pub quantity: String,
}

// Shared by the supply and food-item update endpoints; both coerce the
// posted quantity to an integer.
#[derive(Deserialize, ToSchema)]
pub struct UpdateQuantityForm {
    pub quantity: i32,
}
