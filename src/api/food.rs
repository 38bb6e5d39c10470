use crate::db::FoodOperations;
use crate::enums::inventory::{AllFoodItemsResponse, NewFoodItemForm, UpdateQuantityForm};
use crate::models::inventory::NewFoodItem;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

pub(super) fn config(cfg: &mut web::ServiceConfig, food_ops: &FoodOperations) {
    cfg.app_data(web::Data::new(food_ops.clone()))
        .service(get_all_food_items)
        .service(add_food_item)
        .service(update_food_item)
        .service(delete_food_item);
}

fn redirect_to_inventory() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/food-inventory"))
        .finish()
}

#[utoipa::path(
    tag = "Food inventory",
    responses(
        (status = 200, description = "Successfully retrieved all food items", body = AllFoodItemsResponse),
        (status = 500, description = "Failed to retrieve food items due to server error", body = AllFoodItemsResponse)
    ),
    summary = "List food inventory"
)]
#[get("/food-inventory")]
pub(super) async fn get_all_food_items(food_ops: web::Data<FoodOperations>) -> impl Responder {
    match food_ops.get_all_food_items() {
        Ok(x) => {
            debug!(
                "get_all_food_items: successfully fetched {} food items",
                x.len()
            );
            HttpResponse::Ok().json(AllFoodItemsResponse {
                status: "ok".to_string(),
                data: x,
                error: None,
            })
        }
        Err(e) => {
            error!("get_all_food_items: failed to retrieve food items: {}", e);
            HttpResponse::InternalServerError().json(AllFoodItemsResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

#[utoipa::path(
    tag = "Food inventory",
    request_body(content = NewFoodItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Food item created, redirect to inventory listing"),
        (status = 500, description = "Failed to create food item")
    ),
    summary = "Add a food item with a free-form quantity"
)]
#[post("/add-food-item")]
pub(super) async fn add_food_item(
    food_ops: web::Data<FoodOperations>,
    form: web::Form<NewFoodItemForm>,
) -> impl Responder {
    let form = form.into_inner();
    let item_name = form.item_name.clone();
    match food_ops.create_food_item(NewFoodItem {
        item_name: form.item_name,
        quantity: form.quantity,
    }) {
        Ok(created) => {
            debug!(
                "add_food_item: successfully created food item '{}' (id {})",
                item_name, created.id
            );
            redirect_to_inventory()
        }
        Err(e) => {
            error!(
                "add_food_item: failed to create food item '{}': {}",
                item_name, e
            );
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[utoipa::path(
    tag = "Food inventory",
    request_body(content = UpdateQuantityForm, content_type = "application/x-www-form-urlencoded"),
    params(("id" = i32, Path, description = "Food item id")),
    responses(
        (status = 303, description = "Food item updated (no-op for unknown ids), redirect to inventory listing"),
        (status = 500, description = "Failed to update food item")
    ),
    summary = "Update a food item's quantity (integer-coerced)"
)]
#[post("/update-food-item/{id}")]
pub(super) async fn update_food_item(
    food_ops: web::Data<FoodOperations>,
    path: web::Path<(i32,)>,
    form: web::Form<UpdateQuantityForm>,
) -> impl Responder {
    let food_id = path.into_inner().0;
    match food_ops.update_quantity(food_id, form.quantity) {
        Ok(updated) => {
            debug!(
                "update_food_item: updated {} row(s) for food item {}",
                updated, food_id
            );
            redirect_to_inventory()
        }
        Err(e) => {
            error!(
                "update_food_item: failed to update food item {}: {}",
                food_id, e
            );
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[utoipa::path(
    tag = "Food inventory",
    params(("id" = i32, Path, description = "Food item id")),
    responses(
        (status = 303, description = "Food item deleted (no-op for unknown ids), redirect to inventory listing"),
        (status = 500, description = "Failed to delete food item")
    ),
    summary = "Delete a food item"
)]
#[post("/delete-food-item/{id}")]
pub(super) async fn delete_food_item(
    food_ops: web::Data<FoodOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    let food_id = path.into_inner().0;
    match food_ops.delete_food_item(food_id) {
        Ok(deleted) => {
            debug!(
                "delete_food_item: deleted {} row(s) for food item {}",
                deleted, food_id
            );
            redirect_to_inventory()
        }
        Err(e) => {
            error!(
                "delete_food_item: failed to delete food item {}: {}",
                food_id, e
            );
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
