use crate::db::SupplyOperations;
use crate::enums::inventory::{AllSuppliesResponse, NewSupplyForm, UpdateQuantityForm};
use crate::models::inventory::NewSupply;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

pub(super) fn config(cfg: &mut web::ServiceConfig, supply_ops: &SupplyOperations) {
    cfg.app_data(web::Data::new(supply_ops.clone()))
        .service(get_all_supplies)
        .service(add_supply)
        .service(update_supply)
        .service(delete_supply);
}

fn redirect_to_supplies() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/supplies"))
        .finish()
}

#[utoipa::path(
    tag = "Supplies",
    responses(
        (status = 200, description = "Successfully retrieved all supplies", body = AllSuppliesResponse),
        (status = 500, description = "Failed to retrieve supplies due to server error", body = AllSuppliesResponse)
    ),
    summary = "List housekeeping supplies"
)]
#[get("/supplies")]
pub(super) async fn get_all_supplies(supply_ops: web::Data<SupplyOperations>) -> impl Responder {
    match supply_ops.get_all_supplies() {
        Ok(x) => {
            debug!("get_all_supplies: successfully fetched {} supplies", x.len());
            HttpResponse::Ok().json(AllSuppliesResponse {
                status: "ok".to_string(),
                data: x,
                error: None,
            })
        }
        Err(e) => {
            error!("get_all_supplies: failed to retrieve supplies: {}", e);
            HttpResponse::InternalServerError().json(AllSuppliesResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

#[utoipa::path(
    tag = "Supplies",
    request_body(content = NewSupplyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Supply created, redirect to supplies listing"),
        (status = 500, description = "Failed to create supply")
    ),
    summary = "Add a housekeeping supply"
)]
#[post("/add-supply")]
pub(super) async fn add_supply(
    supply_ops: web::Data<SupplyOperations>,
    form: web::Form<NewSupplyForm>,
) -> impl Responder {
    let form = form.into_inner();
    let item_name = form.item_name.clone();
    match supply_ops.create_supply(NewSupply {
        item_name: form.item_name,
        quantity: form.quantity,
    }) {
        Ok(created) => {
            debug!(
                "add_supply: successfully created supply '{}' (id {})",
                item_name, created.id
            );
            redirect_to_supplies()
        }
        Err(e) => {
            error!("add_supply: failed to create supply '{}': {}", item_name, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[utoipa::path(
    tag = "Supplies",
    request_body(content = UpdateQuantityForm, content_type = "application/x-www-form-urlencoded"),
    params(("id" = i32, Path, description = "Supply id")),
    responses(
        (status = 303, description = "Supply updated (no-op for unknown ids), redirect to supplies listing"),
        (status = 500, description = "Failed to update supply")
    ),
    summary = "Update a supply's quantity"
)]
#[post("/update-supply/{id}")]
pub(super) async fn update_supply(
    supply_ops: web::Data<SupplyOperations>,
    path: web::Path<(i32,)>,
    form: web::Form<UpdateQuantityForm>,
) -> impl Responder {
    let supply_id = path.into_inner().0;
    match supply_ops.update_quantity(supply_id, form.quantity) {
        Ok(updated) => {
            debug!(
                "update_supply: updated {} row(s) for supply {}",
                updated, supply_id
            );
            redirect_to_supplies()
        }
        Err(e) => {
            error!("update_supply: failed to update supply {}: {}", supply_id, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[utoipa::path(
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply id")),
    responses(
        (status = 303, description = "Supply deleted (no-op for unknown ids), redirect to supplies listing"),
        (status = 500, description = "Failed to delete supply")
    ),
    summary = "Delete a supply"
)]
#[post("/delete-supply/{id}")]
pub(super) async fn delete_supply(
    supply_ops: web::Data<SupplyOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    let supply_id = path.into_inner().0;
    match supply_ops.delete_supply(supply_id) {
        Ok(deleted) => {
            debug!(
                "delete_supply: deleted {} row(s) for supply {}",
                deleted, supply_id
            );
            redirect_to_supplies()
        }
        Err(e) => {
            error!("delete_supply: failed to delete supply {}: {}", supply_id, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
