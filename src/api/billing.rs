use crate::db::{BillingOperations, RepositoryError};
use crate::enums::billing::{AllBillsResponse, AllReservationsResponse, BillForm};
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

pub(super) fn config(cfg: &mut web::ServiceConfig, billing_ops: &BillingOperations) {
    cfg.app_data(web::Data::new(billing_ops.clone()))
        .service(list_active_reservations)
        .service(generate_bill)
        .service(list_bills);
}

#[utoipa::path(
    tag = "Billing",
    responses(
        (status = 200, description = "Successfully retrieved all active reservations", body = AllReservationsResponse),
        (status = 500, description = "Failed to retrieve reservations due to server error", body = AllReservationsResponse)
    ),
    summary = "List active reservations for checkout"
)]
#[get("/checkout")]
pub(super) async fn list_active_reservations(
    billing_ops: web::Data<BillingOperations>,
) -> impl Responder {
    match billing_ops.list_active_reservations() {
        Ok(x) => {
            debug!(
                "list_active_reservations: successfully fetched {} reservations",
                x.len()
            );
            HttpResponse::Ok().json(AllReservationsResponse {
                status: "ok".to_string(),
                data: x,
                error: None,
            })
        }
        Err(e) => {
            error!(
                "list_active_reservations: failed to retrieve reservations: {}",
                e
            );
            HttpResponse::InternalServerError().json(AllReservationsResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

#[utoipa::path(
    tag = "Billing",
    request_body(content = BillForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Bill created and reservation closed, redirect to main menu"),
        (status = 400, description = "Reservation id does not resolve")
    ),
    summary = "Generate a bill and check the guest out"
)]
#[post("/generate-bill")]
pub(super) async fn generate_bill(
    billing_ops: web::Data<BillingOperations>,
    form: web::Form<BillForm>,
) -> impl Responder {
    let form = form.into_inner();
    match billing_ops.generate_bill(
        form.reservation_id,
        form.room_price,
        form.food_charge,
        form.activities_charge,
    ) {
        Ok(bill) => {
            debug!(
                "generate_bill: created bill {} for guest '{}' (total {})",
                bill.id, bill.guest_name, bill.total_payment
            );
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
        Err(RepositoryError::NotFound(_)) => {
            debug!(
                "generate_bill: reservation {} not found",
                form.reservation_id
            );
            HttpResponse::BadRequest().body("Invalid reservation ID.")
        }
        Err(e) => {
            error!(
                "generate_bill: failed to bill reservation {}: {}",
                form.reservation_id, e
            );
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[utoipa::path(
    tag = "Billing",
    responses(
        (status = 200, description = "Successfully retrieved all bills", body = AllBillsResponse),
        (status = 500, description = "Failed to retrieve bills due to server error", body = AllBillsResponse)
    ),
    summary = "List all generated bills"
)]
#[get("/bills")]
pub(super) async fn list_bills(billing_ops: web::Data<BillingOperations>) -> impl Responder {
    match billing_ops.list_bills() {
        Ok(x) => {
            debug!("list_bills: successfully fetched {} bills", x.len());
            HttpResponse::Ok().json(AllBillsResponse {
                status: "ok".to_string(),
                data: x,
                error: None,
            })
        }
        Err(e) => {
            error!("list_bills: failed to retrieve bills: {}", e);
            HttpResponse::InternalServerError().json(AllBillsResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}
