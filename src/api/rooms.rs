use crate::db::{RepositoryError, RoomOperations};
use crate::enums::booking::{AllRoomsResponse, BookingForm};
use crate::models::booking::NewReservation;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, error};

pub(super) fn config(cfg: &mut web::ServiceConfig, room_ops: &RoomOperations) {
    cfg.app_data(web::Data::new(room_ops.clone()))
        .service(list_available_rooms)
        .service(book);
}

#[utoipa::path(
    tag = "Rooms",
    responses(
        (status = 200, description = "Successfully retrieved all unbooked rooms", body = AllRoomsResponse),
        (status = 500, description = "Failed to retrieve rooms due to server error", body = AllRoomsResponse)
    ),
    summary = "List rooms currently available for booking"
)]
#[get("/book-room")]
pub(super) async fn list_available_rooms(room_ops: web::Data<RoomOperations>) -> impl Responder {
    match room_ops.list_available_rooms() {
        Ok(x) => {
            debug!(
                "list_available_rooms: successfully fetched {} available rooms",
                x.len()
            );
            HttpResponse::Ok().json(AllRoomsResponse {
                status: "ok".to_string(),
                data: x,
                error: None,
            })
        }
        Err(e) => {
            error!("list_available_rooms: failed to retrieve rooms: {}", e);
            HttpResponse::InternalServerError().json(AllRoomsResponse {
                status: "error".to_string(),
                data: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

#[utoipa::path(
    tag = "Rooms",
    request_body(content = BookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Reservation created, redirect to main menu"),
        (status = 400, description = "Room does not exist or is already booked")
    ),
    summary = "Book a room for a guest"
)]
#[post("/book")]
pub(super) async fn book(
    room_ops: web::Data<RoomOperations>,
    form: web::Form<BookingForm>,
) -> impl Responder {
    let form = form.into_inner();
    let reservation = NewReservation {
        guest_name: form.guest_name,
        phone: form.phone,
        check_in_date: form.check_in_date,
        check_out_date: form.check_out_date,
        // Replaced with the claimed room's id during booking.
        room_id: 0,
    };

    match room_ops.book(&form.room_number, reservation) {
        Ok(created) => {
            debug!(
                "book: successfully booked room '{}' for guest '{}' (reservation {})",
                form.room_number, created.guest_name, created.id
            );
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
        Err(RepositoryError::NotFound(_)) => {
            debug!("book: room '{}' not available", form.room_number);
            HttpResponse::BadRequest().body("Room not available or already booked.")
        }
        Err(e) => {
            error!("book: failed to book room '{}': {}", form.room_number, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
